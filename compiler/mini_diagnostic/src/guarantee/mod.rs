//! Type-level proof that at least one error was reported.

use std::fmt;

/// Proof that the diagnostic queue counted at least one error.
///
/// There is no public constructor that works on a clean run:
/// [`ErrorGuaranteed::from_error_count`] returns `None` for zero, so a value
/// of this type always means "do not generate code".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Returns a guarantee when `count` is nonzero.
    pub const fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(ErrorGuaranteed(()))
        } else {
            None
        }
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}
