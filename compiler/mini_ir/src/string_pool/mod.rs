//! String-literal constants.
//!
//! Every string literal the parser meets gets its own entry, even when an
//! identical literal was pooled before: generated names are distinct per
//! occurrence.

use std::fmt::Write;

use tracing::trace;

/// Index of a pooled string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringId(u32);

impl StringId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One pooled literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringConstant {
    /// Generated global name, without the `@` sigil.
    pub name: String,
    /// Literal content after escape processing.
    pub bytes: Vec<u8>,
}

impl StringConstant {
    /// Byte length, not counting the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte length including the implicit NUL terminator.
    #[inline]
    pub fn len_with_nul(&self) -> usize {
        self.bytes.len() + 1
    }

    /// Content with every byte written as `\XX`, terminator included.
    pub fn escaped(&self) -> String {
        escape_bytes(&self.bytes)
    }
}

/// Write every byte as a backslash-hex escape and append `\00`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() + 1) * 3);
    for byte in bytes {
        let _ = write!(out, "\\{byte:02X}");
    }
    out.push_str("\\00");
    out
}

/// Ordered sequence of pooled literals.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StringPool {
    constants: Vec<StringConstant>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal and return its id. Never deduplicates.
    pub fn add(&mut self, bytes: impl Into<Vec<u8>>) -> StringId {
        let index = self.constants.len();
        let name = format!("str_{index}");
        trace!(%name, "pooled string literal");
        self.constants.push(StringConstant {
            name,
            bytes: bytes.into(),
        });
        StringId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[inline]
    pub fn get(&self, id: StringId) -> &StringConstant {
        &self.constants[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StringConstant> {
        self.constants.iter()
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
