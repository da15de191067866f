//! Type tags.

use std::fmt;

/// Type tag attached to every expression by the type checker.
///
/// `Undeclared` and `Error` are sentinels: they let analysis continue after a
/// problem has been reported and must never reach code generation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    Int,
    Double,
    Bool,
    /// Reference to an identifier with no declaration.
    Undeclared,
    /// Result of an expression whose operands could not be combined.
    Error,
}

impl Ty {
    /// Name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Ty::Int => "int",
            Ty::Double => "double",
            Ty::Bool => "bool",
            Ty::Undeclared => "undeclared variable",
            Ty::Error => "incalculable expression",
        }
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Ty::Int | Ty::Double)
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Ty::Undeclared | Ty::Error)
    }

    /// The declared type this tag corresponds to, if it is not a sentinel.
    pub const fn as_prim(self) -> Option<PrimType> {
        match self {
            Ty::Int => Some(PrimType::Int),
            Ty::Double => Some(PrimType::Double),
            Ty::Bool => Some(PrimType::Bool),
            Ty::Undeclared | Ty::Error => None,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A type a variable can be declared with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimType {
    Int,
    Double,
    Bool,
}

impl PrimType {
    pub const fn ty(self) -> Ty {
        match self {
            PrimType::Int => Ty::Int,
            PrimType::Double => Ty::Double,
            PrimType::Bool => Ty::Bool,
        }
    }

    /// Source keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimType::Int => "int",
            PrimType::Double => "double",
            PrimType::Bool => "bool",
        }
    }
}

impl From<PrimType> for Ty {
    fn from(prim: PrimType) -> Ty {
        prim.ty()
    }
}
