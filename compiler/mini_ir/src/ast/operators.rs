//! Binary and unary operators.

/// Binary operators. Assignment is not here: its left side is an
/// identifier, not an expression, so it is its own [`ExprKind`](super::ExprKind).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical
    Or,
    And,

    // Equality
    Eq,
    NotEq,

    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Bitwise
    BitOr,
    BitAnd,
}

/// Operator families sharing one typing rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpClass {
    Logical,
    Equality,
    Relational,
    Arithmetic,
    Bitwise,
}

impl BinaryOp {
    /// Returns the source-level symbol, for error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::BitOr => "|",
            Self::BitAnd => "&",
        }
    }

    pub const fn class(self) -> OpClass {
        match self {
            Self::Or | Self::And => OpClass::Logical,
            Self::Eq | Self::NotEq => OpClass::Equality,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => OpClass::Relational,
            Self::Add | Self::Sub | Self::Mul | Self::Div => OpClass::Arithmetic,
            Self::BitOr | Self::BitAnd => OpClass::Bitwise,
        }
    }
}

/// Unary operators, including the two cast operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `~x`
    BitNot,
    /// `!x`
    Not,
    /// `(int)x`
    CastInt,
    /// `(double)x`
    CastDouble,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::Not => "!",
            Self::CastInt => "(int)",
            Self::CastDouble => "(double)",
        }
    }
}
