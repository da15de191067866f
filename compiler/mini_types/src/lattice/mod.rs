//! Coercion lattice and per-operator legality rules.
//!
//! Pure functions over [`Ty`]. `None` means the combination is illegal; the
//! checker then reports it and substitutes [`binary_fallback`] /
//! [`unary_fallback`].

use mini_ir::{BinaryOp, OpClass, Ty, UnaryOp};

/// Result type of `left op right`, if legal.
pub fn binary_result(op: BinaryOp, left: Ty, right: Ty) -> Option<Ty> {
    match (op.class(), left, right) {
        (OpClass::Logical | OpClass::Equality, Ty::Bool, Ty::Bool) => Some(Ty::Bool),
        (OpClass::Equality | OpClass::Relational, l, r) if l.is_numeric() && r.is_numeric() => {
            Some(Ty::Bool)
        }
        (OpClass::Arithmetic | OpClass::Bitwise, Ty::Int, Ty::Int) => Some(Ty::Int),
        (OpClass::Arithmetic, l, r) if l.is_numeric() && r.is_numeric() => Some(Ty::Double),
        _ => None,
    }
}

/// Substitute for an illegal binary expression. Operators that always
/// produce a truth value keep producing one.
pub(crate) fn binary_fallback(op: BinaryOp) -> Ty {
    match op.class() {
        OpClass::Logical | OpClass::Equality | OpClass::Relational => Ty::Bool,
        OpClass::Arithmetic | OpClass::Bitwise => Ty::Error,
    }
}

/// Result type of a prefix operator or cast, if legal.
pub fn unary_result(op: UnaryOp, operand: Ty) -> Option<Ty> {
    match (op, operand) {
        (UnaryOp::Neg, Ty::Int | Ty::Double) => Some(operand),
        (UnaryOp::BitNot, Ty::Int) => Some(Ty::Int),
        (UnaryOp::Not, Ty::Bool) => Some(Ty::Bool),
        (UnaryOp::CastInt, Ty::Int | Ty::Double | Ty::Bool) => Some(Ty::Int),
        (UnaryOp::CastDouble, Ty::Int | Ty::Double) => Some(Ty::Double),
        _ => None,
    }
}

pub(crate) fn unary_fallback(op: UnaryOp) -> Ty {
    match op {
        UnaryOp::Neg | UnaryOp::BitNot => Ty::Error,
        UnaryOp::Not => Ty::Bool,
        UnaryOp::CastInt => Ty::Int,
        UnaryOp::CastDouble => Ty::Double,
    }
}

/// Whether a value of type `value` may be stored into a variable declared
/// `target`. Only `int` widens, into `double`.
pub fn assignable(target: Ty, value: Ty) -> bool {
    matches!(
        (target, value),
        (Ty::Double, Ty::Int | Ty::Double) | (Ty::Int, Ty::Int) | (Ty::Bool, Ty::Bool)
    )
}
