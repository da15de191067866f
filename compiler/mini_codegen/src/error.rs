//! Internal-consistency failures.
//!
//! These are never user-facing diagnostics. Code generation only runs on a
//! program the type checker accepted, so any of these means the checker and
//! the generator disagree about the program, and the compilation is
//! abandoned without output.

use mini_ir::{Line, Ty};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The type table has no tag for this expression.
    #[error("expression #{index} at line {line} has no type")]
    UncheckedExpr { index: usize, line: Line },

    /// A sentinel tag survived type checking.
    #[error("expression at line {line} has type {ty}")]
    SentinelType { ty: Ty, line: Line },

    #[error("no lowering for operator '{op}' on {ty} at line {line}")]
    InvalidUnaryOperand { op: &'static str, ty: Ty, line: Line },

    #[error("no lowering for operator '{op}' on {left} and {right} at line {line}")]
    InvalidBinaryOperands {
        op: &'static str,
        left: Ty,
        right: Ty,
        line: Line,
    },

    #[error("variable {name} at line {line} has no storage")]
    UnknownVariable { name: String, line: Line },

    #[error("no {format} template for {ty} at line {line}")]
    InvalidIoType {
        format: &'static str,
        ty: Ty,
        line: Line,
    },
}
