//! Type errors and their diagnostics.

use mini_diagnostic::{Diagnostic, Line};
use mini_ir::Ty;

/// A semantic problem found while checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// Identifier with no declaration.
    UndeclaredVariable { name: String },
    /// Operand types the binary operator does not accept.
    InvalidBinary { op: &'static str, left: Ty, right: Ty },
    /// Operand type the prefix operator or cast does not accept.
    InvalidUnary { op: &'static str, operand: Ty },
    /// Value type not coercible into the variable's declared type.
    InvalidAssignment { name: String, target: Ty, value: Ty },
    /// `if` / `while` condition that is not `bool`.
    NonBoolCondition { construct: &'static str, found: Ty },
    InvalidWrite { found: Ty },
    InvalidHexWrite { found: Ty },
    InvalidRead { name: String, found: Ty },
    InvalidHexRead { name: String, found: Ty },
}

impl TypeError {
    pub fn message(&self) -> String {
        match self {
            TypeError::UndeclaredVariable { name } => format!("undeclared variable {name}"),
            TypeError::InvalidBinary { op, left, right } => {
                format!("operator '{op}' cannot be applied to {left} and {right}")
            }
            TypeError::InvalidUnary { op, operand } => {
                format!("operator '{op}' cannot be applied to {operand}")
            }
            TypeError::InvalidAssignment {
                name,
                target,
                value,
            } => format!("cannot assign {value} to variable {name} of type {target}"),
            TypeError::NonBoolCondition { construct, found } => {
                format!("{construct} condition must be bool, found {found}")
            }
            TypeError::InvalidWrite { found } => format!("cannot write a value of type {found}"),
            TypeError::InvalidHexWrite { found } => {
                format!("hex write requires int, found {found}")
            }
            TypeError::InvalidRead { name, found } => {
                format!("cannot read into variable {name} of type {found}")
            }
            TypeError::InvalidHexRead { name, found } => {
                format!("hex read requires an int variable, {name} is {found}")
            }
        }
    }

    pub fn to_diagnostic(&self, line: Line) -> Diagnostic {
        Diagnostic::semantic(line, self.message())
    }
}
