//! Type checker for MINI.
//!
//! One post-order pass over the tree. Every expression gets a [`Ty`] tag in
//! the returned [`ExprTypes`] table, including expressions that fail to
//! check: those receive a best-effort substitute so checking continues and
//! surfaces as many problems as possible in one run.
//!
//! Problems are reported as semantic errors into the [`DiagnosticQueue`].
//! The caller decides whether to run code generation by looking at the
//! queue's error count afterwards.

mod checker;
mod error;
mod lattice;

use tracing::{debug, instrument};

use mini_diagnostic::DiagnosticQueue;
use mini_ir::{ExprTypes, Program};

pub use error::TypeError;
pub use lattice::{assignable, binary_result, unary_result};

use checker::TypeChecker;

/// Type-check a whole program.
#[instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
pub fn check_program(program: &Program, diagnostics: &mut DiagnosticQueue) -> ExprTypes {
    let before = diagnostics.error_count();
    let mut checker = TypeChecker::new(program, diagnostics);
    for &stmt in &program.body {
        checker.check_stmt(stmt);
    }
    let types = checker.finish();
    debug!(
        errors = diagnostics.error_count() - before,
        "type check finished"
    );
    types
}

#[cfg(test)]
mod tests;
