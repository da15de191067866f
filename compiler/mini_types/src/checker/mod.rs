//! Checker state and statement rules.

mod expr;

use tracing::trace;

use mini_diagnostic::{DiagnosticQueue, Line};
use mini_ir::{ExprId, ExprTypes, Ident, IoFormat, Program, StmtId, StmtKind, Ty};
use mini_stack::ensure_sufficient_stack;

use crate::TypeError;

/// Single-use state for one pass over a [`Program`].
pub(crate) struct TypeChecker<'a, 'd> {
    program: &'a Program,
    types: ExprTypes,
    diagnostics: &'d mut DiagnosticQueue,
}

impl<'a, 'd> TypeChecker<'a, 'd> {
    pub(crate) fn new(program: &'a Program, diagnostics: &'d mut DiagnosticQueue) -> Self {
        TypeChecker {
            program,
            types: ExprTypes::for_arena(&program.arena),
            diagnostics,
        }
    }

    pub(crate) fn finish(self) -> ExprTypes {
        self.types
    }

    fn report(&mut self, line: Line, error: &TypeError) {
        trace!(line = line.get(), ?error, "type error");
        self.diagnostics.report(error.to_diagnostic(line));
    }

    /// Declared type of a storage target, reporting it if undeclared.
    fn target_type(&mut self, target: &Ident) -> Ty {
        let ty = self.program.symbols.type_of(&target.name);
        if ty == Ty::Undeclared {
            self.report(
                target.line,
                &TypeError::UndeclaredVariable {
                    name: target.name.clone(),
                },
            );
        }
        ty
    }

    pub(crate) fn check_stmt(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.check_stmt_inner(id));
    }

    fn check_stmt_inner(&mut self, id: StmtId) {
        let program = self.program;
        let stmt = program.arena.stmt(id);
        match &stmt.kind {
            StmtKind::Block(body) => {
                for &inner in body {
                    self.check_stmt(inner);
                }
            }
            StmtKind::Expr(expr) => {
                self.check_expr(*expr);
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.check_condition("if", *cond, stmt.line);
                self.check_stmt(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.check_stmt(*else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.check_condition("while", *cond, stmt.line);
                self.check_stmt(*body);
            }
            StmtKind::Write { value, format } => {
                let ty = self.check_expr(*value);
                let error = match format {
                    IoFormat::Plain if !matches!(ty, Ty::Int | Ty::Double | Ty::Bool) => {
                        Some(TypeError::InvalidWrite { found: ty })
                    }
                    IoFormat::Hex if ty != Ty::Int => Some(TypeError::InvalidHexWrite { found: ty }),
                    _ => None,
                };
                if let Some(error) = error {
                    self.report(stmt.line, &error);
                }
            }
            StmtKind::WriteString(_) | StmtKind::Return => {}
            StmtKind::Read { target, format } => self.check_read(target, *format),
        }
    }

    /// Conditions must be `bool`; one report per occurrence.
    fn check_condition(&mut self, construct: &'static str, cond: ExprId, line: Line) {
        let found = self.check_expr(cond);
        if found != Ty::Bool {
            self.report(line, &TypeError::NonBoolCondition { construct, found });
        }
    }

    fn check_read(&mut self, target: &Ident, format: IoFormat) {
        let found = self.target_type(target);
        if found == Ty::Undeclared {
            return;
        }
        let name = target.name.clone();
        let error = match format {
            IoFormat::Plain if !found.is_numeric() => Some(TypeError::InvalidRead { name, found }),
            IoFormat::Hex if found != Ty::Int => Some(TypeError::InvalidHexRead { name, found }),
            _ => None,
        };
        if let Some(error) = error {
            self.report(target.line, &error);
        }
    }
}
