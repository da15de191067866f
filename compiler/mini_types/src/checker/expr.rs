//! Expression rules.

use mini_ir::{BinaryOp, ExprId, ExprKind, Ident, Line, Ty, UnaryOp};
use mini_stack::ensure_sufficient_stack;

use super::TypeChecker;
use crate::lattice::{assignable, binary_fallback, binary_result, unary_fallback, unary_result};
use crate::TypeError;

impl TypeChecker<'_, '_> {
    /// Check `id` and its children, record its tag and return it.
    pub(crate) fn check_expr(&mut self, id: ExprId) -> Ty {
        let ty = ensure_sufficient_stack(|| self.infer_expr(id));
        self.types.set(id, ty);
        ty
    }

    fn infer_expr(&mut self, id: ExprId) -> Ty {
        let program = self.program;
        let expr = program.arena.expr(id);
        match &expr.kind {
            ExprKind::Int(_) => Ty::Int,
            ExprKind::Double(_) => Ty::Double,
            ExprKind::Bool(_) => Ty::Bool,
            ExprKind::Ident(name) => {
                let ty = program.symbols.type_of(name);
                if ty == Ty::Undeclared {
                    self.report(expr.line, &TypeError::UndeclaredVariable { name: name.clone() });
                }
                ty
            }
            ExprKind::Unary { op, operand } => self.infer_unary(*op, *operand, expr.line),
            ExprKind::Binary { op, left, right } => {
                self.infer_binary(*op, *left, *right, expr.line)
            }
            ExprKind::Assign { target, value } => self.infer_assign(target, *value, expr.line),
        }
    }

    fn infer_unary(&mut self, op: UnaryOp, operand: ExprId, line: Line) -> Ty {
        let operand_ty = self.check_expr(operand);
        unary_result(op, operand_ty).unwrap_or_else(|| {
            self.report(
                line,
                &TypeError::InvalidUnary {
                    op: op.as_symbol(),
                    operand: operand_ty,
                },
            );
            unary_fallback(op)
        })
    }

    fn infer_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, line: Line) -> Ty {
        let left_ty = self.check_expr(left);
        let right_ty = self.check_expr(right);
        binary_result(op, left_ty, right_ty).unwrap_or_else(|| {
            self.report(
                line,
                &TypeError::InvalidBinary {
                    op: op.as_symbol(),
                    left: left_ty,
                    right: right_ty,
                },
            );
            binary_fallback(op)
        })
    }

    /// The expression takes the target's declared type whether or not the
    /// value fits, so enclosing expressions keep checking.
    fn infer_assign(&mut self, target: &Ident, value: ExprId, line: Line) -> Ty {
        let value_ty = self.check_expr(value);
        let target_ty = self.target_type(target);
        if target_ty != Ty::Undeclared && !assignable(target_ty, value_ty) {
            self.report(
                line,
                &TypeError::InvalidAssignment {
                    name: target.name.clone(),
                    target: target_ty,
                    value: value_ty,
                },
            );
        }
        target_ty
    }
}
