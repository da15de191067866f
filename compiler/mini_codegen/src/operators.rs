//! Expression lowering: leaves, loads and stores, unary and binary
//! operators, numeric promotion.
//!
//! Every rule returns the operand that holds the expression's value: a
//! literal or a register.

use mini_ir::{BinaryOp, ExprId, ExprKind, Ident, Line, OpClass, PrimType, Ty, UnaryOp};
use mini_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::builder::Builder;
use crate::types::{double_literal, ir_type, prim_ir_type};
use crate::CodegenError;

impl Builder<'_> {
    pub(crate) fn compile_expr(&mut self, id: ExprId) -> Result<String, CodegenError> {
        ensure_sufficient_stack(|| self.compile_expr_inner(id))
    }

    fn compile_expr_inner(&mut self, id: ExprId) -> Result<String, CodegenError> {
        let program = self.program;
        let expr = program.arena.expr(id);
        let ty = self.type_of(id)?;
        match &expr.kind {
            ExprKind::Int(value) => Ok(value.to_string()),
            ExprKind::Double(bits) => Ok(double_literal(*bits)),
            ExprKind::Bool(value) => Ok(value.to_string()),
            ExprKind::Ident(name) => {
                let (slot, prim) = self.storage_of(name, expr.line)?;
                Ok(self.assign_register(format_args!(
                    "load {}, ptr {slot}",
                    prim_ir_type(prim)
                )))
            }
            ExprKind::Assign { target, value } => self.compile_assign(target, *value),
            ExprKind::Unary { op, operand } => self.compile_unary(*op, *operand, expr.line),
            ExprKind::Binary { op, left, right } => match op.class() {
                OpClass::Logical => self.compile_short_circuit(*op, *left, *right),
                _ => self.compile_binary(*op, *left, *right, ty, expr.line),
            },
        }
    }

    /// Store into the target and yield the stored value, promoted if the
    /// target is `double` and the value is not.
    fn compile_assign(&mut self, target: &Ident, value: ExprId) -> Result<String, CodegenError> {
        let value_ty = self.type_of(value)?;
        let value = self.compile_expr(value)?;
        let (slot, prim) = self.storage(target)?;
        let stored = match (prim, value_ty) {
            (PrimType::Double, Ty::Int) => self.promote(&value),
            (PrimType::Double, Ty::Double)
            | (PrimType::Int, Ty::Int)
            | (PrimType::Bool, Ty::Bool) => value,
            _ => {
                return Err(CodegenError::InvalidBinaryOperands {
                    op: "=",
                    left: prim.ty(),
                    right: value_ty,
                    line: target.line,
                })
            }
        };
        self.out
            .instr(format_args!("store {} {stored}, ptr {slot}", prim_ir_type(prim)));
        Ok(stored)
    }

    /// `sitofp` an `i32` operand to `double`.
    pub(crate) fn promote(&mut self, value: &str) -> String {
        trace!(value, "promote");
        self.assign_register(format_args!("sitofp i32 {value} to double"))
    }

    fn compile_unary(
        &mut self,
        op: UnaryOp,
        operand: ExprId,
        line: Line,
    ) -> Result<String, CodegenError> {
        let operand_ty = self.type_of(operand)?;
        let value = self.compile_expr(operand)?;
        let register = match (op, operand_ty) {
            (UnaryOp::Neg, Ty::Int) => self.assign_register(format_args!("sub i32 0, {value}")),
            (UnaryOp::Neg, Ty::Double) => self.assign_register(format_args!("fneg double {value}")),
            (UnaryOp::BitNot, Ty::Int) => self.assign_register(format_args!("xor i32 {value}, -1")),
            (UnaryOp::Not, Ty::Bool) => self.assign_register(format_args!("xor i1 {value}, true")),
            (UnaryOp::CastInt, Ty::Int) | (UnaryOp::CastDouble, Ty::Double) => value,
            (UnaryOp::CastInt, Ty::Double) => {
                self.assign_register(format_args!("fptosi double {value} to i32"))
            }
            (UnaryOp::CastInt, Ty::Bool) => {
                self.assign_register(format_args!("zext i1 {value} to i32"))
            }
            (UnaryOp::CastDouble, Ty::Int) => self.promote(&value),
            _ => {
                return Err(CodegenError::InvalidUnaryOperand {
                    op: op.as_symbol(),
                    ty: operand_ty,
                    line,
                })
            }
        };
        Ok(register)
    }

    /// Non-logical binary operators. Operands are evaluated left to right;
    /// a mixed `int`/`double` pair promotes the `int` side first.
    fn compile_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        result: Ty,
        line: Line,
    ) -> Result<String, CodegenError> {
        let left_ty = self.type_of(left)?;
        let right_ty = self.type_of(right)?;
        let left = self.compile_expr(left)?;
        let right = self.compile_expr(right)?;

        let invalid = move || CodegenError::InvalidBinaryOperands {
            op: op.as_symbol(),
            left: left_ty,
            right: right_ty,
            line,
        };

        // Operand type the instruction works on.
        let operand_ty = match (left_ty, right_ty) {
            (Ty::Int, Ty::Int) => Ty::Int,
            (Ty::Bool, Ty::Bool) => Ty::Bool,
            (l, r) if l.is_numeric() && r.is_numeric() => Ty::Double,
            _ => return Err(invalid()),
        };
        let left = self.coerce(left, left_ty, operand_ty);
        let right = self.coerce(right, right_ty, operand_ty);

        let mnemonic = match (op.class(), operand_ty) {
            (OpClass::Arithmetic, Ty::Int) => int_arithmetic(op),
            (OpClass::Arithmetic, Ty::Double) => float_arithmetic(op),
            (OpClass::Bitwise, Ty::Int) => bitwise(op),
            (OpClass::Equality | OpClass::Relational, Ty::Int) => int_compare(op),
            (OpClass::Equality, Ty::Bool) => int_compare(op),
            (OpClass::Equality | OpClass::Relational, Ty::Double) => float_compare(op),
            _ => None,
        }
        .ok_or_else(invalid)?;

        let expected = match op.class() {
            OpClass::Arithmetic | OpClass::Bitwise => operand_ty,
            _ => Ty::Bool,
        };
        if result != expected {
            return Err(invalid());
        }

        let ty = ir_type(operand_ty, line)?;
        Ok(self.assign_register(format_args!("{mnemonic} {ty} {left}, {right}")))
    }

    /// Bring an operand of type `from` to the instruction type `to`.
    fn coerce(&mut self, value: String, from: Ty, to: Ty) -> String {
        if from == Ty::Int && to == Ty::Double {
            self.promote(&value)
        } else {
            value
        }
    }
}

fn int_arithmetic(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Add => Some("add"),
        BinaryOp::Sub => Some("sub"),
        BinaryOp::Mul => Some("mul"),
        BinaryOp::Div => Some("sdiv"),
        _ => None,
    }
}

fn float_arithmetic(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Add => Some("fadd"),
        BinaryOp::Sub => Some("fsub"),
        BinaryOp::Mul => Some("fmul"),
        BinaryOp::Div => Some("fdiv"),
        _ => None,
    }
}

fn bitwise(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::BitAnd => Some("and"),
        BinaryOp::BitOr => Some("or"),
        _ => None,
    }
}

fn int_compare(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Eq => Some("icmp eq"),
        BinaryOp::NotEq => Some("icmp ne"),
        BinaryOp::Gt => Some("icmp sgt"),
        BinaryOp::GtEq => Some("icmp sge"),
        BinaryOp::Lt => Some("icmp slt"),
        BinaryOp::LtEq => Some("icmp sle"),
        _ => None,
    }
}

fn float_compare(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Eq => Some("fcmp oeq"),
        BinaryOp::NotEq => Some("fcmp one"),
        BinaryOp::Gt => Some("fcmp ogt"),
        BinaryOp::GtEq => Some("fcmp oge"),
        BinaryOp::Lt => Some("fcmp olt"),
        BinaryOp::LtEq => Some("fcmp ole"),
        _ => None,
    }
}
