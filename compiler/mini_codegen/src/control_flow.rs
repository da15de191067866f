//! Statements and branching: blocks, `if`, `while`, `return`, and the
//! short-circuit lowering of `||` / `&&`.

use mini_ir::{BinaryOp, ExprId, StmtId, StmtKind, Ty};
use mini_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::builder::Builder;
use crate::CodegenError;

impl Builder<'_> {
    pub(crate) fn compile_stmt(&mut self, id: StmtId) -> Result<(), CodegenError> {
        ensure_sufficient_stack(|| self.compile_stmt_inner(id))
    }

    fn compile_stmt_inner(&mut self, id: StmtId) -> Result<(), CodegenError> {
        let program = self.program;
        let stmt = program.arena.stmt(id);
        match &stmt.kind {
            StmtKind::Block(body) => self.compile_body(body),
            StmtKind::Expr(expr) => self.compile_expr(*expr).map(|_| ()),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.compile_if(*cond, *then_branch, *else_branch),
            StmtKind::While { cond, body } => self.compile_while(*cond, *body),
            StmtKind::Write { value, format } => self.compile_write(*value, *format, stmt.line),
            StmtKind::WriteString(id) => {
                self.compile_write_string(*id);
                Ok(())
            }
            StmtKind::Read { target, format } => self.compile_read(target, *format),
            StmtKind::Return => {
                self.compile_return();
                Ok(())
            }
        }
    }

    /// ```text
    ///   br i1 %c, label %Ltrue, label %Lfalse
    /// Ltrue:                  ; then branch
    ///   br label %Lend
    /// Lfalse:                 ; else branch, possibly empty
    ///   br label %Lend
    /// Lend:
    /// ```
    fn compile_if(
        &mut self,
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    ) -> Result<(), CodegenError> {
        let cond = self.compile_expr(cond)?;
        let true_label = self.names.next_label();
        let false_label = self.names.next_label();
        let end_label = self.names.next_label();
        self.cond_br(&cond, &true_label, &false_label);

        self.start_block(&true_label);
        self.compile_stmt(then_branch)?;
        self.br(&end_label);

        self.start_block(&false_label);
        if let Some(else_branch) = else_branch {
            self.compile_stmt(else_branch)?;
        }
        self.br(&end_label);

        self.start_block(&end_label);
        Ok(())
    }

    /// ```text
    ///   br label %Lstart
    /// Lstart:
    ///   br i1 %c, label %Lbody, label %Lend
    /// Lbody:
    ///   br label %Lstart
    /// Lend:
    /// ```
    fn compile_while(&mut self, cond: ExprId, body: StmtId) -> Result<(), CodegenError> {
        let start_label = self.names.next_label();
        self.br(&start_label);
        self.start_block(&start_label);
        let cond = self.compile_expr(cond)?;

        let body_label = self.names.next_label();
        let end_label = self.names.next_label();
        self.cond_br(&cond, &body_label, &end_label);

        self.start_block(&body_label);
        self.compile_stmt(body)?;
        self.br(&start_label);

        self.start_block(&end_label);
        Ok(())
    }

    /// `ret` terminates the current block; whatever follows lands in a
    /// fresh block with no predecessors.
    fn compile_return(&mut self) {
        self.out.instr("ret i32 0");
        let label = self.names.next_label();
        self.start_block(&label);
    }

    /// ```text
    ///   ; left operand
    ///   br label %Lstart
    /// Lstart:
    ///   br i1 %l, label %Lend, label %Lright      ; `||`; `&&` swaps targets
    /// Lright:
    ///   ; right operand
    ///   br label %Lmid
    /// Lmid:
    ///   br label %Lend
    /// Lend:
    ///   %rN = phi i1 [ true, %Lstart ], [ %r, %Lmid ]
    /// ```
    pub(crate) fn compile_short_circuit(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> Result<String, CodegenError> {
        let left_ty = self.type_of(left)?;
        let right_ty = self.type_of(right)?;
        if (left_ty, right_ty) != (Ty::Bool, Ty::Bool) {
            return Err(CodegenError::InvalidBinaryOperands {
                op: op.as_symbol(),
                left: left_ty,
                right: right_ty,
                line: self.program.arena.expr(left).line,
            });
        }

        let left = self.compile_expr(left)?;

        let start_label = self.names.next_label();
        self.br(&start_label);
        self.start_block(&start_label);

        let right_label = self.names.next_label();
        let mid_label = self.names.next_label();
        let end_label = self.names.next_label();
        let short_value = match op {
            BinaryOp::Or => {
                self.cond_br(&left, &end_label, &right_label);
                "true"
            }
            _ => {
                self.cond_br(&left, &right_label, &end_label);
                "false"
            }
        };

        self.start_block(&right_label);
        let right = self.compile_expr(right)?;
        self.br(&mid_label);
        self.start_block(&mid_label);
        self.br(&end_label);

        self.start_block(&end_label);
        trace!(start = %start_label, mid = %mid_label, "phi");
        Ok(self.assign_register(format_args!(
            "phi i1 [ {short_value}, %{start_label} ], [ {right}, %{mid_label} ]"
        )))
    }
}
