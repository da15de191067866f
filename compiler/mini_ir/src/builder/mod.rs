//! Node construction.
//!
//! The parser never touches the arena directly: it calls these methods as it
//! recognizes constructs, bottom-up, passing the line it is currently on.
//! String literals are pooled here, at construction time.

use mini_diagnostic::DiagnosticQueue;

use crate::ast::{AstArena, Expr, ExprKind, Stmt, StmtKind};
use crate::{
    BinaryOp, Declaration, ExprId, Ident, IoFormat, Line, PrimType, Program, StmtId, StringPool,
    SymbolTable, UnaryOp,
};

/// Builds one [`Program`].
#[derive(Debug, Default)]
pub struct AstBuilder {
    arena: AstArena,
    strings: StringPool,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // Leaves

    pub fn ident(&mut self, line: Line, name: impl Into<String>) -> ExprId {
        self.expr(line, ExprKind::Ident(name.into()))
    }

    pub fn int(&mut self, line: Line, value: i32) -> ExprId {
        self.expr(line, ExprKind::Int(value))
    }

    pub fn double(&mut self, line: Line, value: f64) -> ExprId {
        self.expr(line, ExprKind::Double(value.to_bits()))
    }

    pub fn bool(&mut self, line: Line, value: bool) -> ExprId {
        self.expr(line, ExprKind::Bool(value))
    }

    // Operators

    pub fn unary(&mut self, line: Line, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(line, ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, line: Line, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(line, ExprKind::Binary { op, left, right })
    }

    pub fn assign(&mut self, line: Line, target: Ident, value: ExprId) -> ExprId {
        self.expr(line, ExprKind::Assign { target, value })
    }

    // Statements

    pub fn block(&mut self, line: Line, body: Vec<StmtId>) -> StmtId {
        self.stmt(line, StmtKind::Block(body))
    }

    pub fn expr_stmt(&mut self, line: Line, expr: ExprId) -> StmtId {
        self.stmt(line, StmtKind::Expr(expr))
    }

    pub fn if_stmt(
        &mut self,
        line: Line,
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    ) -> StmtId {
        self.stmt(
            line,
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
        )
    }

    pub fn while_stmt(&mut self, line: Line, cond: ExprId, body: StmtId) -> StmtId {
        self.stmt(line, StmtKind::While { cond, body })
    }

    pub fn write(&mut self, line: Line, value: ExprId, format: IoFormat) -> StmtId {
        self.stmt(line, StmtKind::Write { value, format })
    }

    /// `write "..."`; the literal (already unescaped) goes into the pool.
    pub fn write_string(&mut self, line: Line, bytes: impl Into<Vec<u8>>) -> StmtId {
        let id = self.strings.add(bytes);
        self.stmt(line, StmtKind::WriteString(id))
    }

    pub fn read(&mut self, line: Line, target: Ident, format: IoFormat) -> StmtId {
        self.stmt(line, StmtKind::Read { target, format })
    }

    pub fn return_stmt(&mut self, line: Line) -> StmtId {
        self.stmt(line, StmtKind::Return)
    }

    // Root

    pub fn declaration(line: Line, name: impl Into<String>, ty: PrimType) -> Declaration {
        Declaration {
            name: name.into(),
            ty,
            line,
        }
    }

    /// Construct the root. The symbol table is built here, once, and
    /// duplicate declarations are reported into `diagnostics`.
    pub fn finish(
        self,
        declarations: Vec<Declaration>,
        body: Vec<StmtId>,
        diagnostics: &mut DiagnosticQueue,
    ) -> Program {
        let symbols = SymbolTable::from_declarations(&declarations, diagnostics);
        Program {
            declarations,
            symbols,
            body,
            arena: self.arena,
            strings: self.strings,
        }
    }

    fn expr(&mut self, line: Line, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr { kind, line })
    }

    fn stmt(&mut self, line: Line, kind: StmtKind) -> StmtId {
        self.arena.alloc_stmt(Stmt { kind, line })
    }
}
