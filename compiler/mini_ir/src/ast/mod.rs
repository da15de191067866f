//! Flat syntax tree.
//!
//! - No `Box<Expr>`: children are `ExprId`/`StmtId` indices into [`AstArena`]
//! - Every node records the [`Line`] it was built on
//! - Left-hand sides of assignment and `read` are [`Ident`]s, so l-value
//!   handling never needs to inspect an arbitrary expression

mod operators;

use std::fmt;

pub use operators::{BinaryOp, OpClass, UnaryOp};

use crate::{Line, PrimType, StringId, StringPool, SymbolTable, Ty};

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index into the statement arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// An identifier occurrence used as a storage location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: String,
    pub line: Line,
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Variable read.
    Ident(String),
    Int(i32),
    /// Real literal, stored as `f64::to_bits` so the node stays `Eq + Hash`.
    Double(u64),
    Bool(bool),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `target = value`; evaluates to the stored value.
    Assign {
        target: Ident,
        value: ExprId,
    },
}

/// Format selector for `read` / `write`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IoFormat {
    #[default]
    Plain,
    Hex,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: Line,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `{ ... }`
    Block(Vec<StmtId>),
    /// `expr;`, value discarded.
    Expr(ExprId),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    Write {
        value: ExprId,
        format: IoFormat,
    },
    /// `write "text";`
    WriteString(StringId),
    Read {
        target: Ident,
        format: IoFormat,
    },
    Return,
}

/// A `int x;` / `double y;` / `bool b;` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    pub name: String,
    pub ty: PrimType,
    pub line: Line,
}

/// Contiguous storage for all nodes of one program.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AstArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    pub(crate) fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Type tags for every expression of a program, indexed by [`ExprId`].
///
/// Written only by the type checker. A `None` slot means the checker never
/// reached that node; code generation treats that as an internal error.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprTypes {
    types: Vec<Option<Ty>>,
}

impl ExprTypes {
    pub fn for_arena(arena: &AstArena) -> Self {
        ExprTypes {
            types: vec![None; arena.expr_count()],
        }
    }

    pub fn set(&mut self, id: ExprId, ty: Ty) {
        if let Some(slot) = self.types.get_mut(id.index()) {
            *slot = Some(ty);
        }
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> Option<Ty> {
        self.types.get(id.index()).copied().flatten()
    }
}

/// Root of the tree: declarations, the symbol table built from them, the
/// instruction list and the storage the nodes live in.
#[derive(Clone, Debug)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub symbols: SymbolTable,
    pub body: Vec<StmtId>,
    pub arena: AstArena,
    pub strings: StringPool,
}

#[cfg(test)]
mod tests;
