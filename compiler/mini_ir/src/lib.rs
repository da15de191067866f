//! MINI intermediate representation: the syntax tree the core passes walk.
//!
//! The tree is flat: expressions and statements live in an [`AstArena`] and
//! refer to each other through [`ExprId`] / [`StmtId`] indices. The parser
//! builds it bottom-up through [`AstBuilder`], which is the only way to
//! construct nodes and which captures the source [`Line`] of every node.
//!
//! Type tags are not stored on the nodes. The type checker fills an
//! [`ExprTypes`] side table indexed by `ExprId`; the code generator reads it.
//!
//! # Module Structure
//!
//! - `ast`: nodes, ids, operators, the arena and the [`Program`] root
//! - `ty`: [`Ty`] type tags and [`PrimType`] declared types
//! - `symbols`: [`SymbolTable`] built from the declaration list
//! - `string_pool`: [`StringPool`] of string-literal constants
//! - `builder`: [`AstBuilder`], the node-construction boundary

pub mod ast;
mod builder;
mod string_pool;
mod symbols;
mod ty;

pub use ast::{
    AstArena, BinaryOp, Declaration, Expr, ExprId, ExprKind, ExprTypes, Ident, IoFormat,
    OpClass, Program, Stmt, StmtId, StmtKind, UnaryOp,
};
pub use builder::AstBuilder;
pub use mini_diagnostic::Line;
pub use string_pool::{escape_bytes, StringConstant, StringId, StringPool};
pub use symbols::SymbolTable;
pub use ty::{PrimType, Ty};
