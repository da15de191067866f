use super::*;

#[test]
fn operator_classes() {
    assert_eq!(BinaryOp::Or.class(), OpClass::Logical);
    assert_eq!(BinaryOp::NotEq.class(), OpClass::Equality);
    assert_eq!(BinaryOp::GtEq.class(), OpClass::Relational);
    assert_eq!(BinaryOp::Div.class(), OpClass::Arithmetic);
    assert_eq!(BinaryOp::BitAnd.class(), OpClass::Bitwise);
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::And.as_symbol(), "&&");
    assert_eq!(BinaryOp::LtEq.as_symbol(), "<=");
    assert_eq!(UnaryOp::CastDouble.as_symbol(), "(double)");
}

#[test]
fn expr_types_start_unset() {
    let mut arena = AstArena::new();
    let id = arena.alloc_expr(Expr {
        kind: ExprKind::Int(1),
        line: Line::new(1),
    });
    let mut types = ExprTypes::for_arena(&arena);
    assert_eq!(types.get(id), None);

    types.set(id, Ty::Int);
    assert_eq!(types.get(id), Some(Ty::Int));
}

#[test]
fn ids_index_in_allocation_order() {
    let mut arena = AstArena::new();
    let a = arena.alloc_stmt(Stmt {
        kind: StmtKind::Return,
        line: Line::new(1),
    });
    let b = arena.alloc_stmt(Stmt {
        kind: StmtKind::Return,
        line: Line::new(2),
    });
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.stmt(b).line, Line::new(2));
    assert_eq!(arena.stmt_count(), 2);
}
