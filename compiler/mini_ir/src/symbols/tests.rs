use super::*;
use crate::{Line, PrimType};

fn decl(name: &str, ty: PrimType, line: u32) -> Declaration {
    Declaration {
        name: name.to_string(),
        ty,
        line: Line::new(line),
    }
}

#[test]
fn duplicate_is_reported_once_and_first_wins() {
    let mut diagnostics = DiagnosticQueue::new();
    let table = SymbolTable::from_declarations(
        &[decl("x", PrimType::Int, 1), decl("x", PrimType::Double, 2)],
        &mut diagnostics,
    );

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(table.len(), 1);
    assert_eq!(table.type_of("x"), Ty::Int);

    let reported: Vec<String> = diagnostics.peek().map(ToString::to_string).collect();
    assert_eq!(
        reported,
        ["Semantic error: line 2 -- variable x already declared"]
    );
}

#[test]
fn unknown_names_are_undeclared() {
    let table = SymbolTable::new();
    assert_eq!(table.type_of("ghost"), Ty::Undeclared);
    assert!(table.lookup("ghost").is_none());
}

#[test]
fn iteration_keeps_declaration_order() {
    let mut diagnostics = DiagnosticQueue::new();
    let table = SymbolTable::from_declarations(
        &[
            decl("b", PrimType::Bool, 1),
            decl("a", PrimType::Int, 2),
            decl("d", PrimType::Double, 3),
        ],
        &mut diagnostics,
    );
    let names: Vec<&str> = table.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["b", "a", "d"]);
    assert!(diagnostics.has_errors().is_none());
}
