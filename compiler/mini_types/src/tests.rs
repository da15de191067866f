#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use mini_diagnostic::ErrorKind;
use mini_ir::{ExprId, StmtKind, Ty};

struct Checked {
    program: Program,
    types: ExprTypes,
    diagnostics: DiagnosticQueue,
}

fn check(source: &str) -> Checked {
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = mini_lexer::lex(source, &mut diagnostics);
    let program = mini_parse::parse_program(&tokens, &mut diagnostics);
    assert_eq!(
        diagnostics.count_of(ErrorKind::Lexical) + diagnostics.count_of(ErrorKind::Syntax),
        0,
        "test source must be syntactically valid"
    );
    let types = check_program(&program, &mut diagnostics);
    Checked {
        program,
        types,
        diagnostics,
    }
}

fn messages(checked: &mut Checked) -> Vec<String> {
    checked
        .diagnostics
        .flush()
        .into_iter()
        .map(|d| d.message)
        .collect()
}

/// Tag of the expression in the top-level expression statement `index`.
fn stmt_type(checked: &Checked, index: usize) -> Option<Ty> {
    match &checked.program.arena.stmt(checked.program.body[index]).kind {
        StmtKind::Expr(id) => checked.types.get(*id),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn well_typed_program_has_no_errors() {
    let checked = check(
        "program { int i; bool b; i = 3; b = (i > 2); if (b) write i; else write 0; }",
    );
    assert_eq!(checked.diagnostics.error_count(), 0);
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Int));
    assert_eq!(stmt_type(&checked, 1), Some(Ty::Bool));
}

#[test]
fn every_expression_is_tagged() {
    let checked = check(
        "program { int i; double d; bool b;
           d = i + 2.5 * (double) i;
           b = !(i < 3) || d == 1.0 && true;
           while (b) { i = ~i & 7 | -i; b = false; }
           write d; write i, hex; }",
    );
    assert_eq!(checked.diagnostics.error_count(), 0);
    for index in 0..checked.program.arena.expr_count() {
        let id = ExprId::new(u32::try_from(index).unwrap());
        assert!(checked.types.get(id).is_some(), "{id:?} untagged");
    }
}

#[test]
fn mixed_arithmetic_is_double() {
    let checked = check("program { int i; double d; i + d; d * i; i / i; i < d; }");
    assert_eq!(checked.diagnostics.error_count(), 0);
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Double));
    assert_eq!(stmt_type(&checked, 1), Some(Ty::Double));
    assert_eq!(stmt_type(&checked, 2), Some(Ty::Int));
    assert_eq!(stmt_type(&checked, 3), Some(Ty::Bool));
}

#[test]
fn duplicate_declaration_counts_once_and_first_wins() {
    let checked = check("program { int x; double x; x = 1; }");
    assert_eq!(checked.diagnostics.error_count(), 1);
    assert_eq!(checked.program.symbols.type_of("x"), Ty::Int);
    assert_eq!(checked.program.symbols.len(), 1);
}

#[test]
fn undeclared_identifier_yields_sentinel() {
    let mut checked = check("program { int i; y; }");
    assert_eq!(checked.diagnostics.error_count(), 1);
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Undeclared));
    assert_eq!(messages(&mut checked), vec!["undeclared variable y".to_string()]);
}

#[test]
fn assignment_to_undeclared_target() {
    let mut checked = check("program { z = 1; }");
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Undeclared));
    assert_eq!(messages(&mut checked), vec!["undeclared variable z".to_string()]);
}

#[test]
fn sentinels_cascade() {
    let mut checked = check("program { int i; i = y + 1; }");
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Int));
    assert_eq!(
        messages(&mut checked),
        vec![
            "undeclared variable y".to_string(),
            "operator '+' cannot be applied to undeclared variable and int".to_string(),
            "cannot assign incalculable expression to variable i of type int".to_string(),
        ]
    );
}

#[test]
fn narrowing_assignment_is_rejected() {
    let mut checked = check("program { int i; double d; bool b; d = i; i = d; b = i; }");
    assert_eq!(
        messages(&mut checked),
        vec![
            "cannot assign double to variable i of type int".to_string(),
            "cannot assign int to variable b of type bool".to_string(),
        ]
    );
    assert_eq!(stmt_type(&checked, 1), Some(Ty::Int));
}

#[test]
fn non_bool_condition_reported_once_per_occurrence() {
    let mut checked = check(
        "program { int i; if (i) write i; while (i + 1) { i = 2; } if (i > 0) i = 1; }",
    );
    assert_eq!(
        messages(&mut checked),
        vec![
            "if condition must be bool, found int".to_string(),
            "while condition must be bool, found int".to_string(),
        ]
    );
}

#[test]
fn branch_bodies_checked_despite_bad_condition() {
    let checked = check("program { int i; bool b; while (i) { b = 1; } }");
    assert_eq!(checked.diagnostics.error_count(), 2);
}

#[test]
fn operator_failures_use_substitutes() {
    let mut checked = check(
        "program { int i; bool b; double d; b = 1 && true; i = (int) b; d = (double) b; -b; }",
    );
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Bool));
    assert_eq!(stmt_type(&checked, 1), Some(Ty::Int));
    assert_eq!(stmt_type(&checked, 2), Some(Ty::Double));
    assert_eq!(stmt_type(&checked, 3), Some(Ty::Error));
    assert_eq!(
        messages(&mut checked),
        vec![
            "operator '&&' cannot be applied to int and bool".to_string(),
            "operator '(double)' cannot be applied to bool".to_string(),
            "operator '-' cannot be applied to bool".to_string(),
        ]
    );
}

#[test]
fn bitwise_rejects_double() {
    let mut checked = check("program { double d; d & 1; ~d; }");
    assert_eq!(stmt_type(&checked, 0), Some(Ty::Error));
    assert_eq!(messages(&mut checked).len(), 2);
}

#[test]
fn io_rules() {
    let mut checked = check(
        "program { bool b; double d; int i;
           read i; read d; read i, hex;
           read b; read d, hex; write d, hex; write b; write b, hex; }",
    );
    assert_eq!(
        messages(&mut checked),
        vec![
            "cannot read into variable b of type bool".to_string(),
            "hex read requires an int variable, d is double".to_string(),
            "hex write requires int, found double".to_string(),
            "hex write requires int, found bool".to_string(),
        ]
    );
}

#[test]
fn read_of_undeclared_reports_once() {
    let mut checked = check("program { read q, hex; }");
    assert_eq!(messages(&mut checked), vec!["undeclared variable q".to_string()]);
}

#[test]
fn diagnostics_carry_lines() {
    let mut checked = check("program {\n int i;\n i = true;\n}");
    let reported = checked.diagnostics.flush();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].line.get(), 3);
    assert_eq!(reported[0].kind, ErrorKind::Semantic);
}
