use pretty_assertions::assert_eq;

use super::*;
use mini_diagnostic::ErrorKind;
use mini_ir::{ExprId, ExprKind, IoFormat, PrimType, StmtKind};

fn parse(source: &str) -> (Program, DiagnosticQueue) {
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = mini_lexer::lex(source, &mut diagnostics);
    let program = parse_program(&tokens, &mut diagnostics);
    (program, diagnostics)
}

fn parse_clean(source: &str) -> Program {
    let (program, mut diagnostics) = parse(source);
    let messages: Vec<String> = diagnostics.flush().iter().map(ToString::to_string).collect();
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
    program
}

/// S-expression rendering, for compact tree assertions.
fn render(program: &Program, id: ExprId) -> String {
    match &program.arena.expr(id).kind {
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Int(v) => v.to_string(),
        ExprKind::Double(bits) => format!("{:?}", f64::from_bits(*bits)),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Unary { op, operand } => {
            format!("({} {})", op.as_symbol(), render(program, *operand))
        }
        ExprKind::Binary { op, left, right } => format!(
            "({} {} {})",
            op.as_symbol(),
            render(program, *left),
            render(program, *right)
        ),
        ExprKind::Assign { target, value } => {
            format!("(= {} {})", target.name, render(program, *value))
        }
    }
}

/// Render the expression statement at `index` of the top-level body.
fn expr_at(program: &Program, index: usize) -> String {
    match &program.arena.stmt(program.body[index]).kind {
        StmtKind::Expr(id) => render(program, *id),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

fn expr_of(source_expr: &str) -> String {
    let program = parse_clean(&format!("program {{ {source_expr}; }}"));
    expr_at(&program, 0)
}

#[test]
fn declarations_with_comma_lists() {
    let program = parse_clean("program { int a, b; double x; bool f; }");
    let decls: Vec<(&str, PrimType)> = program
        .declarations
        .iter()
        .map(|d| (d.name.as_str(), d.ty))
        .collect();
    assert_eq!(
        decls,
        vec![
            ("a", PrimType::Int),
            ("b", PrimType::Int),
            ("x", PrimType::Double),
            ("f", PrimType::Bool),
        ]
    );
    assert_eq!(program.symbols.len(), 4);
    assert!(program.body.is_empty());
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(expr_of("a = b + c * d"), "(= a (+ b (* c d)))");
    assert_eq!(expr_of("a - b - c"), "(- (- a b) c)");
    assert_eq!(expr_of("a * b & c"), "(* a (& b c))");
    assert_eq!(expr_of("a + b < c * 2"), "(< (+ a b) (* c 2))");
}

#[test]
fn logical_operators_share_one_level() {
    assert_eq!(expr_of("a || b && c"), "(&& (|| a b) c)");
    assert_eq!(expr_of("a && b || c"), "(|| (&& a b) c)");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(expr_of("a = b = 3"), "(= a (= b 3))");
}

#[test]
fn prefix_operators_and_casts() {
    assert_eq!(expr_of("-a * b"), "(* (- a) b)");
    assert_eq!(expr_of("!~a"), "(! (~ a))");
    assert_eq!(expr_of("(int) x + 1"), "(+ ((int) x) 1)");
    assert_eq!(expr_of("(double) (a + b)"), "((double) (+ a b))");
    assert_eq!(expr_of("(a) + 2.5"), "(+ a 2.5)");
}

#[test]
fn literals() {
    assert_eq!(expr_of("true == false"), "(== true false)");
    assert_eq!(expr_of("0x10 + 1.5"), "(+ 16 1.5)");
}

#[test]
fn io_statements() {
    let program = parse_clean(
        r#"program { int a; read a; read a, hex; write a + 1, hex; write "hi\n"; write a; }"#,
    );
    let kinds: Vec<&StmtKind> = program
        .body
        .iter()
        .map(|&id| &program.arena.stmt(id).kind)
        .collect();

    assert!(matches!(kinds[0], StmtKind::Read { format: IoFormat::Plain, .. }));
    assert!(matches!(kinds[1], StmtKind::Read { format: IoFormat::Hex, .. }));
    assert!(matches!(kinds[2], StmtKind::Write { format: IoFormat::Hex, .. }));
    let StmtKind::WriteString(id) = kinds[3] else {
        panic!("expected string write, got {:?}", kinds[3]);
    };
    assert_eq!(program.strings.get(*id).bytes, b"hi\n".to_vec());
    assert!(matches!(kinds[4], StmtKind::Write { format: IoFormat::Plain, .. }));
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let program = parse_clean("program { int a; if (a) if (a) a = 1; else a = 2; }");
    let StmtKind::If {
        then_branch,
        else_branch,
        ..
    } = &program.arena.stmt(program.body[0]).kind
    else {
        panic!("expected if");
    };
    assert_eq!(*else_branch, None);
    assert!(matches!(
        program.arena.stmt(*then_branch).kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn while_block_and_return() {
    let program = parse_clean("program { int i; while (i < 3) { i = i + 1; return; } }");
    let StmtKind::While { body, .. } = &program.arena.stmt(program.body[0]).kind else {
        panic!("expected while");
    };
    let StmtKind::Block(inner) = &program.arena.stmt(*body).kind else {
        panic!("expected block");
    };
    assert_eq!(inner.len(), 2);
    assert_eq!(program.arena.stmt(inner[1]).kind, StmtKind::Return);
}

#[test]
fn nodes_carry_their_lines() {
    let program = parse_clean("program {\n int a;\n\n a = 1;\n write a;\n}");
    assert_eq!(program.declarations[0].line, Line::new(2));
    assert_eq!(program.arena.stmt(program.body[0]).line, Line::new(4));
    assert_eq!(program.arena.stmt(program.body[1]).line, Line::new(5));
}

#[test]
fn broken_statement_is_reported_once_and_skipped() {
    let (program, mut diagnostics) = parse("program { int a; a = ; a = 1 + ) 2; a = 2; }");
    assert_eq!(diagnostics.count_of(ErrorKind::Syntax), 2);
    assert_eq!(program.body.len(), 1);
    let reported = diagnostics.flush();
    assert_eq!(
        reported[0].message,
        "unexpected ';', expected expression".to_string()
    );
}

#[test]
fn broken_declaration_keeps_parsing() {
    let (program, diagnostics) = parse("program { int a, ; double d; d = 1.0; }");
    assert_eq!(diagnostics.error_count(), 1);
    let names: Vec<&str> = program.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a", "d"]);
    assert_eq!(program.body.len(), 1);
}

#[test]
fn error_inside_block_keeps_the_block() {
    let (program, diagnostics) = parse("program { int a; { a = ; a = 1; } write a; }");
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(program.body.len(), 2);
}

#[test]
fn missing_closing_brace_reported_once() {
    let (_, mut diagnostics) = parse("program { int a; while (a) { a = 1;");
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(
        diagnostics.flush()[0].message,
        "unexpected end of file, expected '}'".to_string()
    );
}

#[test]
fn trailing_tokens_after_program() {
    let (program, diagnostics) = parse("program { int a; a = 1; } a = 2;");
    assert_eq!(diagnostics.count_of(ErrorKind::Syntax), 1);
    assert_eq!(program.body.len(), 1);
}

#[test]
fn missing_header_is_one_error() {
    let (program, diagnostics) = parse("{ int a; a = 1; }");
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(program.body.len(), 1);
}

#[test]
fn assignment_target_must_be_identifier() {
    let (_, mut diagnostics) = parse("program { int a; (a) = 1; }");
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(
        diagnostics.flush()[0].message,
        "left-hand side of assignment must be a variable".to_string()
    );
}

#[test]
fn hex_is_rejected_on_string_write() {
    let (program, diagnostics) = parse(r#"program { write "x", hex; write "y"; }"#);
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(program.body.len(), 1);
}

#[test]
fn duplicate_declaration_reported_by_symbol_table() {
    let (_, diagnostics) = parse("program { int a; double a; }");
    assert_eq!(diagnostics.count_of(ErrorKind::Semantic), 1);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let source = format!(
        "program {{ int a; a = {}1{}; }}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let program = parse_clean(&source);
    assert_eq!(expr_at(&program, 0), "(= a 1)");
}
