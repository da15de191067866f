use super::*;
use mini_diagnostic::DiagnosticQueue;

fn tokens(source: &str) -> TokenList {
    mini_lexer::lex(source, &mut DiagnosticQueue::new())
}

#[test]
fn advance_stops_at_eof() {
    let list = tokens("x ;");
    let mut cursor = Cursor::new(&list);

    assert!(cursor.check(&TokenKind::Ident(String::new())));
    cursor.advance();
    assert!(cursor.eat(&TokenKind::Semicolon));
    assert!(cursor.is_at_end());

    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn peek_is_clamped_to_eof() {
    let list = tokens("a = 1");
    let cursor = Cursor::new(&list);
    assert_eq!(cursor.peek(1).kind, TokenKind::Assign);
    assert_eq!(cursor.peek(50).kind, TokenKind::Eof);
}

#[test]
fn check_ignores_payload() {
    let list = tokens("42");
    let cursor = Cursor::new(&list);
    assert!(cursor.check(&TokenKind::Int(0)));
    assert!(!cursor.check(&TokenKind::Real(0.0)));
}
