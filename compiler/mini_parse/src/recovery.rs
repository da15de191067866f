//! Error recovery for the parser.

use mini_lexer::TokenKind;

use crate::cursor::Cursor;

/// Skip to the end of the broken statement or declaration.
///
/// Stops after a `;` (consumed) or before a `}` (left for the enclosing
/// block). Returns `false` if end of input was reached instead.
pub fn synchronize(cursor: &mut Cursor<'_>) -> bool {
    while !cursor.is_at_end() {
        match cursor.current_kind() {
            TokenKind::Semicolon => {
                cursor.advance();
                return true;
            }
            TokenKind::RBrace => return true,
            _ => {
                cursor.advance();
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_diagnostic::DiagnosticQueue;

    fn lex(source: &str) -> mini_lexer::TokenList {
        mini_lexer::lex(source, &mut DiagnosticQueue::new())
    }

    #[test]
    fn consumes_semicolon() {
        let tokens = lex("a b c ; d");
        let mut cursor = Cursor::new(&tokens);
        assert!(synchronize(&mut cursor));
        assert_eq!(cursor.current_kind(), &TokenKind::Ident("d".to_string()));
    }

    #[test]
    fn stops_before_closing_brace() {
        let tokens = lex("a + } ;");
        let mut cursor = Cursor::new(&tokens);
        assert!(synchronize(&mut cursor));
        assert!(cursor.check(&TokenKind::RBrace));
    }

    #[test]
    fn reports_end_of_input() {
        let tokens = lex("a + b");
        let mut cursor = Cursor::new(&tokens);
        assert!(!synchronize(&mut cursor));
        assert!(cursor.is_at_end());
    }
}
