//! Parse error type.

use mini_diagnostic::{Diagnostic, Line};
use mini_lexer::{Token, TokenKind};

/// A syntax error that has not been reported yet.
///
/// Grammar functions return it through `?` up to the nearest statement or
/// declaration loop, which reports it once and resynchronizes.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub line: Line,
    pub message: String,
    /// Raised at end of input; at most one of these is reported per parse.
    pub at_eof: bool,
}

impl ParseError {
    pub fn new(line: Line, message: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
            at_eof: false,
        }
    }

    /// "unexpected X, expected Y" for the token the parser is looking at.
    pub fn unexpected(found: &Token, expected: &str) -> Self {
        ParseError {
            line: found.line,
            message: format!("unexpected {}, expected {expected}", found.kind),
            at_eof: matches!(found.kind, TokenKind::Eof),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::syntax(self.line, self.message)
    }
}
