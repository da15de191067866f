//! Recursive descent parser for MINI.
//!
//! Consumes a [`TokenList`] and builds a [`Program`] through the
//! [`AstBuilder`]. Syntax errors are reported into the shared
//! [`DiagnosticQueue`]: one diagnostic per broken declaration or statement,
//! after which the parser skips to the next `;` or `}` and carries on. An
//! unexpected end of input is reported only once.
//!
//! The returned `Program` always holds every construct that parsed cleanly,
//! so the type checker can still run and report semantic errors.

mod cursor;
mod error;
mod grammar;
mod recovery;

use tracing::{debug, instrument};

use mini_diagnostic::{DiagnosticQueue, Line};
use mini_ir::{AstBuilder, Ident, Program};
use mini_lexer::{Token, TokenKind, TokenList};

use cursor::Cursor;
pub use error::ParseError;

/// Parse a whole token stream.
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_program(tokens: &TokenList, diagnostics: &mut DiagnosticQueue) -> Program {
    let mut parser = Parser::new(tokens, diagnostics);
    let (declarations, body) = parser.parse_root();
    let Parser {
        builder,
        diagnostics,
        ..
    } = parser;
    debug!(
        declarations = declarations.len(),
        statements = body.len(),
        "parsed program"
    );
    builder.finish(declarations, body, diagnostics)
}

/// Parser state.
struct Parser<'a, 'd> {
    cursor: Cursor<'a>,
    builder: AstBuilder,
    diagnostics: &'d mut DiagnosticQueue,
    eof_reported: bool,
}

impl<'a, 'd> Parser<'a, 'd> {
    fn new(tokens: &'a TokenList, diagnostics: &'d mut DiagnosticQueue) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            builder: AstBuilder::new(),
            diagnostics,
            eof_reported: false,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_line(&self) -> Line {
        self.cursor.current_line()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Consume a token of the given kind or fail with "expected ...".
    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(self.current(), &kind.describe()))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        let token = self.current();
        if let TokenKind::Ident(name) = &token.kind {
            self.advance();
            Ok(Ident {
                name: name.clone(),
                line: token.line,
            })
        } else {
            Err(ParseError::unexpected(token, "identifier"))
        }
    }

    // Diagnostics

    fn report(&mut self, error: ParseError) {
        if error.at_eof {
            if self.eof_reported {
                return;
            }
            self.eof_reported = true;
        }
        self.diagnostics.report(error.into_diagnostic());
    }

    /// Report `error` and skip past the broken construct.
    fn recover(&mut self, error: ParseError) {
        self.report(error);
        recovery::synchronize(&mut self.cursor);
    }
}

#[cfg(test)]
mod tests;
