//! Token cursor for navigating the token stream.

use std::mem;

use mini_diagnostic::Line;
use mini_lexer::{Token, TokenKind, TokenList};

/// Position in a [`TokenList`].
///
/// Invariant: the list ends with `Eof` and the cursor never moves past it,
/// so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current token; `Eof` once the input is exhausted.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.peek(0)
    }

    /// Token `n` positions ahead, clamped to the final `Eof`.
    pub fn peek(&self, n: usize) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        match self.tokens.get((self.pos + n).min(last)) {
            Some(token) => token,
            None => &EOF_TOKEN,
        }
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_line(&self) -> Line {
        self.current().line
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Same variant as `kind`, payload ignored.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    /// Consume and return the current token. Stays put on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    line: Line::UNKNOWN,
};

#[cfg(test)]
mod tests;
