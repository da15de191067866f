//! Lexer for MINI source using logos.
//!
//! Produces a [`TokenList`] with decoded literals and 1-based line numbers.
//! Problems are reported as lexical errors into the shared
//! [`DiagnosticQueue`] and lexing continues:
//!
//! - an unrecognized symbol is reported and skipped
//! - an out-of-range numeric literal is reported and replaced by `0`
//! - an unterminated string is reported and dropped

mod line_index;
mod raw_token;
mod token;

use logos::Logos;
use tracing::instrument;

use mini_diagnostic::{Diagnostic, DiagnosticQueue};

use line_index::LineIndex;
use raw_token::{RawError, RawToken};
pub use token::{Token, TokenKind, TokenList};

/// Lex a whole source text.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, diagnostics: &mut DiagnosticQueue) -> TokenList {
    let lines = LineIndex::new(source);
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let line = lines.line_of(logos.span().start);
        let slice = logos.slice();

        match token_result {
            Ok(raw) => result.push(Token::new(cook(raw, slice), line)),
            Err(RawError::Unrecognized) => {
                diagnostics.report(Diagnostic::lexical(
                    line,
                    format!("unrecognized symbol '{slice}'"),
                ));
            }
            Err(RawError::IntOutOfRange) => {
                diagnostics.report(Diagnostic::lexical(
                    line,
                    format!("integer literal {slice} out of range"),
                ));
                result.push(Token::new(TokenKind::Int(0), line));
            }
            Err(RawError::RealOutOfRange) => {
                diagnostics.report(Diagnostic::lexical(
                    line,
                    format!("real literal {slice} out of range"),
                ));
                result.push(Token::new(TokenKind::Real(0.0), line));
            }
            Err(RawError::UnterminatedString) => {
                diagnostics.report(Diagnostic::lexical(line, "unterminated string literal"));
            }
        }
    }

    let eof_line = lines.line_of(source.len());
    result.push(Token::new(TokenKind::Eof, eof_line));
    result
}

fn cook(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Program => TokenKind::Program,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Read => TokenKind::Read,
        RawToken::Write => TokenKind::Write,
        RawToken::Return => TokenKind::Return,
        RawToken::Hex => TokenKind::Hex,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::IntType => TokenKind::IntType,
        RawToken::DoubleType => TokenKind::DoubleType,
        RawToken::BoolType => TokenKind::BoolType,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Assign => TokenKind::Assign,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::HexInt(v) | RawToken::Int(v) => TokenKind::Int(v),
        RawToken::Real(v) => TokenKind::Real(v),
        RawToken::String => TokenKind::Str(unescape(&slice[1..slice.len() - 1])),
        // Never produced: its callback always fails.
        RawToken::UnterminatedString => TokenKind::Str(Vec::new()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
    }
}

/// Decode `\n`; any other `\c` stands for `c` itself.
fn unescape(body: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('n') => '\n',
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };
        let mut buf = [0u8; 4];
        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
    }
    out
}
