//! Raw tokens produced by logos, before literal cooking.

use logos::{Lexer, Logos};

/// Why a slice of input could not become a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    #[default]
    Unrecognized,
    IntOutOfRange,
    RealOutOfRange,
    UnterminatedString,
}

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    // === Keywords ===
    #[token("program")]
    Program,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("read")]
    Read,
    #[token("write")]
    Write,
    #[token("return")]
    Return,
    #[token("hex")]
    Hex,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Type keywords ===
    #[token("int")]
    IntType,
    #[token("double")]
    DoubleType,
    #[token("bool")]
    BoolType,

    // === Symbols ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // === Operators ===
    #[token("=")]
    Assign,
    #[token("||")]
    PipePipe,
    #[token("&&")]
    AmpAmp,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,

    // === Literals ===

    // Hex integer: any 32-bit pattern, reinterpreted as i32
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| {
        u32::from_str_radix(&lex.slice()[2..], 16)
            .map(|bits| bits as i32)
            .map_err(|_| RawError::IntOutOfRange)
    })]
    HexInt(i32),

    #[regex(r"0|[1-9][0-9]*", |lex| {
        lex.slice().parse::<i32>().map_err(|_| RawError::IntOutOfRange)
    })]
    Int(i32),

    #[regex(r"(0|[1-9][0-9]*)\.[0-9]+", |lex| {
        match lex.slice().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(RawError::RealOutOfRange),
        }
    })]
    Real(f64),

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,

    #[regex(r#""([^"\\\n]|\\[^\n])*"#, unterminated)]
    UnterminatedString,

    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Ident,
}

/// A string literal that runs into a newline or the end of input.
fn unterminated(_: &mut Lexer<'_, RawToken>) -> Result<(), RawError> {
    Err(RawError::UnterminatedString)
}
