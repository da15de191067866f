//! Cooked tokens handed to the parser.

use std::fmt;

use mini_diagnostic::Line;

/// Token kinds with literal payloads already decoded.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Keywords
    Program,
    If,
    Else,
    While,
    Read,
    Write,
    Return,
    Hex,
    True,
    False,
    IntType,
    DoubleType,
    BoolType,

    // Symbols
    LBrace,
    RBrace,
    LParen,
    RParen,
    Semicolon,
    Comma,

    // Operators
    Assign,
    PipePipe,
    AmpAmp,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Pipe,
    Amp,
    Bang,
    Tilde,

    // Literals
    Int(i32),
    Real(f64),
    /// String literal content after escape processing.
    Str(Vec<u8>),
    Ident(String),

    /// End of input. Always the last token.
    Eof,
}

impl TokenKind {
    /// Human-readable description for syntax errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(v) => format!("integer {v}"),
            TokenKind::Real(v) => format!("real {v}"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Ident(name) => format!("identifier {name}"),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("'{}'", other.symbol()),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Program => "program",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::Return => "return",
            TokenKind::Hex => "hex",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::IntType => "int",
            TokenKind::DoubleType => "double",
            TokenKind::BoolType => "bool",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Assign => "=",
            TokenKind::PipePipe => "||",
            TokenKind::AmpAmp => "&&",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::Int(_)
            | TokenKind::Real(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::Eof => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A token and the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: Line,
}

impl Token {
    pub fn new(kind: TokenKind, line: Line) -> Self {
        Token { kind, line }
    }
}

/// Ordered tokens, terminated by [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
