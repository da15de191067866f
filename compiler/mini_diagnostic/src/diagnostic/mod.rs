//! Core diagnostic types: [`ErrorKind`], [`Line`] and [`Diagnostic`].

use std::fmt;

/// 1-based source line a diagnostic (or an AST node) is attributed to.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Line(u32);

impl Line {
    /// Line used for synthesized nodes that have no source position.
    pub const UNKNOWN: Line = Line(0);

    #[inline]
    pub const fn new(line: u32) -> Self {
        Line(line)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which phase detected the problem.
///
/// Internal (type-checker/code-generator disagreement) failures are not an
/// `ErrorKind`: they never enter the queue and abort the run instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Unrecognized input symbol or malformed literal.
    Lexical,
    /// Grammar violation.
    Syntax,
    /// Type mismatch, duplicate or undeclared identifier, bad condition.
    Semantic,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "Lexical error",
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::Semantic => "Semantic error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported problem.
///
/// Renders as `<ErrorKind>: line <N> -- <description>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub line: Line,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, line: Line, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn lexical(line: Line, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, line, message)
    }

    pub fn syntax(line: Line, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, line, message)
    }

    pub fn semantic(line: Line, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Semantic, line, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: line {} -- {}", self.kind, self.line, self.message)
    }
}
