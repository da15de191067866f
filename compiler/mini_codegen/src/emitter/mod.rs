//! Line-oriented IR output buffer.

use std::fmt::Display;

/// Accumulates emitted IR, one text line per entry.
///
/// Instructions are indented by two spaces; labels, globals and the
/// function header are not.
#[derive(Clone, Debug, Default)]
pub struct IrEmitter {
    lines: Vec<String>,
}

impl IrEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unindented line: a global, a declaration or a brace.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn instr(&mut self, text: impl Display) {
        self.lines.push(format!("  {text}"));
    }

    pub fn label(&mut self, label: &str) {
        self.lines.push(format!("{label}:"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
