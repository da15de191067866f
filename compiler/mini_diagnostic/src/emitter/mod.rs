//! Terminal output for diagnostics and the end-of-run summary.

use std::io::{self, Write};

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const SUCCESS: &str = "\x1b[1;32m"; // Bold green
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic line.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Emit the final "succeeded / N errors" line.
    fn emit_summary(&mut self, error_count: usize);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// One line per diagnostic: `<ErrorKind>: line <N> -- <description>`.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and hand back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Emitter for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored(diagnostic.kind.as_str(), colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": line {} -- {}",
            diagnostic.line, diagnostic.message
        );
    }

    fn emit_summary(&mut self, error_count: usize) {
        let _ = writeln!(self.writer);
        if error_count == 0 {
            let _ = write!(self.writer, " ");
            self.write_colored("compilation successful", colors::SUCCESS);
            let _ = writeln!(self.writer);
        } else {
            let _ = write!(self.writer, " ");
            self.write_colored(&format!("{error_count} errors detected"), colors::ERROR);
            let _ = writeln!(self.writer);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
