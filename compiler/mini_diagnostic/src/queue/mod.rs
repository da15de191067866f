//! Diagnostic queue: the compilation-wide error counter.
//!
//! Every reported error increments the counter exactly once. The queue never
//! deduplicates or suppresses, because code generation is gated on the count
//! and tests rely on exact counts. The only knob is how many diagnostics are
//! *kept* for printing.

use tracing::trace;

use crate::{Diagnostic, ErrorGuaranteed, ErrorKind, Line};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics retained for printing (0 = unlimited).
    /// Errors past the limit are still counted.
    pub error_limit: usize,
}

impl DiagnosticConfig {
    /// Keep at most `limit` diagnostics for printing.
    pub fn with_limit(limit: usize) -> Self {
        DiagnosticConfig { error_limit: limit }
    }
}

/// Collected diagnostics plus the error counter.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.report(Diagnostic::semantic(line, "undeclared variable x"));
/// assert_eq!(queue.error_count(), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create an unlimited queue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            config,
        }
    }

    /// Record a problem and get proof that it was recorded.
    pub fn report(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        trace!(kind = ?diag.kind, line = diag.line.get(), message = %diag.message, "diagnostic");
        self.error_count += 1;
        if !self.limit_reached_for_storage() {
            self.diagnostics.push(diag);
        }
        ErrorGuaranteed::new()
    }

    /// Shorthand for `report(Diagnostic::new(kind, line, message))`.
    pub fn error(
        &mut self,
        kind: ErrorKind,
        line: Line,
        message: impl Into<String>,
    ) -> ErrorGuaranteed {
        self.report(Diagnostic::new(kind, line, message))
    }

    fn limit_reached_for_storage(&self) -> bool {
        self.config.error_limit > 0 && self.diagnostics.len() >= self.config.error_limit
    }

    /// Total number of errors reported, including ones not retained.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors of one kind among the retained diagnostics.
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// `Some` proof if at least one error was reported.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Retained diagnostics in report order.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take the retained diagnostics ordered by line.
    ///
    /// The sort is stable, so diagnostics on the same line keep report
    /// order. The error count is left untouched: it belongs to the run.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result: Vec<Diagnostic> = self.diagnostics.drain(..).collect();
        result.sort_by_key(|d| d.line);
        result
    }
}

#[cfg(test)]
mod tests;
