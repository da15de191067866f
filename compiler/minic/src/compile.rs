//! The phase pipeline over an in-memory source text.

use tracing::{debug, instrument};

use mini_codegen::CodegenError;
use mini_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorGuaranteed};

/// Result of compiling one source text.
#[derive(Debug)]
pub enum CompileOutcome {
    /// No errors; the generated IR, one entry per line.
    Success { ir: Vec<String> },
    /// Errors were counted; no IR was generated.
    Failed {
        /// Retained diagnostics, ordered by line.
        diagnostics: Vec<Diagnostic>,
        /// Every counted error, including any past the print limit.
        error_count: usize,
        guarantee: ErrorGuaranteed,
    },
    /// The checker accepted the program but generation found it
    /// inconsistent.
    InternalError(CodegenError),
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success { .. })
    }
}

/// Run every phase over `source`.
///
/// Type checking runs even after lexical or syntax errors so semantic
/// problems in the parts that did parse are reported in the same run.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile_source(source: &str, config: DiagnosticConfig) -> CompileOutcome {
    let mut diagnostics = DiagnosticQueue::with_config(config);

    let tokens = mini_lexer::lex(source, &mut diagnostics);
    let program = mini_parse::parse_program(&tokens, &mut diagnostics);
    let types = mini_types::check_program(&program, &mut diagnostics);

    if let Some(guarantee) = diagnostics.has_errors() {
        let error_count = diagnostics.error_count();
        debug!(error_count, "skipping code generation");
        return CompileOutcome::Failed {
            diagnostics: diagnostics.flush(),
            error_count,
            guarantee,
        };
    }

    match mini_codegen::generate(&program, &types) {
        Ok(ir) => CompileOutcome::Success { ir },
        Err(error) => CompileOutcome::InternalError(error),
    }
}
