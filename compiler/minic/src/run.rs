//! One invocation: read, compile, report, write.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use mini_codegen::CodegenError;
use mini_diagnostic::emitter::DiagnosticEmitter;

use crate::{compile_source, CompileOutcome, DriverError, Options, EXIT_ERRORS, EXIT_SUCCESS};

/// How a run that got as far as compiling ended.
#[derive(Debug)]
pub enum RunStatus {
    /// IR was written to this path.
    Compiled(PathBuf),
    /// Diagnostics were reported; nothing was written.
    ErrorsDetected(usize),
    /// Generation failed internally; nothing was written.
    InternalError(CodegenError),
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Compiled(_) => EXIT_SUCCESS,
            RunStatus::ErrorsDetected(_) | RunStatus::InternalError(_) => EXIT_ERRORS,
        }
    }
}

/// `<input>.ll`: the extension is appended, not substituted.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".ll");
    PathBuf::from(name)
}

/// Compile `options.input`, reporting through `emitter`.
///
/// The summary line is emitted for both clean and failed compilations. On
/// an internal error the caller reports it; no summary is emitted and no
/// output file is created.
#[instrument(level = "debug", skip_all, fields(input = %options.input.display()))]
pub fn run(
    options: &Options,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<RunStatus, DriverError> {
    let source = fs::read_to_string(&options.input).map_err(|source| DriverError::ReadInput {
        path: options.input.clone(),
        source,
    })?;

    let status = match compile_source(&source, options.diagnostics.clone()) {
        CompileOutcome::Success { ir } => {
            let path = options
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(&options.input));
            write_ir(&path, &ir)?;
            info!(path = %path.display(), lines = ir.len(), "wrote IR");
            emitter.emit_summary(0);
            RunStatus::Compiled(path)
        }
        CompileOutcome::Failed {
            diagnostics,
            error_count,
            ..
        } => {
            emitter.emit_all(&diagnostics);
            emitter.emit_summary(error_count);
            RunStatus::ErrorsDetected(error_count)
        }
        CompileOutcome::InternalError(error) => RunStatus::InternalError(error),
    };
    emitter.flush();
    Ok(status)
}

/// Report a generation failure. `main` passes stderr; stdout carries only
/// the banner, the diagnostics and the summary.
pub fn report_internal_error(out: &mut dyn Write, error: &CodegenError) -> io::Result<()> {
    writeln!(out, "internal compiler error: {error}")
}

fn write_ir(path: &Path, ir: &[String]) -> Result<(), DriverError> {
    let mut text = ir.join("\n");
    text.push('\n');
    fs::write(path, text).map_err(|source| DriverError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
