//! MINI compiler driver.
//!
//! Wires the phases together: lex, parse, type-check, and, only when no
//! error was counted, generate IR. The binary in `main.rs` is a thin shell
//! over [`run`] that maps its result to a process exit code.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG`, e.g. `RUST_LOG=mini_codegen=trace`. Tracing goes
//! to stderr; stdout carries only the banner, diagnostics and summary.

mod cli;
mod compile;
mod error;
mod run;

use std::sync::Once;

pub use cli::{parse_args, Options, USAGE};
pub use compile::{compile_source, CompileOutcome};
pub use error::{DriverError, EXIT_ERRORS, EXIT_IO, EXIT_NO_INPUT, EXIT_SUCCESS};
pub use run::{default_output_path, report_internal_error, run, RunStatus};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
