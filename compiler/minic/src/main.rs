//! MINI compiler CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use mini_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use minic::{init_tracing, parse_args, report_internal_error, run, RunStatus, USAGE};

fn main() -> ExitCode {
    init_tracing();
    println!("\nCompiler for MINI language");

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            println!("{error}");
            eprintln!("{USAGE}");
            return exit(error.exit_code());
        }
    };

    let mut emitter = TerminalEmitter::stdout(options.color, std::io::stdout().is_terminal());
    println!();
    match run(&options, &mut emitter) {
        Ok(RunStatus::InternalError(error)) => {
            emitter.flush();
            // Nothing else to tell the user if stderr itself is gone.
            let _ = report_internal_error(&mut std::io::stderr().lock(), &error);
            exit(minic::EXIT_ERRORS)
        }
        Ok(status) => exit(status.exit_code()),
        Err(error) => {
            println!("\n{error}");
            exit(error.exit_code())
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
