//! Command-line parsing.

use std::path::PathBuf;

use mini_diagnostic::emitter::ColorMode;
use mini_diagnostic::DiagnosticConfig;

use crate::DriverError;

pub const USAGE: &str = "Usage: minic <file.mini> [options]

Options:
  -o <path>             Output file (default: <file.mini>.ll)
  --color=<mode>        auto, always, never (default: auto)
  --error-limit=<n>     Print at most n diagnostics (default: all)";

/// What one invocation asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    /// `None` means next to the input, see [`crate::default_output_path`].
    pub output: Option<PathBuf>,
    pub color: ColorMode,
    pub diagnostics: DiagnosticConfig,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Options, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut output = None;
    let mut color = ColorMode::default();
    let mut diagnostics = DiagnosticConfig::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "-o" {
            let path = args
                .next()
                .ok_or_else(|| DriverError::InvalidArguments("-o requires a path".to_string()))?;
            output = Some(PathBuf::from(path));
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                other => {
                    return Err(DriverError::InvalidArguments(format!(
                        "unknown color mode '{other}'"
                    )))
                }
            };
        } else if let Some(limit) = arg.strip_prefix("--error-limit=") {
            let limit = limit.parse().map_err(|_| {
                DriverError::InvalidArguments(format!("invalid error limit '{limit}'"))
            })?;
            diagnostics = DiagnosticConfig::with_limit(limit);
        } else if arg.starts_with('-') {
            return Err(DriverError::InvalidArguments(format!(
                "unknown option '{arg}'"
            )));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(DriverError::InvalidArguments(format!(
                "unexpected argument '{arg}'"
            )));
        }
    }

    Ok(Options {
        input: input.ok_or(DriverError::MissingInput)?,
        output,
        color,
        diagnostics,
    })
}

#[cfg(test)]
mod tests;
