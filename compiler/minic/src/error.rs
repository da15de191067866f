//! Driver failures that happen outside compilation proper.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
/// No input file given, or the command line could not be understood.
pub const EXIT_NO_INPUT: i32 = 1;
/// The input could not be read or the output could not be written.
pub const EXIT_IO: i32 = 2;
/// Errors were detected, or generation failed internally.
pub const EXIT_ERRORS: i32 = 3;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Please provide filename for compilation!")]
    MissingInput,

    #[error("{0}")]
    InvalidArguments(String),

    #[error("cannot read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DriverError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::MissingInput | DriverError::InvalidArguments(_) => EXIT_NO_INPUT,
            DriverError::ReadInput { .. } | DriverError::WriteOutput { .. } => EXIT_IO,
        }
    }
}
