use std::path::PathBuf;

use thiserror::Error;

/// Domain errors raised while validating parameters and assembling commands.
///
/// Public functions return `anyhow::Result`; these values travel inside the
/// `anyhow::Error` and can be recovered with `downcast_ref::<RadError>()`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadError {
    #[error("{parameters} has no option named '{name}'")]
    UnknownOption {
        parameters: &'static str,
        name: String,
    },

    #[error("{parameters} does not recognize flag '{flag}'")]
    UnknownFlag {
        parameters: &'static str,
        flag: String,
    },

    #[error("Invalid value '{value}' for option '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error(
        "The inputs for both {first} and {second} have been specified. \
         Only one of those methods can be used for a calculation at a given time"
    )]
    InputConflict {
        first: &'static str,
        second: &'static str,
    },

    #[error("Incomplete inputs for {mode}: missing {}", .missing.join(", "))]
    IncompleteInputs {
        mode: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("No computation mode could be derived from the inputs of {program}")]
    NoComputationMode { program: &'static str },

    #[error("Input file not found: {}", .path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Invalid defaults in {table}: {reason}")]
    InvalidDefaults { table: String, reason: String },
}
