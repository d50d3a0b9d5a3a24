/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Malformed or missing command line arguments. Only ever handled at the entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid number of arguments: expected 3, got {0}.")]
    ArgumentCount(usize),

    #[error("Invalid input format: unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("Invalid input format: expected '{key}<value>', got '{token}'.")]
    MissingKey { key: &'static str, token: String },

    #[error("Invalid input format: '{key}' has an empty value.")]
    EmptyValue { key: &'static str },

    #[error("Invalid input format: '{key}' contains negative floor '{value}'.")]
    NegativeValue { key: &'static str, value: String },

    #[error("Invalid input format: '{key}' contains non-numeric value '{value}'.")]
    NotANumber { key: &'static str, value: String },

    #[error("Invalid input format: '{0}' is not valid unicode.")]
    NotUnicode(String),

    #[error("Invalid input format: both a 'start=' and a 'floor=' argument are required.")]
    MissingArgument,

    #[error("Invalid input format: arguments to '{command}' were not understood ({kind}).")]
    Unrecognized { command: String, kind: String },
}

/// Misuse of the calculator, the formatter or `FloorSequence` construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a floor sequence needs at least {min} floors, got {actual}")]
    TooFewFloors { min: usize, actual: usize },

    #[error("cannot print an empty floor sequence")]
    EmptySequence,
}

#[derive(Error, Debug)]
pub enum ElevatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
