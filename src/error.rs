use serde_json;
use thiserror::Error;

// Errors only ever come from the edges: settings files, the Game Master's JSON and
// character creation. The rules themselves never fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid state delta: {0}")]
    InvalidDelta(String), // The narrator sent a change the rules cannot apply.

    #[error("Invalid character: {0}")]
    InvalidCharacter(String), // A sheet that breaks the creation budgets.

    #[error("Unknown check: {0}")]
    UnknownCheck(String), // A check request that does not parse.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("No home directory to put the log in")]
    NoHomeDirectory,

    #[error("Could not create log directory: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger already set: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
