//! Error type for CLI command handlers.

use std::fmt;

use quinte_engine::errors::GameError;

/// Everything a command handler can fail with, so handlers propagate
/// with `?` and `run` maps the result to an exit code.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, file reads)
    Io(std::io::Error),
    /// Invalid user input or command-line arguments
    InvalidInput(String),
    /// Configuration error
    Config(String),
    /// Error surfaced by the game engine
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}
