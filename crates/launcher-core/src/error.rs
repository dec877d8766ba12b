//! Launcher Errors

use thiserror::Error;

/// Common result type for launcher operations
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Launcher-level errors
///
/// None of these reach the user; call sites log them and fall back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// The backend rejected or failed a command
    #[error("{command} failed: {message}")]
    Invoke { command: &'static str, message: String },

    /// A payload did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl LaunchError {
    pub fn invoke(command: &'static str, message: impl Into<String>) -> Self {
        LaunchError::Invoke {
            command,
            message: message.into(),
        }
    }
}
