//! Error types for Wargame

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WargameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Container engine '{0}' is not available")]
    EngineUnavailable(String),

    #[error("Container engine command failed: {command} (exit code {code})")]
    EngineCommand { command: String, code: String },

    #[error("Run the script with sudo!")]
    NotPrivileged,

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Input closed before a value was entered")]
    InputClosed,

    #[error("Interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, WargameError>;
