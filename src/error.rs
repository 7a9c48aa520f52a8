//! Error types for shellrec.
//!
//! Defines the main error enum used throughout the shell.

use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input stream errors (unreadable script, line editor failure, etc.)
    #[error("Input error: {0}")]
    Input(String),

    /// A command handler failed while executing.
    #[error("Command failed: {0}")]
    Handler(String),

    /// Re-entrant dispatch (repeat/replay) nested deeper than allowed.
    #[error("Replay depth limit of {limit} exceeded")]
    ReplayDepth { limit: usize },

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShellError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an input error with the given message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Creates a handler error with the given message.
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Input(_) => "Input Error",
            Self::Handler(_) => "Command Error",
            Self::ReplayDepth { .. } => "Replay Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ShellError.
pub type Result<T> = std::result::Result<T, ShellError>;
