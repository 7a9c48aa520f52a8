//! Transport-agnostic command output types.
//!
//! Handlers never write to the terminal themselves. They return a
//! [`CommandResult`] and the dispatch loop renders messages and applies
//! control actions.

use super::statement::Statement;

/// A message produced by a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational message.
    Info(String),

    /// Error or notice message.
    Error(String),
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Messages to print.
    Messages(Vec<CommandOutput>),
    /// Statements to feed back through the dispatch loop, in order, before
    /// the current command completes.
    Dispatch(Vec<Statement>),
    /// Stop the dispatch loop after post-hooks run.
    Exit,
    /// No action needed.
    None,
}

impl CommandResult {
    /// Creates a single info message result.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Messages(vec![CommandOutput::info(msg)])
    }

    /// Creates a single error message result.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Messages(vec![CommandOutput::error(msg)])
    }

    /// Returns true if this result carries the stop signal.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}
