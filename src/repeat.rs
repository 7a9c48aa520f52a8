//! Tracks the last statement eligible for repetition.

use crate::commands::Statement;

/// Name of the command that re-executes the last repeatable statement.
pub const REPEAT_COMMAND: &str = "repeat";

/// Remembers the most recent repeatable statement.
#[derive(Debug, Default, Clone)]
pub struct RepeatTracker {
    last_repeatable: Option<Statement>,
}

impl RepeatTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the tracked statement unless `statement` is the repeat
    /// command itself.
    ///
    /// Returns true if the statement became the new repeat target.
    pub fn record(&mut self, statement: &Statement) -> bool {
        if statement.command() == REPEAT_COMMAND {
            return false;
        }
        self.last_repeatable = Some(statement.clone());
        true
    }

    pub fn get(&self) -> Option<&Statement> {
        self.last_repeatable.as_ref()
    }
}
