//! Repeat command handler.

use tracing::debug;

use crate::commands::{CommandResult, Statement};
use crate::error::Result;
use crate::session::Session;

/// Handle repeat: re-dispatch the last repeatable statement, if any.
pub fn handle_repeat(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    match session.repeat_tracker().get() {
        Some(last) => {
            debug!(line = last.raw(), "repeating statement");
            Ok(CommandResult::Dispatch(vec![last.clone()]))
        }
        None => Ok(CommandResult::None),
    }
}
