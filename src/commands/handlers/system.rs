//! Session command handlers (debug, prompt, exit) and the unknown-command fallback.

use crate::commands::{CommandResult, Statement};
use crate::error::Result;
use crate::session::Session;

/// Handle debug: toggle verbose diagnostics.
pub fn handle_debug(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    let enabled = session.toggle_debug()?;
    Ok(CommandResult::info(format!("debug: {enabled}")))
}

/// Handle prompt: render the prompt template for the argument text.
pub fn handle_prompt(session: &mut Session, statement: &Statement) -> Result<CommandResult> {
    session.set_prompt(statement.args());
    Ok(CommandResult::None)
}

/// Handle exit.
pub fn handle_exit(_session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    Ok(CommandResult::Exit)
}

/// Handle a command name with no registered handler.
pub fn handle_unknown(_session: &mut Session, statement: &Statement) -> Result<CommandResult> {
    Ok(CommandResult::error(format!(
        "*** Unknown syntax: {}",
        statement.raw().trim()
    )))
}
