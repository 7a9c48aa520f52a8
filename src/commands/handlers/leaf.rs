//! Leaf commands with no shell-level effects (cmd_a, cmd_b).

use crate::commands::{CommandResult, Statement};
use crate::error::Result;
use crate::session::Session;

/// Handle cmd_a.
pub fn handle_cmd_a(_session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    Ok(CommandResult::info("cmd_a is executed"))
}

/// Handle cmd_b.
pub fn handle_cmd_b(_session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    Ok(CommandResult::info("cmd_b is executed"))
}
