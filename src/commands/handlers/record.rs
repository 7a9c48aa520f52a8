//! Statement recording command handlers (record_start, record_stop,
//! record_clear, record_play, record_print).

use tracing::debug;

use crate::commands::{CommandOutput, CommandResult, Statement};
use crate::error::Result;
use crate::session::Session;

/// Handle record_start.
pub fn handle_record_start(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    session.recorder_mut().start_recording();
    Ok(CommandResult::None)
}

/// Handle record_stop.
pub fn handle_record_stop(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    session.recorder_mut().stop_recording();
    Ok(CommandResult::None)
}

/// Handle record_clear.
pub fn handle_record_clear(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    session.recorder_mut().clear();
    Ok(CommandResult::None)
}

/// Handle record_play: re-dispatch a snapshot of the recorded statements.
pub fn handle_record_play(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    let statements: Vec<Statement> = session.recorder().replay().collect();
    debug!(count = statements.len(), "replaying recorded statements");
    Ok(CommandResult::Dispatch(statements))
}

/// Handle record_print: list the recorded raw lines.
pub fn handle_record_print(session: &mut Session, _statement: &Statement) -> Result<CommandResult> {
    let lines = session
        .recorder()
        .statements()
        .iter()
        .map(|s| CommandOutput::info(format!("line='{}'", s.raw())))
        .collect();
    Ok(CommandResult::Messages(lines))
}
