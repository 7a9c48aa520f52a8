//! Pre- and post-command hooks.
//!
//! Pre-hooks rewrite the raw line before it is parsed. Post-hooks run after
//! the handler returns, in registration order, and may change the stop
//! decision.

use tracing::debug;

use crate::commands::Statement;
use crate::session::Session;

/// Rewrites a raw line before parsing.
pub type PreHook = fn(&Session, String) -> String;

/// Runs after a command completes; returns the (possibly changed) stop flag.
pub type PostHook = fn(&mut Session, &Statement, bool) -> bool;

/// Runs once when the loop terminates.
pub type TeardownHook = fn(&Session);

/// Replaces a leading shortcut token (such as `.`) with its command.
pub fn expand_alias(session: &Session, line: String) -> String {
    let trimmed = line.trim_start();
    let token_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, rest) = trimmed.split_at(token_end);

    match session.alias(token) {
        Some(command) => {
            debug!(token, command, "expanding alias");
            format!("{command}{rest}")
        }
        None => line,
    }
}

/// Makes the statement the repeat target unless it is the repeat command.
pub fn track_repeatable(session: &mut Session, statement: &Statement, stop: bool) -> bool {
    session.repeat_tracker_mut().record(statement);
    stop
}

/// Appends the statement to the recorder if recording is on.
pub fn capture_statement(session: &mut Session, statement: &Statement, stop: bool) -> bool {
    if session.recorder_mut().capture(statement) {
        debug!(line = statement.raw(), "captured statement");
    }
    stop
}
