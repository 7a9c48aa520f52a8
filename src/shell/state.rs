use std::fmt;

use crate::error::{Result, ShellError};

/// Lifecycle stage of the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    ReadingLine,
    PreHook,
    Executing,
    PostHook,
    Terminated,
}

impl LoopState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ReadingLine => "reading_line",
            Self::PreHook => "pre_hook",
            Self::Executing => "executing",
            Self::PostHook => "post_hook",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the dispatch loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// A command produced the stop signal.
    Exit,
    /// The line source ran out of input.
    EndOfInput,
    /// The user interrupted input.
    Interrupted,
    /// The line source failed.
    InputError(String),
}

/// Checks that the loop may move from `from` to `to`.
///
/// `Executing -> PreHook` and `PostHook -> PreHook` are the re-entry edges
/// taken when a handler asks for statements to be dispatched (repeat, replay).
/// `PreHook -> ReadingLine` and `PreHook -> PreHook` skip a blank line.
/// `Idle -> PreHook` is a single command dispatched outside the loop.
pub fn validate_transition(from: LoopState, to: LoopState) -> Result<()> {
    use LoopState as S;

    let allowed = match from {
        S::Idle => matches!(to, S::ReadingLine | S::PreHook | S::Terminated),
        S::ReadingLine => matches!(to, S::PreHook | S::Terminated),
        S::PreHook => matches!(to, S::Executing | S::ReadingLine | S::PreHook),
        S::Executing => matches!(to, S::PostHook | S::PreHook),
        S::PostHook => matches!(to, S::ReadingLine | S::PreHook | S::Terminated),
        S::Terminated => false,
    };

    if !allowed {
        return Err(ShellError::internal(format!(
            "illegal transition: {from} -> {to}"
        )));
    }
    Ok(())
}
