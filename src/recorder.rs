//! Statement recording for later replay.
//!
//! The recorder only appends while recording is on. Replay hands out a
//! snapshot, so a replayed statement may start, stop or clear recording (or
//! replay again) without disturbing the iteration in progress.

use crate::commands::Statement;

/// Commands that control the recorder itself. They are never captured.
pub const RECORDER_CONTROLS: &[&str] = &["record_start", "record_stop", "record_clear"];

/// Captures an ordered sequence of statements.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    recording: bool,
    statements: Vec<Statement>,
}

impl Recorder {
    /// Creates an idle recorder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns recording on.
    pub fn start_recording(&mut self) {
        self.recording = true;
    }

    /// Turns recording off. Captured statements are kept.
    pub fn stop_recording(&mut self) {
        self.recording = false;
    }

    /// Discards all captured statements, recording or not.
    pub fn clear(&mut self) {
        self.statements.clear();
    }

    /// Appends `statement` if recording is on and it is not one of the
    /// recorder controls.
    ///
    /// Returns true if the statement was captured.
    pub fn capture(&mut self, statement: &Statement) -> bool {
        if !self.recording || RECORDER_CONTROLS.contains(&statement.command()) {
            return false;
        }
        self.statements.push(statement.clone());
        true
    }

    /// Returns a snapshot of the captured statements in insertion order.
    pub fn replay(&self) -> impl Iterator<Item = Statement> {
        self.statements.clone().into_iter()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
