//! Line sources feeding the dispatch loop.
//!
//! The loop only needs "give me the next line for this prompt". Interactive
//! sessions use a rustyline editor; scripts, piped stdin and tests use a plain
//! buffered reader.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{Result, ShellError};

/// Outcome of asking a source for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line of input, without its trailing newline.
    Line(String),
    /// The input stream ended.
    Eof,
    /// The user interrupted input (Ctrl-C).
    Interrupted,
}

/// Something the dispatch loop can read lines from.
pub trait LineSource {
    /// Blocks until a line is available or the stream ends.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;
}

/// Reads lines from any buffered reader. The prompt is not echoed.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled line
/// reaches the loop as an ordinary (usually unknown) command.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ShellError::input(e.to_string()))?;

        if read == 0 {
            return Ok(ReadResult::Eof);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(ReadResult::Line(
            line.trim_end_matches(['\n', '\r']).to_string(),
        ))
    }
}

/// Interactive line editor with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Creates the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| ShellError::input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    // A rejected history entry does not affect the line itself
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadResult::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(ShellError::input(e.to_string())),
        }
    }
}
