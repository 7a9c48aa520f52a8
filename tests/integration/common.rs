//! Common test utilities for driving a shell in memory.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;
use std::rc::Rc;

use shellrec::commands::{CommandResult, Statement};
use shellrec::error::Result;
use shellrec::input::{LineSource, ReadResult, ReaderSource};
use shellrec::session::Session;
use shellrec::shell::{Shell, Termination};

/// A shell writing into a byte buffer.
pub type TestShell = Shell<Vec<u8>>;

pub fn shell() -> TestShell {
    Shell::new(Session::default(), Vec::new())
}

/// Runs `script` (one command per line) to completion.
pub fn run_script(shell: &mut TestShell, script: &str) -> Termination {
    let mut source = ReaderSource::new(Cursor::new(script.to_string()));
    shell.run(&mut source)
}

/// Everything the shell has printed so far.
pub fn output(shell: &TestShell) -> String {
    String::from_utf8_lossy(shell.output()).to_string()
}

/// Output split into lines.
pub fn output_lines(shell: &TestShell) -> Vec<String> {
    output(shell).lines().map(str::to_string).collect()
}

/// Raw lines seen by a counting handler, in invocation order.
pub type Calls = Rc<RefCell<Vec<String>>>;

/// Replaces `name` with a handler that logs each raw line it receives.
pub fn count_calls(shell: &mut TestShell, name: &str) -> Calls {
    let calls: Calls = Rc::default();
    let log = Rc::clone(&calls);
    shell.registry_mut().register(
        name,
        move |_: &mut Session, statement: &Statement| -> Result<CommandResult> {
            log.borrow_mut().push(statement.raw().to_string());
            Ok(CommandResult::None)
        },
    );
    calls
}

/// Scripted line source that remembers every prompt it was shown.
#[derive(Default)]
pub struct PromptLog {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl PromptLog {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for PromptLog {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }
}
