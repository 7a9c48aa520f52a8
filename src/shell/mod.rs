//! The dispatch loop.
//!
//! Reads a line, runs the pre-hooks, parses it into a [`Statement`], invokes
//! the handler, runs the post-hooks and decides whether to stop. Repeat and
//! replay re-enter [`Shell::dispatch_line`] on the same thread, one statement
//! at a time, before the triggering command's own post-hooks run.
//!
//! The loop is the only trust boundary: handler errors and panics are caught
//! and reported, and input failures end the loop cleanly. An interrupt raised
//! while a command runs takes effect after that command's post-hooks.

pub mod hooks;
pub mod state;

use std::io::{self, Write};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::commands::{handlers, CommandOutput, CommandRegistry, CommandResult, Statement};
use crate::error::ShellError;
use crate::input::{LineSource, ReadResult};
use crate::session::Session;

pub use hooks::{PostHook, PreHook, TeardownHook};
pub use state::{validate_transition, LoopState, Termination};

/// An interactive command shell writing command output to `O`.
pub struct Shell<O: Write = io::Stdout> {
    session: Session,
    registry: CommandRegistry,
    pre_hooks: Vec<PreHook>,
    post_hooks: Vec<PostHook>,
    teardown_hooks: Vec<TeardownHook>,
    state: LoopState,
    interrupt_flag: Arc<AtomicBool>,
    out: O,
}

impl Shell<io::Stdout> {
    /// Creates a shell printing to stdout.
    pub fn stdout(session: Session) -> Self {
        Self::new(session, io::stdout())
    }
}

impl<O: Write> Shell<O> {
    /// Creates a shell with the built-in commands and the default hook chain:
    /// alias expansion before parsing, then repeat tracking and statement
    /// capture after each command.
    pub fn new(session: Session, out: O) -> Self {
        let mut registry = CommandRegistry::new();
        handlers::register_builtins(&mut registry);

        Self {
            session,
            registry,
            pre_hooks: vec![hooks::expand_alias],
            post_hooks: vec![hooks::track_repeatable, hooks::capture_statement],
            teardown_hooks: Vec::new(),
            state: LoopState::Idle,
            interrupt_flag: Arc::new(AtomicBool::new(false)),
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns the flag that interrupts the loop once the running command
    /// completes. Typically raised from a SIGINT handler.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt_flag)
    }

    fn interrupted(&self) -> bool {
        self.interrupt_flag.load(Ordering::SeqCst)
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn into_output(self) -> O {
        self.out
    }

    /// Appends a pre-hook; pre-hooks run in registration order.
    pub fn add_pre_hook(&mut self, hook: PreHook) {
        self.pre_hooks.push(hook);
    }

    /// Appends a post-hook after the built-in ones.
    pub fn add_post_hook(&mut self, hook: PostHook) {
        self.post_hooks.push(hook);
    }

    /// Registers a callback run once when the loop terminates.
    pub fn on_teardown(&mut self, hook: TeardownHook) {
        self.teardown_hooks.push(hook);
    }

    /// Runs the loop until a command stops it or the source ends.
    ///
    /// Teardown hooks run exactly once, whatever the reason for stopping.
    pub fn run(&mut self, source: &mut dyn LineSource) -> Termination {
        debug!(stage = "preloop", session = self.session.name());

        let termination = loop {
            self.enter(LoopState::ReadingLine);

            let line = match source.read_line(self.session.prompt()) {
                Ok(ReadResult::Line(line)) => line,
                Ok(ReadResult::Eof) => break Termination::EndOfInput,
                Ok(ReadResult::Interrupted) => {
                    self.write_line("");
                    break Termination::Interrupted;
                }
                Err(e) => {
                    error!(error = %e, "reading input failed");
                    self.emit(&CommandOutput::error(format!("*** {e}")));
                    break Termination::InputError(e.to_string());
                }
            };

            if self.dispatch_line(&line) {
                break Termination::Exit;
            }
            if self.interrupt_flag.swap(false, Ordering::SeqCst) {
                debug!(stage = "post_hook", "interrupted while executing");
                self.write_line("");
                break Termination::Interrupted;
            }
        };

        self.enter(LoopState::Terminated);
        debug!(stage = "postloop", reason = ?termination);
        self.teardown();
        termination
    }

    /// Sends one raw line through the full hook chain.
    ///
    /// Returns true if the loop should stop. Blank and comment lines do
    /// nothing: they are not executed, tracked or captured.
    pub fn dispatch_line(&mut self, line: &str) -> bool {
        self.enter(LoopState::PreHook);
        let mut line = line.to_string();
        for hook in &self.pre_hooks {
            line = hook(&self.session, line);
        }

        let statement = Statement::parse(&line);
        debug!(stage = "pre_hook", line = statement.raw(), "parsed statement");
        if statement.is_empty() {
            debug!(stage = "pre_hook", "empty line");
            return false;
        }

        self.enter(LoopState::Executing);
        let mut stop = self.execute(&statement);

        self.enter(LoopState::PostHook);
        for hook in &self.post_hooks {
            stop = hook(&mut self.session, &statement, stop);
        }
        debug!(
            stage = "post_hook",
            command = statement.command(),
            line = statement.raw(),
            stop
        );
        stop
    }

    fn execute(&mut self, statement: &Statement) -> bool {
        debug!(
            stage = "executing",
            command = statement.command(),
            args = statement.args()
        );

        let outcome = {
            let handler = self.registry.resolve(statement.command());
            let session = &mut self.session;
            catch_unwind(AssertUnwindSafe(|| handler.execute(session, statement)))
        };

        match outcome {
            Ok(Ok(result)) => self.apply(result),
            Ok(Err(e)) => {
                self.report_failure(statement, &e);
                false
            }
            Err(panic) => {
                let e = ShellError::internal(panic_message(panic.as_ref()));
                self.report_failure(statement, &e);
                false
            }
        }
    }

    fn apply(&mut self, result: CommandResult) -> bool {
        match result {
            CommandResult::Messages(messages) => {
                for message in &messages {
                    self.emit(message);
                }
                false
            }
            CommandResult::Dispatch(statements) => self.dispatch_nested(statements),
            CommandResult::Exit => true,
            CommandResult::None => false,
        }
    }

    /// Feeds statements back through the loop in order, each fully completing
    /// before the next starts. A stop signal or an interrupt ends the sequence
    /// early.
    fn dispatch_nested(&mut self, statements: Vec<Statement>) -> bool {
        if let Err(e) = self.session.enter_replay() {
            warn!(
                error = %e,
                limit = self.session.max_replay_depth(),
                "nested dispatch rejected"
            );
            self.emit(&CommandOutput::error(format!("*** Error: {e}")));
            return false;
        }

        let resume = self.state;
        let mut stop = false;
        for statement in statements {
            if self.interrupted() {
                debug!(line = statement.raw(), "nested dispatch interrupted");
                break;
            }
            if self.dispatch_line(statement.raw()) {
                stop = true;
                break;
            }
        }
        self.state = resume;

        self.session.exit_replay();
        stop
    }

    fn report_failure(&mut self, statement: &Statement, e: &ShellError) {
        warn!(
            stage = "executing",
            command = statement.command(),
            line = statement.raw(),
            error = %e,
            "command failed"
        );
        self.emit(&CommandOutput::error(format!("*** Error: {e}")));
    }

    fn emit(&mut self, message: &CommandOutput) {
        self.write_line(message.text());
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(error = %e, "could not write command output");
        }
    }

    fn enter(&mut self, next: LoopState) {
        if let Err(e) = validate_transition(self.state, next) {
            error!(error = %e, "dispatch loop state machine violated");
        }
        self.state = next;
    }

    fn teardown(&mut self) {
        for hook in std::mem::take(&mut self.teardown_hooks) {
            hook(&self.session);
        }
        debug!(stage = "teardown", "clean up");
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
