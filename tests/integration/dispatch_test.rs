//! Integration tests for the dispatch loop and session-level commands.

use super::common::{count_calls, output, run_script, shell, PromptLog};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use shellrec::commands::{CommandResult, Statement};
use shellrec::config::Config;
use shellrec::error::{Result, ShellError};
use shellrec::input::{LineSource, ReadResult, ReaderSource};
use shellrec::logging::Diagnostics;
use shellrec::session::Session;
use shellrec::shell::{LoopState, Shell, Termination};
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_prompt_change_shows_on_next_read() {
    let mut shell = shell();
    let mut source = PromptLog::new(&["prompt foo", "cmd_a"]);

    assert_eq!(shell.run(&mut source), Termination::EndOfInput);
    assert_eq!(source.prompts, vec!["(my)> ", "(foo)> ", "(foo)> "]);
}

#[test]
fn test_prompt_uses_configured_template() {
    let mut config = Config::default();
    config.shell.name = "lab".to_string();
    config.shell.prompt_template = "[{name}] $ ".to_string();
    let session = Session::from_config(&config, Diagnostics::default());
    let mut shell = Shell::new(session, Vec::new());
    let mut source = PromptLog::new(&["prompt x"]);

    shell.run(&mut source);
    assert_eq!(source.prompts, vec!["[lab] $ ", "[x] $ "]);
}

#[test]
fn test_debug_toggle_twice_restores_level() {
    let mut shell = shell();
    let before = shell.session().diagnostics().level();

    run_script(&mut shell, "debug\n");
    assert!(shell.session().debug_enabled());
    assert_eq!(shell.session().diagnostics().level(), LevelFilter::DEBUG);

    assert!(!shell.dispatch_line("debug"));
    assert!(!shell.session().debug_enabled());
    assert_eq!(shell.session().diagnostics().level(), before);
    assert_eq!(output(&shell), "debug: true\ndebug: false\n");
}

#[test]
fn test_quit_alias_exits() {
    let mut shell = shell();
    assert_eq!(run_script(&mut shell, "quit\ncmd_a\n"), Termination::Exit);
    assert_eq!(output(&shell), "");
    assert_eq!(shell.state(), LoopState::Terminated);
}

#[test]
fn test_configured_alias_expands() {
    let mut config = Config::default();
    config
        .aliases
        .insert("a".to_string(), "cmd_a".to_string());
    let mut shell = Shell::new(
        Session::from_config(&config, Diagnostics::default()),
        Vec::new(),
    );
    let calls = count_calls(&mut shell, "cmd_a");

    run_script(&mut shell, "a first\n.\n");
    assert_eq!(*calls.borrow(), vec!["cmd_a first", "cmd_a first"]);
}

#[test]
fn test_failed_command_is_tracked_and_captured() {
    let mut shell = shell();
    shell.registry_mut().register(
        "flaky",
        |_: &mut Session, statement: &Statement| -> Result<CommandResult> {
            Err(ShellError::handler(format!("cannot run {}", statement.args())))
        },
    );

    run_script(&mut shell, "record_start\nflaky 1\nrecord_stop\nflaky 2\n.\n");
    assert_eq!(
        output(&shell),
        "*** Error: Command failed: cannot run 1\n\
         *** Error: Command failed: cannot run 2\n\
         *** Error: Command failed: cannot run 2\n"
    );
    assert_eq!(
        shell.session().recorder().statements(),
        &[Statement::parse("flaky 1")]
    );
}

#[test]
fn test_lower_replay_limit_from_config() {
    let mut config = Config::default();
    config.shell.max_replay_depth = 2;
    let mut shell = Shell::new(
        Session::from_config(&config, Diagnostics::default()),
        Vec::new(),
    );

    run_script(
        &mut shell,
        "record_start\nrecord_play\nrecord_stop\nrecord_play\n",
    );
    assert_eq!(
        output(&shell),
        "*** Error: Replay depth limit of 2 exceeded\n"
    );
}

#[test]
fn test_invalid_utf8_is_an_unknown_command() {
    let mut shell = shell();
    let bytes = b"cmd_a\n\xff\xfe bad\ncmd_b\n".to_vec();
    let mut source = ReaderSource::new(Cursor::new(bytes));

    assert_eq!(shell.run(&mut source), Termination::EndOfInput);
    assert_eq!(
        output(&shell),
        "cmd_a is executed\n*** Unknown syntax: \u{FFFD}\u{FFFD} bad\ncmd_b is executed\n"
    );
}

struct Interrupting;

impl LineSource for Interrupting {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Interrupted)
    }
}

struct Broken;

impl LineSource for Broken {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Err(ShellError::input("stream closed"))
    }
}

#[test]
fn test_interrupt_terminates_cleanly() {
    let mut shell = shell();
    assert_eq!(shell.run(&mut Interrupting), Termination::Interrupted);
    assert_eq!(output(&shell), "\n");
}

#[test]
fn test_input_error_terminates_with_message() {
    let mut shell = shell();
    assert_eq!(
        shell.run(&mut Broken),
        Termination::InputError("Input error: stream closed".to_string())
    );
    assert_eq!(output(&shell), "*** Input error: stream closed\n");
}
