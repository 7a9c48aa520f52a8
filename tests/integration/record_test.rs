//! Integration tests for statement recording and replay.

use super::common::{count_calls, output, output_lines, run_script, shell};
use pretty_assertions::assert_eq;
use shellrec::commands::{CommandResult, Statement};
use shellrec::error::Result;
use shellrec::session::Session;
use shellrec::shell::Termination;
use std::sync::atomic::Ordering;

#[test]
fn test_replay_preserves_capture_order() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");
    run_script(
        &mut shell,
        "record_start\ncmd_a 1\ncmd_a 2\nrecord_stop\nrecord_play\n",
    );

    assert_eq!(
        *calls.borrow(),
        vec!["cmd_a 1", "cmd_a 2", "cmd_a 1", "cmd_a 2"]
    );
    // Replay while not recording does not capture again.
    assert_eq!(
        shell.session().recorder().statements(),
        &[Statement::parse("cmd_a 1"), Statement::parse("cmd_a 2")]
    );
}

#[test]
fn test_clear_then_play_replays_nothing() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");
    run_script(&mut shell, "record_start\ncmd_a 1\nrecord_clear\nrecord_play\n");

    assert_eq!(*calls.borrow(), vec!["cmd_a 1"]);
    // Only the replay command itself was captured after the clear.
    assert_eq!(
        shell.session().recorder().statements(),
        &[Statement::parse("record_play")]
    );
}

#[test]
fn test_record_print_lists_raw_lines() {
    let mut shell = shell();
    run_script(
        &mut shell,
        "record_start\ncmd_a  one\ncmd_b two\nrecord_stop\nrecord_print\n",
    );

    assert_eq!(
        output_lines(&shell),
        vec![
            "cmd_a is executed",
            "cmd_b is executed",
            "line='cmd_a  one'",
            "line='cmd_b two'",
        ]
    );
}

#[test]
fn test_replay_while_recording_captures_again() {
    let mut shell = shell();
    run_script(&mut shell, "record_start\ncmd_a 1\nrecord_play\nrecord_stop\n");

    let raws: Vec<&str> = shell
        .session()
        .recorder()
        .statements()
        .iter()
        .map(Statement::raw)
        .collect();
    assert_eq!(raws, vec!["cmd_a 1", "cmd_a 1", "record_play"]);
}

#[test]
fn test_blank_lines_are_not_captured() {
    let mut shell = shell();
    run_script(&mut shell, "record_start\n\ncmd_b\n   \nrecord_stop\n");

    assert_eq!(
        shell.session().recorder().statements(),
        &[Statement::parse("cmd_b")]
    );
}

#[test]
fn test_self_referential_replay_hits_depth_limit() {
    let mut shell = shell();
    let termination = run_script(
        &mut shell,
        "record_start\nrecord_play\nrecord_stop\nrecord_play\ncmd_b\n",
    );

    assert_eq!(termination, Termination::EndOfInput);
    assert_eq!(
        output(&shell),
        "*** Error: Replay depth limit of 16 exceeded\ncmd_b is executed\n"
    );
    assert_eq!(shell.session().replay_depth(), 0);
}

#[test]
fn test_exit_inside_replay_stops_loop() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");

    assert!(!shell.dispatch_line("record_start"));
    assert!(!shell.dispatch_line("cmd_a 1"));
    assert!(shell.dispatch_line("exit"));
    assert!(!shell.dispatch_line("record_stop"));

    assert!(shell.dispatch_line("record_play"));
    assert_eq!(*calls.borrow(), vec!["cmd_a 1", "cmd_a 1"]);
    assert_eq!(shell.session().replay_depth(), 0);
}

#[test]
fn test_interrupt_stops_replay_before_next_statement() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");
    let flag = shell.interrupt_flag();
    let raise = shell.interrupt_flag();
    shell.registry_mut().register(
        "slow",
        move |_: &mut Session, _: &Statement| -> Result<CommandResult> {
            raise.store(true, Ordering::SeqCst);
            Ok(CommandResult::None)
        },
    );

    shell.dispatch_line("record_start");
    shell.dispatch_line("cmd_a 1");
    shell.dispatch_line("slow");
    shell.dispatch_line("cmd_a 2");
    shell.dispatch_line("record_stop");
    // Raised during recording outside the loop; clear it before running.
    flag.store(false, Ordering::SeqCst);

    let termination = run_script(&mut shell, "record_play\ncmd_a 3\n");

    assert_eq!(termination, Termination::Interrupted);
    assert_eq!(*calls.borrow(), vec!["cmd_a 1", "cmd_a 2", "cmd_a 1"]);
    assert_eq!(shell.session().replay_depth(), 0);
    assert_eq!(output(&shell), "\n");
}
