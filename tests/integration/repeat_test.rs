//! Integration tests for the repeat command and its shortcuts.

use super::common::{count_calls, output, run_script, shell};
use pretty_assertions::assert_eq;
use shellrec::commands::Statement;

#[test]
fn test_tracker_holds_last_non_repeat_statement() {
    let mut shell = shell();
    run_script(&mut shell, "cmd_a 1\ncmd_b 2\nrepeat\n");

    assert_eq!(
        shell.session().repeat_tracker().get(),
        Some(&Statement::parse("cmd_b 2"))
    );
}

#[test]
fn test_repeat_with_nothing_tracked_is_noop() {
    let mut shell = shell();
    run_script(&mut shell, "repeat\n.\n");

    assert_eq!(output(&shell), "");
    assert!(shell.session().repeat_tracker().get().is_none());
}

#[test]
fn test_repeat_reruns_last_statement_verbatim() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");
    run_script(&mut shell, "cmd_a x\nrepeat\nrepeat\n");

    assert_eq!(*calls.borrow(), vec!["cmd_a x", "cmd_a x", "cmd_a x"]);
}

#[test]
fn test_dot_shortcuts_expand_to_repeat() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_b");
    run_script(&mut shell, "cmd_b  spaced   args\n.\ndot\n");

    assert_eq!(calls.borrow().len(), 3);
    assert!(calls.borrow().iter().all(|l| l == "cmd_b  spaced   args"));
}

#[test]
fn test_blank_lines_leave_tracker_unchanged() {
    let mut shell = shell();
    let calls = count_calls(&mut shell, "cmd_a");
    run_script(&mut shell, "cmd_a 7\n\n   \n# note\nrepeat\n");

    assert_eq!(*calls.borrow(), vec!["cmd_a 7", "cmd_a 7"]);
    assert_eq!(
        shell.session().repeat_tracker().get(),
        Some(&Statement::parse("cmd_a 7"))
    );
}

#[test]
fn test_unknown_command_is_repeatable() {
    let mut shell = shell();
    run_script(&mut shell, "frob 1\n.\n");

    assert_eq!(
        output(&shell),
        "*** Unknown syntax: frob 1\n*** Unknown syntax: frob 1\n"
    );
}
