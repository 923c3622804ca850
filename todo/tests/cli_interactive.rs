//! CLI tests for the interactive menu (no command given).
//!
//! Pipes answers into stdin and checks the transcript and saved file.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use todo::exit_codes;
use todo::test_support::{TodoDir, todo};

fn run_with_input(dir: &TodoDir, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_todo"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn todo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait todo")
}

#[test]
fn interactive_add_check_list_quit() {
    let dir = TodoDir::new().expect("dir");

    let output = run_with_input(&dir, "1\nBuy milk\n2%\n4\n0\n7\n9\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let transcript = String::from_utf8(output.stdout).expect("utf8");
    assert!(transcript.starts_with("\nTodo List Menu:\n1. Add Todo\n"));
    assert!(transcript.contains("Todo added successfully."));
    assert!(transcript.contains("Todo checked successfully."));
    assert!(transcript.contains("\nTodo List:\n0. [X] Buy milk - 2%\n"));
    assert_eq!(dir.read_todos(), vec![todo("Buy milk", "2%", true)]);
}

#[test]
fn interactive_accepts_non_utf8_title() {
    let dir = TodoDir::new().expect("dir");

    let mut child = Command::new(env!("CARGO_BIN_EXE_todo"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn todo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"1\ncaf\xe9\nbody\n9\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait todo");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(dir.read_todos(), vec![todo("caf\u{FFFD}", "body", false)]);
}

#[test]
fn interactive_ends_cleanly_on_eof() {
    let dir = TodoDir::new().expect("dir");
    dir.write_todos(&[todo("keep", "me", false)]).expect("seed");

    let output = run_with_input(&dir, "42\n");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let transcript = String::from_utf8(output.stdout).expect("utf8");
    assert!(transcript.contains("Invalid choice. Please try again."));
    assert_eq!(dir.read_todos(), vec![todo("keep", "me", false)]);
}
