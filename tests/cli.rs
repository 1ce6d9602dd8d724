use std::{
    io::Write,
    process::{Command, Stdio},
};

const BIN: &str = env!("CARGO_BIN_EXE_fcalc");

/// Feeds `input` to an interactive session and returns everything it printed
/// to standard output.
fn run_session(input: &str) -> String {
    let mut child = Command::new(BIN).stdin(Stdio::piped())
                                     .stdout(Stdio::piped())
                                     .stderr(Stdio::piped())
                                     .env_remove("RUST_LOG")
                                     .spawn()
                                     .expect("failed to start fcalc");

    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_bytes())
         .expect("failed to write the session input");

    let output = child.wait_with_output().expect("failed to wait for fcalc");

    assert!(output.status.success(),
            "session exited with {}",
            output.status);

    String::from_utf8(output.stdout).expect("session output is not UTF-8")
}

#[test]
fn session_evaluates_one_formula_per_line() {
    let output = run_session("2 + 3 * 4\n8 - 3 - 2\nbye\n");

    assert_eq!(output, "> 14\n> 3\n> BYE\n");
}

#[test]
fn diagnostics_share_the_output_stream_and_the_session_continues() {
    let output = run_session("1 +\n2 + 2\nbye\n");

    assert_eq!(output, "> An operator is missing an operand.\n> 4\n> BYE\n");
}

#[test]
fn end_of_input_ends_the_session_without_a_farewell() {
    let output = run_session("1 + 1\n");

    assert_eq!(output, "> 2\n> ");
}

#[test]
fn quit_word_must_be_the_whole_line() {
    let output = run_session("bye \nbye\n");

    assert_eq!(output, "> Unexpected token: bye.\n> BYE\n");
}

#[test]
fn results_use_plain_float_formatting() {
    let output = run_session("10 / 4\n1 / 0\n0 / 0\nbye\n");

    assert_eq!(output, "> 2.5\n> inf\n> NaN\n> BYE\n");
}

#[test]
fn eval_flag_prints_the_result_and_exits() {
    let output = Command::new(BIN).args(["--eval", "( 2 + 3 ) * 4"])
                                  .env_remove("RUST_LOG")
                                  .output()
                                  .expect("failed to run fcalc");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"20\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn eval_flag_reports_failures_on_stderr() {
    let output = Command::new(BIN).args(["--eval", "1 +"])
                                  .env_remove("RUST_LOG")
                                  .output()
                                  .expect("failed to run fcalc");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
