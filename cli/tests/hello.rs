use std::process::{Command, Output};

fn hello(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello"))
        .args(args)
        .output()
        .expect("failed to spawn hello")
}

fn assert_greeted(output: &Output) {
    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn prints_greeting_without_arguments() {
    assert_greeted(&hello(&[]));
}

#[test]
fn positional_arguments_are_ignored() {
    assert_greeted(&hello(&["world", "42"]));
}

#[test]
fn flag_arguments_are_ignored() {
    assert_greeted(&hello(&["--help"]));
    assert_greeted(&hello(&["--version"]));
    assert_greeted(&hello(&["-q", "--verbose", "--", "x"]));
}

#[test]
fn environment_does_not_enable_logging() {
    let output = Command::new(env!("CARGO_BIN_EXE_hello"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to spawn hello");
    assert_greeted(&output);
}

#[test]
fn output_is_byte_exact() {
    let output = hello(&[]);
    assert_eq!(output.stdout, b"Hello, World!\n");
}
