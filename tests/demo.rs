use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cx"))
        .args(args)
        .output()
        .expect("the demo binary should start")
}

#[test]
fn test_shifts_program_name() {
    let output = run_demo(&["first", "second"]);
    assert!(output.status.success(), "The demo should succeed when given an argument.");

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    let lines: Vec<_> = stdout.lines().collect();

    assert!(lines.contains(&"0: foo") && lines.contains(&"2: baz"));
    assert!(lines.contains(&"foo bar (7 bytes)"));
    assert!(lines.contains(&"a = 20, b = 10"));
    assert!(
        lines[lines.len() - 2].ends_with("cx"),
        "The first shifted argument should be the program name."
    );
    assert_eq!(lines[lines.len() - 1], "first", "The next argument should move to the front.");
}

#[test]
fn test_logs_to_stderr() {
    let output = run_demo(&["arg"]);
    let stderr = String::from_utf8(output.stderr).expect("stderr should be valid UTF-8");
    let lines: Vec<_> = stderr.lines().collect();

    assert!(lines[0].ends_with(" [INFO ] Some useful info.."));
    assert_eq!(lines[0].find(" ["), Some("YYYY-MM-DD HH:MM:SS".len()));
    assert!(
        lines[1].ends_with("\x1b[0;31mERROR\x1b[0m] Something went wrong Error: 420"),
        "Colorized lines should wrap the tag in ANSI codes."
    );
}

#[test]
fn test_fatal_without_arguments() {
    let output = run_demo(&[]);
    assert_eq!(output.status.code(), Some(1), "A fatal error should exit with the given code.");

    let stderr = String::from_utf8(output.stderr).expect("stderr should be valid UTF-8");
    let last = stderr.lines().last().expect("a fatal error should be reported");

    assert!(last.starts_with("\x1b[0;90msrc/main.rs:"), "The location should be in grey.");
    assert!(last.ends_with("\x1b[0;31mfatal error\x1b[0m: No argument provided."));
}
