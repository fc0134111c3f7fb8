use std::env;
use std::io;
use std::process::{Command, Output};

use cx::collections::contiguous::RawArray;
use cx::log::log_raw;
use cx::process::{ALLOC_FAILURE_EXIT_CODE, DEFAULT_EXIT_CODE};

/// When set, the named test triggers its fatal error instead of spawning itself.
const CASE_VAR: &str = "CX_FATAL_CASE";

/// Runs this test executable again, limited to `test_name`, with the case switch set.
fn rerun(test_name: &str) -> Output {
    Command::new(env::current_exe().expect("the test executable should have a path"))
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CASE_VAR, test_name)
        .output()
        .expect("the test executable should start")
}

fn is_child(test_name: &str) -> bool {
    env::var(CASE_VAR).is_ok_and(|case| case == test_name)
}

fn fatal_report(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .find(|line| line.contains("fatal error: "))
        .expect("a fatal error should be reported")
        .to_owned()
}

#[test]
fn test_invalid_log_level_is_fatal() {
    if is_child("test_invalid_log_level_is_fatal") {
        let _ = log_raw(&mut io::stderr(), 9, false, format_args!("never written"));
        unreachable!("an invalid level should exit the process");
    }

    let output = rerun("test_invalid_log_level_is_fatal");
    assert_eq!(output.status.code(), Some(DEFAULT_EXIT_CODE));

    let report = fatal_report(&output);
    assert!(report.starts_with("tests/fatal.rs:"), "The caller should be reported: {report}");
    assert!(report.ends_with("fatal error: not a valid log level: 9"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("never written"));
}

#[test]
fn test_capacity_overflow_is_fatal() {
    if is_child("test_capacity_overflow_is_fatal") {
        let _arr = RawArray::<u64>::with_cap(usize::MAX);
        unreachable!("an oversized layout should exit the process");
    }

    let output = rerun("test_capacity_overflow_is_fatal");
    assert_eq!(output.status.code(), Some(ALLOC_FAILURE_EXIT_CODE));

    let report = fatal_report(&output);
    assert!(
        report.starts_with("tests/fatal.rs:"),
        "The location should be the caller of with_cap, not the allocator: {report}"
    );
    assert!(report.ends_with("fatal error: capacity overflow"));
}

#[test]
fn test_allocation_failure_is_fatal() {
    if is_child("test_allocation_failure_is_fatal") {
        let _arr = RawArray::<u8>::with_cap(isize::MAX as usize);
        unreachable!("an impossible allocation should exit the process");
    }

    let output = rerun("test_allocation_failure_is_fatal");
    assert_eq!(output.status.code(), Some(ALLOC_FAILURE_EXIT_CODE));

    let report = fatal_report(&output);
    assert!(report.starts_with("tests/fatal.rs:"), "The caller should be reported: {report}");
    assert!(report.ends_with(&format!(
        "fatal error: memory allocation failed ({} bytes)",
        isize::MAX
    )));
}
