#![cfg(test)]

use std::panic::Location;

use super::*;
use crate::ansi;

#[test]
fn test_fatal_report_format() {
    let location = Location::caller();
    let report = FatalReport {
        location,
        colorized: false,
        message: format_args!("could not open {}", "foo.txt"),
    }
    .to_string();

    assert_eq!(
        report,
        format!("{}:{}: fatal error: could not open foo.txt", location.file(), location.line()),
        "Plain reports should contain the location, tag and message."
    );

    let report = FatalReport {
        location,
        colorized: true,
        message: format_args!("No argument provided."),
    }
    .to_string();

    assert_eq!(
        report,
        format!(
            "{}{}:{}:{} {}fatal error{}: No argument provided.",
            ansi::GREY, location.file(), location.line(), ansi::RESET, ansi::RED, ansi::RESET,
        ),
        "Colorized reports should wrap the location in grey and the tag in red."
    );
}

#[test]
fn test_shift_args() {
    let argv = ["prog", "a", "b"];
    let mut args = &argv[..];

    assert_eq!(shift_args(&mut args), Some(&"prog"));
    assert_eq!(args, ["a", "b"], "Remaining arguments should move down by one.");
    assert_eq!(args.len(), 2);

    let argv = ["prog"];
    let mut args = &argv[..];
    assert_eq!(shift_args(&mut args), None, "The last argument should never be shifted.");
    assert_eq!(args, ["prog"], "A failed shift shouldn't modify the arguments.");

    let mut args: &[&str] = &[];
    assert_eq!(shift_args(&mut args), None, "Shifting nothing should return None.");
}

#[cfg(feature = "dyn-array")]
#[test]
fn test_owned_args() {
    let mut args: Args = ["prog", "a", "b"].into_iter().map(String::from).collect();
    assert_eq!(args.count(), 3);

    assert_eq!(args.shift().as_deref(), Some("prog"));
    assert_eq!(args.count(), 2);
    assert_eq!(args.as_slice(), ["a", "b"]);

    assert_eq!(args.shift().as_deref(), Some("a"));
    assert_eq!(args.shift(), None, "The final argument should remain in place.");
    assert_eq!(args.as_slice(), ["b"]);

    let mut args = Args::default();
    assert_eq!(args.count(), 0);
    assert_eq!(args.shift(), None);
}

#[test]
fn test_last_os_error() {
    // Opening a path that can't exist sets errno for this thread.
    let result = std::fs::File::open("/this/path/does/not/exist/cx");
    assert!(result.is_err());
    assert!(
        last_os_error().raw_os_error().is_some(),
        "The last OS error should carry a raw error code."
    );
}
