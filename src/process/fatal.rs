use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::panic::Location;
use std::process;

use crate::ansi;

/// The exit code used by [`fatal!`](crate::fatal) style reports when no other code is more
/// appropriate.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// The exit code used when an allocation, reallocation or capacity calculation fails.
pub const ALLOC_FAILURE_EXIT_CODE: i32 = 1;

/// An error which can't be recovered from. Similar to a panic, except that there is no unwinding:
/// invoking [`Fatal::fatal`] prints the error to stderr and exits the process immediately.
pub trait Fatal: Error {
    /// The code that the process exits with when this error is reported.
    fn exit_code(&self) -> i32 {
        DEFAULT_EXIT_CODE
    }

    /// Reports self, tagged with the location of the caller, and terminates the process.
    #[track_caller]
    fn fatal(&self) -> ! {
        fatal(self.exit_code(), false, format_args!("{}", self))
    }
}

/// A formatted fatal error report, in the form `file:line: fatal error: message`.
///
/// Reports are normally written by [`fatal`], this type exists separately so that the format can
/// be inspected without exiting.
pub struct FatalReport<'a> {
    pub location: &'a Location<'a>,
    pub colorized: bool,
    pub message: fmt::Arguments<'a>,
}

impl Display for FatalReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (file, line) = (self.location.file(), self.location.line());

        if self.colorized {
            write!(
                f,
                "{}{file}:{line}:{} {}fatal error{}: {}",
                ansi::GREY, ansi::RESET, ansi::RED, ansi::RESET, self.message,
            )
        } else {
            write!(f, "{file}:{line}: fatal error: {}", self.message)
        }
    }
}

/// Writes a fatal error report for the caller's location to stderr and exits the process with
/// `exit_code`. This function never returns and no destructors are run.
///
/// See [`fatal!`](crate::fatal) and [`fatalc!`](crate::fatalc) for the formatting macros.
#[track_caller]
pub fn fatal(exit_code: i32, colorized: bool, message: fmt::Arguments<'_>) -> ! {
    let report = FatalReport {
        location: Location::caller(),
        colorized,
        message,
    };

    // There is nowhere left to report a failed write to.
    let _ = writeln!(io::stderr().lock(), "{}", report);
    process::exit(exit_code)
}

/// Returns the most recent OS error of the calling thread, for use in messages such as
/// `fatal!(1, "could not open file: {}", last_os_error())`.
pub fn last_os_error() -> io::Error {
    io::Error::last_os_error()
}

/// Reports a fatal error at the invocation site and exits with the provided code.
///
/// # Examples
/// ```no_run
/// # use cx::fatal;
/// let path = "missing.txt";
/// fatal!(2, "could not open {}", path);
/// ```
#[macro_export]
macro_rules! fatal {
    ($code:expr, $($arg:tt)+) => {
        $crate::process::fatal($code, false, format_args!($($arg)+))
    };
}

/// The same as [`fatal!`], with the location in grey and the `fatal error` tag in red.
#[macro_export]
macro_rules! fatalc {
    ($code:expr, $($arg:tt)+) => {
        $crate::process::fatal($code, true, format_args!($($arg)+))
    };
}
