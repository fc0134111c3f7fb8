use std::fmt;
use std::io::{self, Stderr, Write};

use super::{LogLevel, format_line};
use crate::time::Timestamp;
use crate::util::result::ResultExtension;

/// Writes a log line stamped with the current local time to `dest`, in a single write.
///
/// # Errors
/// Returns any error produced while writing to `dest`.
///
/// # Examples
/// ```
/// # use cx::log::{log_to, LogLevel};
/// let mut out: Vec<u8> = Vec::new();
/// log_to(&mut out, LogLevel::Info, false, format_args!("started")).unwrap();
/// assert!(out.ends_with(b" [INFO ] started\n"));
/// ```
pub fn log_to<W: Write + ?Sized>(
    dest: &mut W,
    level: LogLevel,
    colorized: bool,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    let line = format_line(Timestamp::now(), level, colorized, message);
    dest.write_all(line.as_bytes())
}

/// Writes the same log line to two destinations, each colorized independently. Both lines carry
/// the same timestamp.
///
/// # Errors
/// Both destinations are always written to. If either write fails, the first error is returned.
pub fn log_tee<A: Write + ?Sized, B: Write + ?Sized>(
    first: &mut A,
    first_colorized: bool,
    second: &mut B,
    second_colorized: bool,
    level: LogLevel,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    let timestamp = Timestamp::now();

    let first_result =
        first.write_all(format_line(timestamp, level, first_colorized, message).as_bytes());
    let second_result =
        second.write_all(format_line(timestamp, level, second_colorized, message).as_bytes());

    first_result.and(second_result)
}

/// Writes a log line for a level that hasn't been validated yet, such as one read from a C-style
/// integer.
///
/// # Errors
/// Returns any error produced while writing to `dest`.
///
/// # Fatal Errors
/// Exits the process if `level` isn't a valid [`LogLevel`].
#[track_caller]
pub fn log_raw<W: Write + ?Sized>(
    dest: &mut W,
    level: u8,
    colorized: bool,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    let level = LogLevel::try_from(level).or_fatal();
    log_to(dest, level, colorized, message)
}

/// A log destination paired with whether lines written to it are colorized.
///
/// # Examples
/// ```
/// # use cx::log::Logger;
/// let mut logger = Logger::new(Vec::<u8>::new());
/// logger.warn(format_args!("{} retries left", 2)).unwrap();
/// assert!(logger.get_ref().ends_with(b"[WARN ] 2 retries left\n"));
/// ```
#[derive(Debug)]
pub struct Logger<W: Write> {
    dest: W,
    colorized: bool,
}

impl<W: Write> Logger<W> {
    /// Creates a Logger that writes plain lines to `dest`.
    pub const fn new(dest: W) -> Logger<W> {
        Logger {
            dest,
            colorized: false,
        }
    }

    /// Sets whether the level tags of written lines are colorized.
    pub fn colorized(mut self, colorized: bool) -> Logger<W> {
        self.colorized = colorized;
        self
    }

    /// Returns true if the level tags of written lines are colorized.
    pub const fn is_colorized(&self) -> bool {
        self.colorized
    }

    /// Returns a reference to the destination.
    pub const fn get_ref(&self) -> &W {
        &self.dest
    }

    /// Consumes the Logger, returning the destination.
    pub fn into_inner(self) -> W {
        self.dest
    }

    /// Writes a log line at the provided level.
    ///
    /// # Errors
    /// Returns any error produced while writing to the destination.
    pub fn log(&mut self, level: LogLevel, message: fmt::Arguments<'_>) -> io::Result<()> {
        log_to(&mut self.dest, level, self.colorized, message)
    }

    /// Writes a log line at [`LogLevel::Info`].
    ///
    /// # Errors
    /// Returns any error produced while writing to the destination.
    pub fn info(&mut self, message: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Info, message)
    }

    /// Writes a log line at [`LogLevel::Warn`].
    ///
    /// # Errors
    /// Returns any error produced while writing to the destination.
    pub fn warn(&mut self, message: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Warn, message)
    }

    /// Writes a log line at [`LogLevel::Error`].
    ///
    /// # Errors
    /// Returns any error produced while writing to the destination.
    pub fn error(&mut self, message: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(LogLevel::Error, message)
    }
}

impl Logger<Stderr> {
    /// Creates a Logger for stderr, the default log destination.
    pub fn stderr() -> Logger<Stderr> {
        Logger::new(io::stderr())
    }
}

/// Logs a plain line to stderr. Write errors are ignored.
///
/// # Examples
/// ```
/// # use cx::{log, log::LogLevel};
/// log!(LogLevel::Info, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let _ = $crate::log::log_to(
            &mut ::std::io::stderr(), $level, false, format_args!($($arg)+)
        );
    }};
}

/// Logs a line with a colorized level tag to stderr. Write errors are ignored.
#[macro_export]
macro_rules! logc {
    ($level:expr, $($arg:tt)+) => {{
        let _ = $crate::log::log_to(
            &mut ::std::io::stderr(), $level, true, format_args!($($arg)+)
        );
    }};
}

/// Logs a plain line to the provided destination, which is usually an open file. Write errors are
/// ignored.
///
/// # Examples
/// ```
/// # use cx::{logfile, log::LogLevel};
/// let mut out: Vec<u8> = Vec::new();
/// logfile!(out, LogLevel::Warn, "the file name is {}", "test.log");
/// assert!(out.ends_with(b"[WARN ] the file name is test.log\n"));
/// ```
#[macro_export]
macro_rules! logfile {
    ($dest:expr, $level:expr, $($arg:tt)+) => {{
        let _ = $crate::log::log_to(&mut $dest, $level, false, format_args!($($arg)+));
    }};
}

/// Logs a colorized line to stderr and a plain line to the provided destination. Write errors are
/// ignored.
#[macro_export]
macro_rules! log_tee {
    ($dest:expr, $level:expr, $($arg:tt)+) => {{
        let _ = $crate::log::log_tee(
            &mut ::std::io::stderr(), true, &mut $dest, false, $level, format_args!($($arg)+)
        );
    }};
}
