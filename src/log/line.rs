use std::fmt::{self, Write};

use super::LogLevel;
use crate::ansi;
use crate::collections::contiguous::StringBuilder;
use crate::time::Timestamp;

/// Formats a complete log line, including the trailing newline.
///
/// # Examples
/// ```
/// # use cx::log::{format_line, LogLevel};
/// # use cx::time::Timestamp;
/// let stamp = Timestamp { year: 2024, month: 5, day: 1, hour: 9, minute: 30, second: 0 };
/// let line = format_line(stamp, LogLevel::Warn, false, format_args!("disk {}% full", 91));
/// assert_eq!(line.as_str(), Ok("2024-05-01 09:30:00 [WARN ] disk 91% full\n"));
/// ```
pub fn format_line(
    timestamp: Timestamp,
    level: LogLevel,
    colorized: bool,
    message: fmt::Arguments<'_>,
) -> StringBuilder {
    let mut line = StringBuilder::new();

    // A StringBuilder never fails to write, only a broken Display impl in message could.
    let _ = if colorized {
        writeln!(line, "{timestamp} [{}{}{}] {message}", level.color(), level.tag(), ansi::RESET)
    } else {
        writeln!(line, "{timestamp} [{}] {message}", level.tag())
    };

    line
}
