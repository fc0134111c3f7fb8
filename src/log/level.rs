use derive_more::{Display, Error, IsVariant};

use crate::ansi;
use crate::process::Fatal;

/// The severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
#[repr(u8)]
pub enum LogLevel {
    /// Routine progress, tagged `INFO` in green.
    Info = 0,
    /// Something unexpected that the program can carry on from, tagged `WARN` in yellow.
    Warn = 1,
    /// A failure, tagged `ERROR` in red.
    Error = 2,
}

impl LogLevel {
    /// Returns the level's tag, padded with trailing spaces to exactly five characters.
    ///
    /// # Examples
    /// ```
    /// # use cx::log::LogLevel;
    /// assert_eq!(LogLevel::Warn.tag(), "WARN ");
    /// assert_eq!(LogLevel::Error.tag(), "ERROR");
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
        }
    }

    /// Returns the ANSI color that the level's tag is wrapped in when colorized.
    pub const fn color(self) -> &'static str {
        match self {
            LogLevel::Info => ansi::GREEN,
            LogLevel::Warn => ansi::YELLOW,
            LogLevel::Error => ansi::RED,
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = InvalidLevelError;

    fn try_from(value: u8) -> Result<LogLevel, InvalidLevelError> {
        match value {
            0 => Ok(LogLevel::Info),
            1 => Ok(LogLevel::Warn),
            2 => Ok(LogLevel::Error),
            other => Err(InvalidLevelError(other)),
        }
    }
}

/// The error produced when converting an integer that doesn't name a [`LogLevel`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("not a valid log level: {_0}")]
pub struct InvalidLevelError(#[error(not(source))] pub u8);

impl Fatal for InvalidLevelError {}
