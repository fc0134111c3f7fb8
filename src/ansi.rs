//! ANSI SGR escape sequences used to colorize terminal output.
//!
//! Each constant switches the foreground color, [`RESET`] restores the terminal default. The
//! sequences are written verbatim, nothing here checks whether the destination is a terminal.

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[0;31m";
pub const RED_BOLD: &str = "\x1b[1;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const GREEN_BOLD: &str = "\x1b[1;32m";
pub const GREY: &str = "\x1b[0;90m";
pub const GREY_BOLD: &str = "\x1b[1;90m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const YELLOW_BOLD: &str = "\x1b[1;33m";
