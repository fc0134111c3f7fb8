//! Leveled, timestamped logging to any [`Write`](std::io::Write) destination.
//!
//! Every log line has the form `YYYY-MM-DD HH:MM:SS [LEVEL] message`, where the level tag is
//! padded to five characters and optionally colorized. Lines are formatted in full before being
//! written, so each one reaches the destination through a single write.
//!
//! The [`log!`](crate::log), [`logc!`](crate::logc), [`logfile!`](crate::logfile) and
//! [`log_tee!`](crate::log_tee) macros cover the common cases, [`Logger`] bundles a destination
//! with its colorization setting.
#![cfg(unix)]

mod level;
mod line;
mod logger;

pub use level::*;
pub use line::*;
pub use logger::*;
