//! Wall-clock time, as used to stamp log lines.
//!
//! Local time is read through `libc`, because converting to the local timezone is something the
//! standard library doesn't offer.
#![cfg(unix)]

mod error;
mod timestamp;

pub use error::*;
pub use timestamp::*;
