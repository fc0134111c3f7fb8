//! This crate is the small set of utilities that I keep rewriting at the top of every C project,
//! rewritten once more in Rust.
//!
//! # Purpose
//! Every one of my small C programs started with the same single-header library, copied from the
//! last project and tweaked slightly each time: a logger, a dynamic array, a string builder, a
//! fatal error macro and an argument shifter. This crate settles on one version of each.
//!
//! # Contents
//! - [`log`]: Leveled, timestamped and optionally colorized log lines, through [`log!`],
//!   [`logc!`], [`logfile!`] and [`log_tee!`].
//! - [`collections::contiguous`]: [`DynArray`](collections::contiguous::DynArray), an append-only
//!   array and [`StringBuilder`](collections::contiguous::StringBuilder), a growable byte buffer.
//! - [`process`]: Fatal error reporting through [`fatal!`] and [`fatalc!`], plus argument
//!   shifting.
//! - [`swap!`], for exchanging two places through a temporary.
//!
//! # Error Handling
//! There are only two kinds of errors here. Benign ones, like running out of arguments to shift,
//! are returned to the caller. Everything else is fatal: allocation failures, capacity overflows
//! and invalid log levels are reported to stderr along with a source location and the process
//! exits immediately, in the same way that a C program would call `exit(1)` when `malloc` returns
//! null. As a result, `append` never returns an error.
//!
//! When this crate does return errors, they are small structs that implement
//! [`Error`](std::error::Error) (derived with `derive_more`), and the fatal ones also implement
//! [`Fatal`](process::Fatal).
//!
//! # Features
//! The components can be compiled in or out through Cargo features, the same way the C header
//! used `#define` switches: `dyn-array`, `string-builder` and `log` (which needs `libc` for
//! local time). All are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod ansi;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "log")]
pub mod log;
pub mod mem;
pub mod process;
#[cfg(feature = "log")]
pub mod time;

pub(crate) mod util;
