//! Process-level utilities: fatal error reporting, which terminates the process, and consumption of
//! the process' arguments.
//!
//! # Fatal Errors
//! Errors in this crate are either benign, in which case they are returned to the caller, or fatal.
//! A fatal error is reported to stderr along with the source location that reported it and the
//! process exits straight away, without unwinding. Allocation failures are always fatal, so none of
//! the collections in this crate return allocation errors.

mod args;
mod fatal;
mod tests;

pub use args::*;
pub use fatal::*;
