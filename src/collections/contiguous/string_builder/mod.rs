//! A module containing [`StringBuilder`], a growable byte buffer for assembling strings.
//!
//! [`StringBuilder`] is also re-exported under the parent module.

mod string_builder;

pub use string_builder::*;
