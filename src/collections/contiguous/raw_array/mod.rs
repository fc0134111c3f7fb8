//! A module containing [`RawArray`], the uninitialized heap storage shared by the growable
//! collections.
//!
//! [`RawArray`] is also re-exported under the parent module.

mod raw_array;

pub use raw_array::*;
