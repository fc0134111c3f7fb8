//! Growable collection types.
//!
//! # Purpose
//! These types cover the two containers that nearly every small C program ends up writing by hand:
//! a dynamic array and a string builder. Both double their capacity when full, and both treat an
//! allocation failure as fatal rather than returning an error.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

pub mod contiguous;
