//! Contiguous collection types. [`DynArray`] and [`StringBuilder`] grow by doubling, on top of the
//! uninitialized storage provided by [`RawArray`].
#![warn(missing_docs)]

pub mod raw_array;
#[cfg(feature = "dyn-array")]
pub mod dyn_array;
#[cfg(feature = "string-builder")]
pub mod string_builder;

#[doc(inline)]
pub use raw_array::RawArray;
#[cfg(feature = "dyn-array")]
#[doc(inline)]
pub use dyn_array::DynArray;
#[cfg(feature = "string-builder")]
#[doc(inline)]
pub use string_builder::StringBuilder;
