pub mod alloc;
#[cfg(feature = "collections")]
pub mod error;
pub mod panic;
pub mod result;
