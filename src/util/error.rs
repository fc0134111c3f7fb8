use derive_more::{Display, Error};

use crate::process::{ALLOC_FAILURE_EXIT_CODE, Fatal};

#[derive(Debug, Display, Error)]
#[display("memory allocation failed ({size} bytes)")]
pub struct AllocError {
    pub size: usize,
}

impl Fatal for AllocError {
    fn exit_code(&self) -> i32 {
        ALLOC_FAILURE_EXIT_CODE
    }
}

#[derive(Debug, Display, Error)]
#[display("memory reallocation failed ({old_size} -> {new_size} bytes)")]
pub struct ReallocError {
    pub old_size: usize,
    pub new_size: usize,
}

impl Fatal for ReallocError {
    fn exit_code(&self) -> i32 {
        ALLOC_FAILURE_EXIT_CODE
    }
}

#[derive(Debug, Display, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

impl Fatal for CapacityOverflow {
    fn exit_code(&self) -> i32 {
        ALLOC_FAILURE_EXIT_CODE
    }
}
