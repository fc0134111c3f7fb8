use derive_more::{Display, Error};

use crate::process::Fatal;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to read the local time")]
pub struct ClockError;

impl Fatal for ClockError {}
