#![forbid(unsafe_code)]
#![doc = "Signing backends and commands behind the `ectime` binary."]

pub mod backend;
pub mod der;
pub mod digest;
pub mod list;
pub mod sign;
