//! CLI command implementations

pub mod generate_config;
pub mod process;

pub use process::{CipherArg, ProcessArgs};
