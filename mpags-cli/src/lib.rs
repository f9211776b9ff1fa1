//! MPAGS cipher CLI library
//!
//! This library provides the command-line interface for encrypting and
//! decrypting text with the MPAGS classical ciphers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
