//! Graphematizer CLI library
//!
//! This library provides the command-line driver for the graphematizer:
//! decoding the input document, running the grammar once, and writing one
//! flagged token per line. It also scores the grammar against reference
//! corpora (`graphematizer-eval`).

pub mod commands;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
