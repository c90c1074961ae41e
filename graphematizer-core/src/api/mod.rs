//! Public API for graphematization
//!
//! Wraps the grammar behind a small processor type so callers hand in text
//! and get a token list back without touching parse internals.

mod config;
mod error;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use processor::Graphematizer;
