//! Core error types (deterministic only)

use thiserror::Error;

/// Grammar errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The rule set could not account for the document through to its end.
    ///
    /// `position` is the furthest codepoint offset any rule reached before
    /// the whole parse gave up. It is a diagnostic only.
    #[error("unable to segment input (furthest position reached: {position})")]
    Unparseable {
        /// Furthest codepoint offset reached
        position: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ParseError>;
