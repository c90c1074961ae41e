//! Rule-based graphematization: splitting plain text into classified tokens
//!
//! A document is segmented by an ordered set of lexical rules (number
//! ranges, enumeration indices, numbers, punctuation, letter runs) combined
//! with backtracking ordered choice. Each resulting token carries a boundary
//! flag that says whether it closes a sentence-like or enumerable unit; the
//! flag is set retroactively, once a later token reveals the boundary.
//!
//! # Architecture
//!
//! - **Tables** (`tables`): static codepoint classes and the ordered
//!   punctuation table
//! - **Domain layer** (`domain`): token model, per-parse state with
//!   transactional checkpoints, the individual rules
//! - **Grammar** (`grammar`): the immutable rule set and the parse loop
//! - **API** (`api`): configuration and the `Graphematizer` processor
//!
//! # Example
//!
//! ```rust
//! use graphematizer_core::{BoundaryFlag, Graphematizer};
//!
//! let tokens = Graphematizer::new().graphematize("See 1. Pages 5-10!").unwrap();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["See", "1.", "Pages", "5", "-", "10", "!"]);
//! assert_eq!(tokens[0].flag, BoundaryFlag::End);
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod grammar;
pub mod tables;

pub use api::{Config, ConfigBuilder, Error as ApiError, Graphematizer};
pub use domain::{BoundaryFlag, Token, TokenList, TrailingDash};
pub use error::{ParseError, Result};
pub use grammar::{Alternative, Grammar};
