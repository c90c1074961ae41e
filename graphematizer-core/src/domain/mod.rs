//! Domain layer: token model, parse state and the lexical rules

pub mod rules;
pub mod state;
pub mod token;

pub use rules::TrailingDash;
pub use state::ParseState;
pub use token::{BoundaryFlag, Token, TokenList};
