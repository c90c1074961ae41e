//! Graphematizer processor implementation

use crate::api::{Config, Result};
use crate::domain::TokenList;
use crate::grammar::Grammar;

/// Segments documents into boundary-flagged tokens
#[derive(Debug, Clone, Default)]
pub struct Graphematizer {
    grammar: Grammar,
    config: Config,
}

impl Graphematizer {
    /// Create a processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Self {
        let grammar = Grammar::with_trailing_dash(config.trailing_dash);
        Self { grammar, config }
    }

    /// Segment a whole document
    pub fn graphematize(&self, text: &str) -> Result<TokenList> {
        let codepoints: Vec<char> = text.chars().collect();
        self.graphematize_codepoints(&codepoints)
    }

    /// Segment an already decoded codepoint sequence
    pub fn graphematize_codepoints(&self, codepoints: &[char]) -> Result<TokenList> {
        Ok(self.grammar.parse(codepoints)?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The grammar this processor runs
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}
