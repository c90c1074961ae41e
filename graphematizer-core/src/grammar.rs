//! The segmentation grammar
//!
//! A [`Grammar`] is an immutable value describing the ordered rule set. All
//! mutable state lives in a [`ParseState`] created per [`Grammar::parse`]
//! call, so one grammar can be shared and reused freely.
//!
//! At every position the parser first skips whitespace, then tries the
//! alternatives in [`Alternative::ORDER`] and commits to the first one that
//! matches. A failing alternative is rolled back completely before the next
//! is tried.

use crate::domain::rules::{self, TrailingDash};
use crate::domain::{ParseState, TokenList};
use crate::error::{ParseError, Result};
use crate::tables;

/// One alternative of the top-level ordered choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// `5-10`, `5 – 10`
    NumberRange,
    /// `1.`, `2)`
    EnumerationIndex,
    /// `42`, `3.14`, `1,000`
    BareNumber,
    /// Entries of the punctuation table
    Punctuation,
    /// Anything else up to whitespace or punctuation
    LetterBlock,
}

impl Alternative {
    /// Priority order of the alternatives
    pub const ORDER: [Alternative; 5] = [
        Alternative::NumberRange,
        Alternative::EnumerationIndex,
        Alternative::BareNumber,
        Alternative::Punctuation,
        Alternative::LetterBlock,
    ];
}

/// Immutable segmentation rule set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grammar {
    trailing_dash: TrailingDash,
}

impl Grammar {
    /// Grammar with the default trailing-dash policy ([`TrailingDash::Reject`])
    pub const fn new() -> Self {
        Self {
            trailing_dash: TrailingDash::Reject,
        }
    }

    /// Grammar with an explicit trailing-dash policy
    pub const fn with_trailing_dash(trailing_dash: TrailingDash) -> Self {
        Self { trailing_dash }
    }

    pub fn trailing_dash(&self) -> TrailingDash {
        self.trailing_dash
    }

    /// Segment a whole document.
    ///
    /// Either every codepoint is accounted for (skipped as whitespace or
    /// covered by a token) or the whole parse fails.
    pub fn parse(&self, input: &[char]) -> Result<TokenList> {
        let body = match input.split_first() {
            Some((&tables::BYTE_ORDER_MARK, rest)) => rest,
            _ => input,
        };

        let mut state = ParseState::new(body);
        loop {
            rules::skip_whitespace(&mut state);
            if state.is_at_end() {
                break;
            }
            if !self.step(&mut state) {
                log::debug!(
                    "no alternative matched at {} (furthest {})",
                    state.cursor(),
                    state.furthest()
                );
                return Err(ParseError::Unparseable {
                    position: state.furthest() + (input.len() - body.len()),
                });
            }
        }

        let mut tokens = state.into_tokens();
        tokens.flip_last_to_end();
        log::debug!(
            "segmented {} codepoints into {} tokens ({} closing)",
            input.len(),
            tokens.len(),
            tokens.iter().filter(|token| token.flag.is_end()).count()
        );
        Ok(tokens)
    }

    /// Try each alternative in priority order, committing to the first match
    fn step(&self, state: &mut ParseState<'_>) -> bool {
        Alternative::ORDER
            .iter()
            .any(|&alternative| state.attempt(|s| self.apply(alternative, s)))
    }

    fn apply(&self, alternative: Alternative, state: &mut ParseState<'_>) -> bool {
        match alternative {
            Alternative::NumberRange => rules::number_range(state, self.trailing_dash),
            Alternative::EnumerationIndex => rules::enumeration_index(state),
            Alternative::BareNumber => rules::bare_number(state, self.trailing_dash),
            Alternative::Punctuation => rules::punctuation(state),
            Alternative::LetterBlock => rules::letter_block(state),
        }
    }
}
