//! Lexical rules of the segmentation grammar
//!
//! Each rule is a function over [`ParseState`] that returns whether it
//! matched. Rules may leave partial effects behind when they fail; callers
//! wrap them in [`ParseState::attempt`] to get backtracking.

use super::state::ParseState;
use crate::tables::{self, BoundaryEffect};

/// What happens to an en dash or hyphen that directly follows a number or a
/// number range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrailingDash {
    /// Zero-width negative lookahead: a number followed by a trailing dash
    /// does not match, and a lower-priority alternative takes over.
    #[default]
    Reject,
    /// The dash is consumed and dropped.
    Discard,
}

impl TrailingDash {
    fn apply(self, state: &mut ParseState<'_>) -> bool {
        let dash_follows = state.peek().is_some_and(tables::is_trailing_dash);
        match self {
            TrailingDash::Reject => !dash_follows,
            TrailingDash::Discard => {
                if dash_follows {
                    state.skip(1);
                }
                true
            }
        }
    }
}

/// Skip a run of whitespace. Never emits a token.
pub fn skip_whitespace(state: &mut ParseState<'_>) -> usize {
    let mut skipped = 0;
    while state.peek().is_some_and(tables::is_whitespace) {
        state.skip(1);
        skipped += 1;
    }
    skipped
}

/// Accumulate `digits [sep digits]` without emitting a token
fn scan_number(state: &mut ParseState<'_>) -> bool {
    if state.take_while(tables::is_digit) == 0 {
        return false;
    }
    state.attempt(|s| {
        s.take_if(tables::is_decimal_separator) && s.take_while(tables::is_digit) > 0
    });
    true
}

/// `number [space] dash number`, emitted as three tokens
pub fn number_range(state: &mut ParseState<'_>, trailing: TrailingDash) -> bool {
    if !scan_number(state) {
        return false;
    }
    state.flush_token();

    if state.peek() == Some(' ') {
        state.skip(1);
    }
    if !state.take_if(tables::is_range_dash) {
        return false;
    }
    state.flush_token();

    if !scan_number(state) {
        return false;
    }
    state.flush_token();

    trailing.apply(state)
}

/// A number immediately followed by `.` or `)`; closes whatever came before
pub fn enumeration_index(state: &mut ParseState<'_>) -> bool {
    if !(scan_number(state) && state.take_if(tables::is_index_closer)) {
        return false;
    }
    state.flip_last_to_end();
    state.flush_token();
    true
}

/// Digits with an optional decimal or grouping part
pub fn bare_number(state: &mut ParseState<'_>, trailing: TrailingDash) -> bool {
    if !scan_number(state) {
        return false;
    }
    state.flush_token();
    trailing.apply(state)
}

/// First mark of the punctuation table found at the cursor
pub fn punctuation(state: &mut ParseState<'_>) -> bool {
    let Some(mark) = tables::punctuation_at(state.input(), state.cursor()) else {
        return false;
    };

    if mark.effect == BoundaryEffect::CloseBefore {
        state.flip_last_to_end();
    }
    state.take(mark.len());
    state.flush_token();
    if mark.effect == BoundaryEffect::CloseAfter {
        state.flip_last_to_end();
    }
    true
}

/// Maximal run of codepoints that are neither whitespace nor the start of a
/// punctuation mark
pub fn letter_block(state: &mut ParseState<'_>) -> bool {
    let mut taken = 0;
    while let Some(ch) = state.peek() {
        if tables::is_whitespace(ch) || state.lookahead(punctuation) {
            break;
        }
        state.take(1);
        taken += 1;
    }
    if taken == 0 {
        return false;
    }
    state.flush_token();
    true
}
