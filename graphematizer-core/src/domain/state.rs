//! Mutable state of a single parse
//!
//! A `ParseState` owns the cursor, the accumulator and the growing token
//! list for exactly one document. Every grammar alternative runs inside
//! [`ParseState::attempt`], which snapshots all of that state and restores it
//! when the alternative fails, so a failed alternative leaves no trace.

use super::token::{BoundaryFlag, Token, TokenList};

/// Snapshot of everything an alternative may mutate
#[derive(Debug, Clone, PartialEq, Eq)]
struct Checkpoint {
    cursor: usize,
    accumulator: String,
    tokens_len: usize,
    last_flag: Option<BoundaryFlag>,
}

/// Parse state for one document
#[derive(Debug)]
pub struct ParseState<'src> {
    input: &'src [char],
    cursor: usize,
    furthest: usize,
    accumulator: String,
    tokens: TokenList,
}

impl<'src> ParseState<'src> {
    /// Create a state positioned at the start of `input`
    pub fn new(input: &'src [char]) -> Self {
        Self {
            input,
            cursor: 0,
            furthest: 0,
            accumulator: String::new(),
            tokens: TokenList::new(),
        }
    }

    /// Current codepoint offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Furthest codepoint offset ever reached, including by failed attempts
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// Codepoint under the cursor
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    pub fn input(&self) -> &'src [char] {
        self.input
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Text accumulated for the token being assembled
    pub fn accumulator(&self) -> &str {
        &self.accumulator
    }

    /// Move the cursor forward by `count` codepoints without collecting them
    pub fn skip(&mut self, count: usize) {
        self.cursor = (self.cursor + count).min(self.input.len());
        self.furthest = self.furthest.max(self.cursor);
    }

    /// Consume the codepoint under the cursor into the accumulator if it
    /// satisfies `pred`
    pub fn take_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.accumulator.push(ch);
                self.skip(1);
                true
            }
            _ => false,
        }
    }

    /// Consume the longest run (possibly empty) satisfying `pred` into the
    /// accumulator, returning the number of codepoints taken
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut taken = 0;
        while self.take_if(&pred) {
            taken += 1;
        }
        taken
    }

    /// Consume `count` codepoints into the accumulator
    pub fn take(&mut self, count: usize) {
        let end = (self.cursor + count).min(self.input.len());
        self.accumulator.extend(&self.input[self.cursor..end]);
        self.skip(end - self.cursor);
    }

    /// Move the accumulated text into a new `Normal` token and reset the
    /// accumulator
    pub fn flush_token(&mut self) {
        let text = std::mem::take(&mut self.accumulator);
        log::trace!("token {:?} ending at {}", text, self.cursor);
        self.tokens.push(Token::new(text));
    }

    /// Flag the most recent token as closing a unit
    pub fn flip_last_to_end(&mut self) {
        self.tokens.flip_last_to_end();
    }

    /// Run `alternative`; if it reports failure, undo everything it did.
    pub fn attempt(&mut self, alternative: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        let matched = alternative(self);
        if !matched {
            self.restore(checkpoint);
        }
        matched
    }

    /// Run `probe` and undo everything it did, reporting whether it matched.
    /// Used for zero-width lookahead.
    ///
    /// The probe starts from an empty accumulator; the text collected so far
    /// is put back afterwards.
    pub fn lookahead(&mut self, probe: impl FnOnce(&mut Self) -> bool) -> bool {
        let pending = std::mem::take(&mut self.accumulator);
        let checkpoint = self.checkpoint();
        let matched = probe(self);
        self.restore(checkpoint);
        self.accumulator = pending;
        matched
    }

    /// Finish the parse, yielding the token list
    pub fn into_tokens(self) -> TokenList {
        self.tokens
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor,
            accumulator: self.accumulator.clone(),
            tokens_len: self.tokens.len(),
            last_flag: self.tokens.last_flag(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.cursor;
        self.accumulator = checkpoint.accumulator;
        self.tokens.rollback(checkpoint.tokens_len, checkpoint.last_flag);
    }
}
