//! Token value objects and the append-only token list

use std::fmt;
use std::ops::Deref;

/// Marks whether a token closes a sentence-like or enumerable unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryFlag {
    /// Token continues the current unit
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    Normal,
    /// Token closes the current unit
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    End,
}

impl BoundaryFlag {
    /// One-character literal used in the line output format
    pub fn literal(self) -> char {
        match self {
            BoundaryFlag::Normal => 'n',
            BoundaryFlag::End => 'e',
        }
    }

    /// Returns true for `End`
    pub fn is_end(self) -> bool {
        self == BoundaryFlag::End
    }
}

impl fmt::Display for BoundaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// One classified unit of the segmented document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Boundary flag, `Normal` until a later rule closes the unit
    pub flag: BoundaryFlag,
    /// Token text
    pub text: String,
}

impl Token {
    /// Create a token with the default `Normal` flag
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            flag: BoundaryFlag::Normal,
            text: text.into(),
        }
    }

    /// Create a token already flagged as closing a unit
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            flag: BoundaryFlag::End,
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of tokens.
///
/// The only in-place mutation offered publicly is [`TokenList::flip_last_to_end`].
/// Rollback helpers used by the grammar's checkpoints stay crate-private.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Mark the most recent token as closing a unit; no-op when empty
    pub fn flip_last_to_end(&mut self) {
        if let Some(last) = self.tokens.last_mut() {
            last.flag = BoundaryFlag::End;
        }
    }

    /// Flag of the most recent token, if any
    pub fn last_flag(&self) -> Option<BoundaryFlag> {
        self.tokens.last().map(|token| token.flag)
    }

    /// Concatenated token texts, flags ignored
    pub fn joined_text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    /// Consume the list, yielding the tokens
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Drop tokens appended after `len` and restore the flag the last
    /// surviving token had at checkpoint time.
    pub(crate) fn rollback(&mut self, len: usize, last_flag: Option<BoundaryFlag>) {
        self.tokens.truncate(len);
        if let (Some(last), Some(flag)) = (self.tokens.last_mut(), last_flag) {
            last.flag = flag;
        }
    }
}

impl Deref for TokenList {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
