//! Ordered punctuation table
//!
//! Order matters: a mark that is a prefix of another mark (`.` of `...`,
//! `/` of `//`) must come after it, otherwise the shorter mark would always
//! win.

/// How matching a mark affects the boundary flag of the token list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryEffect {
    /// Emit the mark only
    Plain,
    /// Emit the mark, then flag it as closing the unit
    CloseAfter,
    /// Flag the previous token as closing the unit, then emit the mark
    CloseBefore,
}

/// A literal punctuation mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Literal text of the mark
    pub text: &'static str,
    /// Effect on boundary flags when the mark matches
    pub effect: BoundaryEffect,
}

impl Mark {
    const fn new(text: &'static str, effect: BoundaryEffect) -> Self {
        Self { text, effect }
    }

    /// Number of codepoints the mark spans
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the mark occurs at `pos` in `input`
    pub fn matches_at(&self, input: &[char], pos: usize) -> bool {
        let mut at = pos;
        for expected in self.text.chars() {
            match input.get(at) {
                Some(&ch) if ch == expected => at += 1,
                _ => return false,
            }
        }
        true
    }
}

use BoundaryEffect::{CloseAfter, CloseBefore, Plain};

/// Punctuation marks in match priority order
pub static PUNCTUATION: &[Mark] = &[
    Mark::new("\u{2014}", Plain), // em dash
    Mark::new(",", Plain),
    Mark::new(";", CloseAfter),
    Mark::new(":", Plain),
    Mark::new("\u{2026}", CloseAfter), // ellipsis character
    Mark::new("...", CloseAfter),
    Mark::new(".", CloseAfter),
    Mark::new("!", CloseAfter),
    Mark::new("?", CloseAfter),
    Mark::new("\u{2022}", CloseBefore), // bullet
    Mark::new("\u{00AB}", Plain),        // «
    Mark::new("\u{00BB}", Plain),        // »
    Mark::new("\"", Plain),
    Mark::new("(", Plain),
    Mark::new(")", Plain),
    Mark::new("[", Plain),
    Mark::new("]", Plain),
    Mark::new("//", Plain),
    Mark::new("/", Plain),
    Mark::new("\u{00B0}", Plain), // degree sign
    Mark::new("+", Plain),
    Mark::new("%", Plain),
    Mark::new("&", Plain),
];

/// First mark in priority order that occurs at `pos`
pub fn match_at(input: &[char], pos: usize) -> Option<&'static Mark> {
    PUNCTUATION.iter().find(|mark| mark.matches_at(input, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longer_marks_shadow_their_prefixes() {
        assert_eq!(match_at(&chars("..."), 0).map(|m| m.text), Some("..."));
        assert_eq!(match_at(&chars(".."), 0).map(|m| m.text), Some("."));
        assert_eq!(match_at(&chars("//x"), 0).map(|m| m.text), Some("//"));
        assert_eq!(match_at(&chars("/x"), 0).map(|m| m.text), Some("/"));
    }

    #[test]
    fn test_prefix_marks_are_listed_after_their_extensions() {
        for (i, shorter) in PUNCTUATION.iter().enumerate() {
            for longer in &PUNCTUATION[i + 1..] {
                assert!(
                    !(longer.text.len() > shorter.text.len()
                        && longer.text.starts_with(shorter.text)),
                    "{:?} shadows {:?}",
                    shorter.text,
                    longer.text
                );
            }
        }
    }

    #[test]
    fn test_boundary_effects() {
        let effect = |text: &str| {
            PUNCTUATION
                .iter()
                .find(|m| m.text == text)
                .map(|m| m.effect)
        };
        for closing in [";", "…", "...", ".", "!", "?"] {
            assert_eq!(effect(closing), Some(CloseAfter), "{closing}");
        }
        assert_eq!(effect("•"), Some(CloseBefore));
        assert_eq!(effect(","), Some(Plain));
        assert_eq!(effect("—"), Some(Plain));
    }

    #[test]
    fn test_hyphen_and_en_dash_are_not_punctuation() {
        assert!(match_at(&chars("-"), 0).is_none());
        assert!(match_at(&chars("–"), 0).is_none());
    }

    #[test]
    fn test_match_at_respects_position_and_bounds() {
        let input = chars("a.");
        assert!(match_at(&input, 0).is_none());
        assert_eq!(match_at(&input, 1).map(|m| m.len()), Some(1));
        assert!(match_at(&input, 2).is_none());
    }
}
