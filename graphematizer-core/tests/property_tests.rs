//! Property-based tests for the segmentation grammar

use graphematizer_core::tables::is_whitespace;
use graphematizer_core::{BoundaryFlag, Grammar, TrailingDash};
use proptest::prelude::*;

/// Characters that exercise every rule, weighted towards the interesting ones
fn document() -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(
        prop_oneof![
            4 => prop::sample::select(vec![
                '0', '1', '7', '9', '.', ',', '-', '–', '—', ')', ' ', '\n',
            ]),
            2 => prop::sample::select(vec![
                ';', ':', '…', '!', '?', '•', '«', '»', '"', '(', '[', ']', '/', '°', '+',
                '%', '&', '\t', '\r', '\u{00A0}', '\u{FEFF}',
            ]),
            3 => prop::sample::select(vec!['a', 'z', 'Я', 'é', '@', '#']),
            1 => any::<char>(),
        ],
        0..64,
    )
}

/// Input with the leading byte-order mark and all spaces and newlines removed
fn visible(input: &[char]) -> Vec<char> {
    let body = match input.split_first() {
        Some(('\u{FEFF}', rest)) => rest,
        _ => input,
    };
    body.iter().copied().filter(|&c| !is_whitespace(c)).collect()
}

proptest! {
    #[test]
    fn reject_reproduces_visible_text(input in document()) {
        let tokens = Grammar::new().parse(&input).unwrap();
        let joined: Vec<char> = tokens.joined_text().chars().collect();
        prop_assert_eq!(joined, visible(&input));
    }

    #[test]
    fn discard_only_drops_trailing_dashes(input in document()) {
        let tokens = Grammar::with_trailing_dash(TrailingDash::Discard)
            .parse(&input)
            .unwrap();
        let joined: Vec<char> = tokens.joined_text().chars().collect();
        let expected = visible(&input);

        let mut rest = joined.iter().peekable();
        for ch in expected {
            if rest.peek() == Some(&&ch) {
                rest.next();
            } else {
                prop_assert!(ch == '-' || ch == '–', "dropped {:?}", ch);
            }
        }
        prop_assert!(rest.next().is_none(), "invented characters");
    }

    #[test]
    fn last_token_always_ends(input in document()) {
        let tokens = Grammar::new().parse(&input).unwrap();
        if let Some(last) = tokens.last() {
            prop_assert_eq!(last.flag, BoundaryFlag::End);
        } else {
            prop_assert!(visible(&input).is_empty());
        }
    }

    #[test]
    fn tokens_are_non_empty_and_whitespace_free(input in document()) {
        let tokens = Grammar::new().parse(&input).unwrap();
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
            prop_assert!(!token.text.chars().any(is_whitespace));
        }
    }

    #[test]
    fn parsing_is_deterministic(input in document()) {
        let grammar = Grammar::new();
        prop_assert_eq!(grammar.parse(&input), grammar.parse(&input));
    }
}
