//! Single-codepoint classes

/// Leading byte-order mark, dropped before segmentation
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Separators allowed once inside a number (`3.14`, `1,5`)
const DECIMAL_SEPARATORS: [char; 2] = ['.', ','];

/// Marks joining the two halves of a number range: en dash, hyphen, em dash
const RANGE_DASHES: [char; 3] = ['\u{2013}', '-', '\u{2014}'];

/// Marks checked right after a number or range: en dash, hyphen
const TRAILING_DASHES: [char; 2] = ['\u{2013}', '-'];

/// Marks closing an enumeration index (`1.`, `2)`)
const INDEX_CLOSERS: [char; 2] = ['.', ')'];

/// ASCII decimal digit
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_decimal_separator(ch: char) -> bool {
    DECIMAL_SEPARATORS.contains(&ch)
}

#[inline]
pub fn is_range_dash(ch: char) -> bool {
    RANGE_DASHES.contains(&ch)
}

#[inline]
pub fn is_trailing_dash(ch: char) -> bool {
    TRAILING_DASHES.contains(&ch)
}

#[inline]
pub fn is_index_closer(ch: char) -> bool {
    INDEX_CLOSERS.contains(&ch)
}

/// Codepoints skipped between tokens: space and line feed only. Tabs,
/// carriage returns and no-break spaces are ordinary letter-block material.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\n')
}
