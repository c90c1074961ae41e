//! Static codepoint tables consulted by the grammar rules
//!
//! Everything here is immutable and built at compile time.

pub mod classes;
pub mod punctuation;

pub use classes::{
    is_decimal_separator, is_digit, is_index_closer, is_range_dash, is_trailing_dash,
    is_whitespace, BYTE_ORDER_MARK,
};
pub use punctuation::{match_at as punctuation_at, BoundaryEffect, Mark, PUNCTUATION};
