//! Line-per-token output formatter

use super::OutputFormatter;
use anyhow::Result;
use graphematizer_core::Token;
use std::io::Write;

/// Plain text formatter - outputs one token per line, prefixed by its flag
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter with no separator after the flag
    pub fn new(writer: W) -> Self {
        Self::with_separator(writer, "")
    }

    /// Create a text formatter that puts `separator` between flag and text
    pub fn with_separator(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        writeln!(
            self.writer,
            "{}{}{}",
            token.flag.literal(),
            self.separator,
            token.text
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_immediately_followed_by_text() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_token(&Token::new("word")).unwrap();
        formatter.format_token(&Token::end(".")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "nword\ne.\n");
    }

    #[test]
    fn test_custom_separator() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::with_separator(&mut buffer, " ");
        formatter.format_token(&Token::end("42")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "e 42\n");
    }
}
