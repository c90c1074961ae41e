//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use graphematizer_core::Token;
use std::io::Write;

/// JSON formatter - outputs tokens as a JSON array of `{flag, text}` objects
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        self.tokens.push(token.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
