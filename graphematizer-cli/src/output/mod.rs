//! Output formatting and writing

use crate::error::CliError;
use anyhow::Result;
use graphematizer_core::{Token, TokenList};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single token
    fn format_token(&mut self, token: &Token) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: flag literal, separator, token text
    #[default]
    Text,
    /// JSON array of `{flag, text}` objects
    Json,
}

/// Serialize a token list into an in-memory document
pub fn render(tokens: &TokenList, format: OutputFormat, separator: &str) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut formatter: Box<dyn OutputFormatter + '_> = match format {
            OutputFormat::Text => Box::new(TextFormatter::with_separator(&mut buffer, separator)),
            OutputFormat::Json => Box::new(JsonFormatter::new(&mut buffer)),
        };
        for token in tokens {
            formatter.format_token(token)?;
        }
        formatter.finish()?;
    }
    Ok(buffer)
}

/// Create (or truncate) `path` and write the whole document to it
pub fn write_document(path: &Path, document: &[u8]) -> Result<(), CliError> {
    let mut file = File::create(path).map_err(|err| {
        log::debug!("failed to create {}: {err}", path.display());
        CliError::Open(path.display().to_string())
    })?;

    file.write_all(document)
        .and_then(|()| file.flush())
        .map_err(|err| {
            log::debug!("failed to write {}: {err}", path.display());
            CliError::Write(path.display().to_string())
        })?;

    log::info!("wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphematizer_core::Graphematizer;
    use tempfile::TempDir;

    #[test]
    fn test_render_text_default_format() {
        let tokens = Graphematizer::new().graphematize("Hi, you.").unwrap();
        let rendered = render(&tokens, OutputFormat::Text, "").unwrap();
        assert_eq!(String::from_utf8(rendered).unwrap(), "nHi\nn,\nnyou\ne.\n");
    }

    #[test]
    fn test_render_empty_list_is_empty_document() {
        let rendered = render(&TokenList::new(), OutputFormat::Text, "").unwrap();
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_render_json() {
        let tokens = Graphematizer::new().graphematize("Да!").unwrap();
        let rendered = render(&tokens, OutputFormat::Json, "").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&rendered).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"flag": "n", "text": "Да"},
                {"flag": "e", "text": "!"}
            ])
        );
    }

    #[test]
    fn test_write_document_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_document(&path, "e42\n".as_bytes()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "e42\n");
    }

    #[test]
    fn test_write_document_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.txt");

        let result = write_document(&path, b"");
        assert!(matches!(result, Err(CliError::Open(_))));
    }

    #[test]
    fn test_output_format_from_toml_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
