//! File reading and UTF-8 decoding

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String, CliError> {
        let bytes = fs::read(path).map_err(|err| {
            log::debug!("failed to read {}: {err}", path.display());
            CliError::Open(path.display().to_string())
        })?;

        String::from_utf8(bytes).map_err(|err| {
            log::debug!("invalid UTF-8 in {}: {err}", path.display());
            CliError::Decode(path.display().to_string())
        })
    }

    /// Read a file and decode it into Unicode scalar values
    pub fn read_codepoints(path: &Path) -> Result<Vec<char>, CliError> {
        let text = Self::read_text(path)?;
        log::info!("read {} bytes from {}", text.len(), path.display());
        Ok(text.chars().collect())
    }
}
