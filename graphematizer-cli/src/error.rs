//! Error handling for the CLI application

use std::fmt;

/// Usage line printed when the arguments cannot be understood
pub const USAGE: &str = "Invalid arguments. Usage:\n\tgraphematizer <plaintext> <graphemes>";

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Arguments could not be parsed
    Usage(String),
    /// File could not be opened for reading or created for writing
    Open(String),
    /// Input file is not valid UTF-8
    Decode(String),
    /// The grammar could not segment the input document
    Graphematize(String),
    /// Output could not be rendered or written
    Write(String),
    /// Configuration file error
    Config(String),
    /// Corpus evaluation could not run
    Evaluate(String),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(detail) => write!(f, "{USAGE}\n{detail}"),
            CliError::Open(path) => write!(f, "Unable to open {path}"),
            CliError::Decode(path) => write!(f, "Unable to decode {path} as UTF-8"),
            CliError::Graphematize(path) => write!(f, "Unable to graphematize {path}"),
            CliError::Write(path) => write!(f, "Unable to write {path}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Evaluate(msg) => write!(f, "Evaluation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI helpers that attach context
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display() {
        let error = CliError::Open("plain.txt".to_string());
        assert_eq!(error.to_string(), "Unable to open plain.txt");
    }

    #[test]
    fn test_graphematize_error_display() {
        let error = CliError::Graphematize("plain.txt".to_string());
        assert_eq!(error.to_string(), "Unable to graphematize plain.txt");
    }

    #[test]
    fn test_usage_error_display_starts_with_usage() {
        let error = CliError::Usage("unexpected argument 'x'".to_string());
        let message = error.to_string();
        assert!(message.starts_with("Invalid arguments. Usage:"));
        assert!(message.contains("graphematizer <plaintext> <graphemes>"));
        assert!(message.ends_with("unexpected argument 'x'"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            CliError::Usage(String::new()),
            CliError::Open("a".into()),
            CliError::Decode("a".into()),
            CliError::Graphematize("a".into()),
            CliError::Write("a".into()),
            CliError::Config("bad".into()),
            CliError::Evaluate("no threads".into()),
        ];
        for error in errors {
            assert_eq!(error.exit_code(), 1, "{error:?}");
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::Decode("test.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Decode"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::Open("тексты/файл 1.txt".to_string());
        assert_eq!(error.to_string(), "Unable to open тексты/файл 1.txt");
    }
}
