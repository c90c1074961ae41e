//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{self, OutputFormat};
use clap::Parser;
use graphematizer_core::Graphematizer;
use std::path::PathBuf;

/// Split a plain text document into boundary-flagged graphemes
#[derive(Debug, Parser)]
#[command(name = "graphematizer", version, about, long_about = None)]
pub struct ProcessArgs {
    /// Plain text document to segment (UTF-8, optional byte-order mark)
    #[arg(value_name = "PLAINTEXT")]
    pub input: PathBuf,

    /// File to write the graphemes to, one per line
    #[arg(value_name = "GRAPHEMES")]
    pub output: PathBuf,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// String placed between the flag literal and the token text
    #[arg(short, long, value_name = "STR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "GRAPHEMATIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub separator: String,
}

impl ProcessArgs {
    /// Parse arguments, mapping every parse failure other than help/version
    /// to a usage error
    pub fn parse_from_env() -> Result<Self, ParseOutcome> {
        Self::try_parse().map_err(ParseOutcome::from)
    }

    /// Execute the process command
    pub fn execute(&self) -> Result<(), CliError> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting graphematization");
        log::debug!("Arguments: {:?}", self);

        let settings = self.output_settings()?;

        let codepoints = FileReader::read_codepoints(&self.input)?;
        let tokens = Graphematizer::new()
            .graphematize_codepoints(&codepoints)
            .map_err(|err| {
                log::debug!("{err}");
                CliError::Graphematize(self.input.display().to_string())
            })?;
        log::info!("{} tokens", tokens.len());

        let document =
            output::render(&tokens, settings.format, &settings.separator).map_err(|err| {
                log::debug!("failed to render output: {err:#}");
                CliError::Write(self.output.display().to_string())
            })?;
        output::write_document(&self.output, &document)
    }

    /// Merge config file values with command-line overrides
    pub fn output_settings(&self) -> Result<OutputSettings, CliError> {
        let config = match &self.config {
            Some(path) => {
                CliConfig::load(path).map_err(|err| CliError::Config(format!("{err:#}")))?
            }
            None => CliConfig::default(),
        };

        Ok(OutputSettings {
            format: self.format.unwrap_or(config.output.format),
            separator: self
                .separator
                .clone()
                .unwrap_or(config.output.separator),
        })
    }
}

/// Result of a failed argument parse
#[derive(Debug)]
pub enum ParseOutcome {
    /// `--help` or `--version`; clap's rendering goes to stdout
    Informational(clap::Error),
    /// Anything else
    Invalid(CliError),
}

impl From<clap::Error> for ParseOutcome {
    fn from(err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseOutcome::Informational(err),
            _ => ParseOutcome::Invalid(CliError::Usage(err.to_string().trim_end().to_string())),
        }
    }
}
