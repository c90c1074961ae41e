//! Corpus evaluation command

use crate::error::CliError;
use crate::evaluate::{self, EvaluationSummary};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Score graphematizer output against reference grapheme files
#[derive(Debug, Parser)]
#[command(name = "graphematizer-eval", version, about, long_about = None)]
pub struct EvaluateArgs {
    /// Test set directory; cases live below its `tests/` subdirectory
    #[arg(value_name = "TEST_SET")]
    pub test_set: PathBuf,

    /// Maximum number of cases evaluated at once [default: CPU count]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// List cases scoring below this fraction (0.0 to 1.0)
    #[arg(short = 't', long, default_value_t = 0.0, value_parser = parse_threshold)]
    pub score_threshold: f64,

    /// String placed between the flag literal and the token text before
    /// comparing with the reference lines
    #[arg(short, long, value_name = "STR", default_value = " ", allow_hyphen_values = true)]
    pub separator: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress log output and the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .trim()
        .parse()
        .map_err(|err| format!("'{value}' is not a number: {err}"))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("{threshold} is outside 0.0..=1.0"))
    }
}

impl EvaluateArgs {
    /// Evaluate the whole test set and write the report to `writer`
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<EvaluationSummary, CliError> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let cases = evaluate::discover_cases(&self.test_set)?;
        if cases.is_empty() {
            return Err(CliError::Evaluate(format!(
                "no test cases under {}",
                self.test_set.join("tests").display()
            )));
        }

        let jobs = self.jobs.unwrap_or_else(num_cpus::get).max(1);
        log::info!("evaluating {} cases on {jobs} threads", cases.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_cases(cases.len() as u64);
        let summary = evaluate::evaluate_all(&cases, &self.separator, jobs, &progress);
        progress.finish();
        let summary = summary?;

        evaluate::write_report(writer, &summary, self.score_threshold, self.format).map_err(
            |err| {
                log::debug!("failed to write report: {err:#}");
                CliError::Write("standard output".to_string())
            },
        )?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Result<EvaluateArgs, clap::Error> {
        let argv = ["graphematizer-eval"].iter().chain(extra.iter());
        EvaluateArgs::try_parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&["corpus"]).unwrap();
        assert_eq!(parsed.test_set, PathBuf::from("corpus"));
        assert_eq!(parsed.jobs, None);
        assert_eq!(parsed.score_threshold, 0.0);
        assert_eq!(parsed.separator, " ");
        assert_eq!(parsed.format, OutputFormat::Text);
    }

    #[test]
    fn test_threshold_must_be_a_fraction() {
        assert_eq!(args(&["c", "-t", "0.95"]).unwrap().score_threshold, 0.95);
        assert!(args(&["c", "-t", "95"]).is_err());
        assert!(args(&["c", "-t", "high"]).is_err());
    }

    #[test]
    fn test_execute_reports_total() {
        let temp_dir = TempDir::new().unwrap();
        let case = temp_dir.path().join("tests").join("text").join("1");
        fs::create_dir_all(&case).unwrap();
        fs::write(case.join("plaintext.txt"), "Привет, мир!").unwrap();
        fs::write(case.join("graphemes.txt"), "n Привет\nn ,\nn мир\ne !\n").unwrap();

        let test_set = temp_dir.path().to_str().unwrap();
        let parsed = args(&[test_set, "-q", "-j", "1"]).unwrap();
        let mut report = Vec::new();
        let summary = parsed.execute(&mut report).unwrap();

        assert_eq!(summary.score, 1.0);
        assert!(String::from_utf8(report)
            .unwrap()
            .ends_with("total 100.000% over 1 tests\n"));
    }

    #[test]
    fn test_execute_empty_test_set() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("tests")).unwrap();

        let parsed = args(&[temp_dir.path().to_str().unwrap(), "-q"]).unwrap();
        let result = parsed.execute(&mut Vec::<u8>::new());
        assert!(matches!(result, Err(CliError::Evaluate(_))));
    }
}
