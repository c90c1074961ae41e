//! Evaluation report rendering

use super::EvaluationSummary;
use crate::output::OutputFormat;
use anyhow::Result;
use std::io::Write;

/// Write `summary` to `writer`.
///
/// The text report lists the cases scoring below `threshold` followed by the
/// total; the JSON report always carries every case.
pub fn write_report<W: Write>(
    writer: &mut W,
    summary: &EvaluationSummary,
    threshold: f64,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "cases scoring below {:.3}%:", threshold * 100.0)?;
            writeln!(writer, "{:>11} - id", "score")?;
            for case in summary.below(threshold) {
                writeln!(writer, "{:>10.3}% - {}", case.score * 100.0, case.id)?;
            }
            writeln!(
                writer,
                "total {:.3}% over {} tests",
                summary.score * 100.0,
                summary.cases.len()
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, summary)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::CaseScore;

    fn summary() -> EvaluationSummary {
        EvaluationSummary::from_cases(vec![
            CaseScore::new("text1/1", 4, 4),
            CaseScore::new("text1/2", 8, 6),
        ])
    }

    #[test]
    fn test_text_report_lists_low_scores() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &summary(), 0.9, OutputFormat::Text).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert_eq!(
            report,
            "cases scoring below 90.000%:\n      score - id\n    75.000% - text1/2\ntotal 83.333% over 2 tests\n"
        );
    }

    #[test]
    fn test_zero_threshold_lists_nothing() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &summary(), 0.0, OutputFormat::Text).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert!(!report.contains("text1/"));
        assert!(report.ends_with("total 83.333% over 2 tests\n"));
    }

    #[test]
    fn test_json_report() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &summary(), 0.0, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["reference"], 12);
        assert_eq!(value["matched"], 10);
        assert_eq!(value["cases"][1]["id"], "text1/2");
        assert_eq!(value["cases"][1]["score"], 0.75);
    }
}
