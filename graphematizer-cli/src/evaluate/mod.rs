//! Scoring graphematizer output against reference corpora
//!
//! A test set is a directory with a `tests/` tree. Every directory below it
//! that contains a `plaintext.txt` is one case; its `graphemes.txt` holds the
//! reference lines. A case scores the length of the longest common
//! subsequence between produced and reference lines, divided by the number of
//! reference lines.

pub mod report;

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{self, OutputFormat};
use crate::progress::ProgressReporter;
use graphematizer_core::Graphematizer;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub use report::write_report;

/// Name of the input document inside a case directory
pub const PLAINTEXT_FILE: &str = "plaintext.txt";

/// Name of the reference document inside a case directory
pub const GRAPHEMES_FILE: &str = "graphemes.txt";

/// One case of a test set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Path components below `tests/`, joined with `/`
    pub id: String,
    /// Directory holding the case files
    pub dir: PathBuf,
}

/// Score of a single case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseScore {
    pub id: String,
    /// Number of reference lines
    pub reference: usize,
    /// Reference lines found, in order, in the produced output
    pub matched: usize,
    pub score: f64,
}

impl CaseScore {
    pub fn new(id: impl Into<String>, reference: usize, matched: usize) -> Self {
        Self {
            id: id.into(),
            reference,
            matched,
            score: ratio(matched, reference),
        }
    }
}

/// Scores of a whole test set, in discovery order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    pub cases: Vec<CaseScore>,
    pub reference: usize,
    pub matched: usize,
    pub score: f64,
}

impl EvaluationSummary {
    pub fn from_cases(cases: Vec<CaseScore>) -> Self {
        let reference = cases.iter().map(|case| case.reference).sum();
        let matched = cases.iter().map(|case| case.matched).sum();
        Self {
            cases,
            reference,
            matched,
            score: ratio(matched, reference),
        }
    }

    /// Cases scoring strictly below `threshold` (a fraction in `0.0..=1.0`)
    pub fn below(&self, threshold: f64) -> impl Iterator<Item = &CaseScore> {
        self.cases.iter().filter(move |case| case.score < threshold)
    }
}

/// An empty reference counts as a perfect match
fn ratio(matched: usize, reference: usize) -> f64 {
    if reference == 0 {
        1.0
    } else {
        matched as f64 / reference as f64
    }
}

/// Length of the longest common subsequence of two line sequences
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            current[j + 1] = if x == y {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Split a grapheme document into lines without trailing whitespace
pub fn grapheme_lines(document: &str) -> Vec<String> {
    document
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Read a reference grapheme file
pub fn load_graphemes(path: &Path) -> Result<Vec<String>, CliError> {
    FileReader::read_text(path).map(|text| grapheme_lines(&text))
}

/// Find every case below `<test_set>/tests`, sorted by id.
///
/// A directory containing `plaintext.txt` is a case and is not searched
/// further.
pub fn discover_cases(test_set: &Path) -> Result<Vec<TestCase>, CliError> {
    let root = test_set.join("tests");
    if !root.is_dir() {
        return Err(CliError::Open(root.display().to_string()));
    }

    let mut cases = Vec::new();
    collect_cases(&root, &mut Vec::new(), &mut cases)?;
    log::debug!("found {} cases under {}", cases.len(), root.display());
    Ok(cases)
}

fn collect_cases(
    dir: &Path,
    id: &mut Vec<String>,
    cases: &mut Vec<TestCase>,
) -> Result<(), CliError> {
    if dir.join(PLAINTEXT_FILE).is_file() {
        cases.push(TestCase {
            id: id.join("/"),
            dir: dir.to_path_buf(),
        });
        return Ok(());
    }

    let entries = fs::read_dir(dir).map_err(|err| {
        log::debug!("failed to list {}: {err}", dir.display());
        CliError::Open(dir.display().to_string())
    })?;
    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();

    for subdir in subdirs {
        let name = subdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        id.push(name);
        collect_cases(&subdir, id, cases)?;
        id.pop();
    }
    Ok(())
}

/// Segment one case and compare it with its reference
pub fn evaluate_case(
    graphematizer: &Graphematizer,
    case: &TestCase,
    separator: &str,
) -> Result<CaseScore, CliError> {
    let plaintext = case.dir.join(PLAINTEXT_FILE);
    let codepoints = FileReader::read_codepoints(&plaintext)?;
    let tokens = graphematizer
        .graphematize_codepoints(&codepoints)
        .map_err(|err| {
            log::debug!("{err}");
            CliError::Graphematize(plaintext.display().to_string())
        })?;

    let rendered = output::render(&tokens, OutputFormat::Text, separator)
        .map_err(|err| CliError::Evaluate(format!("{}: {err:#}", case.id)))?;
    let produced = grapheme_lines(&String::from_utf8_lossy(&rendered));
    let reference = load_graphemes(&case.dir.join(GRAPHEMES_FILE))?;

    let matched = lcs_len(&reference, &produced);
    log::debug!("{}: {matched}/{}", case.id, reference.len());
    Ok(CaseScore::new(case.id.clone(), reference.len(), matched))
}

/// Evaluate all cases on a pool of `jobs` threads, keeping discovery order
pub fn evaluate_all(
    cases: &[TestCase],
    separator: &str,
    jobs: usize,
    progress: &ProgressReporter,
) -> Result<EvaluationSummary, CliError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|err| CliError::Evaluate(format!("unable to start worker threads: {err}")))?;

    let graphematizer = Graphematizer::new();
    let scores = pool.install(|| {
        cases
            .par_iter()
            .map(|case| {
                let score = evaluate_case(&graphematizer, case, separator);
                progress.case_completed(&case.id);
                score
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    Ok(EvaluationSummary::from_cases(scores))
}
