//! Progress reporting for corpus evaluation

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar over evaluated cases; silent when quiet
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar over `total_cases` cases
    pub fn init_cases(&mut self, total_cases: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_cases);
        match ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cases {msg}",
        ) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(err) => log::debug!("falling back to the default progress style: {err}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    pub fn case_completed(&self, id: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(id.to_string());
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
