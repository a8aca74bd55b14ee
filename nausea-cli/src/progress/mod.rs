//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use nausea_engine::BatchObserver;
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Progress bar driven by batch events
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; `quiet` disables the bar entirely
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            pb.set_style(style.progress_chars("##-"));
        }

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Position of the bar, if one is shown
    pub fn position(&self) -> Option<u64> {
        self.progress_bar.as_ref().map(ProgressBar::position)
    }
}

impl BatchObserver for ProgressReporter {
    fn batch_started(&self, total: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_length(total as u64);
            pb.enable_steady_tick(Duration::from_millis(100));
        }
    }

    fn document_finished(&self, identifier: &str, succeeded: bool) {
        if let Some(pb) = &self.progress_bar {
            if succeeded {
                pb.set_message(format!("Analyzed: {identifier}"));
            } else {
                pb.set_message(format!("Failed: {identifier}"));
            }
            pb.inc(1);
        }
    }

    fn batch_finished(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
