//! Batch progress display across grid files

use crate::algorithm::solution::Solution;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Grids: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks solved grids and reports the latest result
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: Vec<(String, f64)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: Vec::new(),
        }
    }

    /// Create the batch bar for `file_count` grids
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show which grid is being solved
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(display_name(path));
        }
    }

    /// Record a solved grid and advance the bar
    pub fn complete_file(&mut self, path: &Path, solution: &Solution, elapsed: Duration) {
        let name = display_name(path);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!(
                "✓ {name}: {}/{} targets, score {:.2} in {:.1}s",
                solution.covered_targets,
                solution.total_targets,
                solution.score,
                elapsed.as_secs_f64()
            ));
        }
        self.completed.push((name, solution.score));
    }

    /// Names and scores of grids completed so far
    pub fn completed(&self) -> &[(String, f64)] {
        &self.completed
    }

    /// Close the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("{} grids solved", self.completed.len()));
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
