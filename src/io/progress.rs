//! Staged progress display for a render run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per pipeline stage
///
/// A render has two stages, generation and export. Each gets its own line.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stages: Vec<(String, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no stages
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stages: Vec::new(),
        }
    }

    /// Begin a new stage of `total` units, finishing the previous one
    pub fn start_stage(&mut self, name: &str, total: usize) {
        self.finish_current();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name.to_string());
        let bar = self.multi_progress.add(bar);
        self.stages.push((name.to_string(), bar));
    }

    /// Report the absolute position within the current stage
    pub fn update(&self, position: usize) {
        if let Some((_, bar)) = self.stages.last() {
            bar.set_position(position as u64);
        }
    }

    /// Mark the current stage as done with a short summary
    pub fn complete_stage(&self, summary: &str, elapsed: Duration) {
        if let Some((_, bar)) = self.stages.last() {
            bar.finish_with_message(format!("{summary} ({elapsed:.2?})"));
        }
    }

    /// Names of the stages started so far
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn finish_current(&self) {
        if let Some((_, bar)) = self.stages.last()
            && !bar.is_finished()
        {
            bar.finish();
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.finish_current();
        let _ = self.multi_progress.clear();
    }
}
