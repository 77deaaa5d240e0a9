//! Stage progress tracking for site generation and rasterization

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{elapsed_precise}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for the stages of one diagram
///
/// A hidden reporter hands out hidden bars, so callers never branch on `--quiet`.
/// Bars are `Sync` and may be advanced from rayon workers; they only observe work.
pub struct ProgressReporter {
    multi_progress: MultiProgress,
    visible: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            visible: true,
        }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            visible: false,
        }
    }

    /// Whether bars from this reporter are drawn
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start a bar for a stage of `length` steps
    pub fn stage(&self, name: &'static str, length: u64) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(length);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name);
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}
