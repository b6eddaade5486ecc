//! Row progress display for a running evaluation

use crate::io::configuration::PROGRESS_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished rows; safe to update from any worker thread
pub struct RowProgress {
    bar: ProgressBar,
}

impl RowProgress {
    /// Create a progress bar over `total_rows`, drawn only when `visible`
    pub fn new(total_rows: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total_rows as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(ROW_STYLE.clone());
        Self { bar }
    }

    /// Record `rows` more finished rows
    pub fn advance(&self, rows: usize) {
        self.bar.inc(rows as u64);
    }

    /// Rows recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
