//! Progress display for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a batch of seeded runs
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// Create a bar for `runs` runs
    pub fn new(runs: usize) -> Self {
        let bar = ProgressBar::new(runs as u64);
        bar.set_style(RUN_STYLE.clone());
        Self { bar }
    }

    /// Hidden bar, for quiet mode and tests
    pub fn hidden(runs: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(runs as u64);
        Self { bar }
    }

    /// Record a finished run
    pub fn complete_run(&self, seed: u64, size: usize) {
        self.bar.set_message(format!("seed {seed}: {size} tiles"));
        self.bar.inc(1);
    }

    /// Runs recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("all runs done");
    }
}
