//! Progress display for line-oriented passes and pattern group updates

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_TICK_LINES};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix}: {pos} lines {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static GROUP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}}: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for one batch job
///
/// A disabled manager accepts every call and draws nothing, so jobs never
/// need to check whether output is quiet.
pub struct ProgressManager {
    enabled: bool,
    bar: Option<ProgressBar>,
    lines: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to standard error
    pub const fn new() -> Self {
        Self {
            enabled: true,
            bar: None,
            lines: 0,
        }
    }

    /// Create a progress manager that never draws
    pub const fn hidden() -> Self {
        Self {
            enabled: false,
            bar: None,
            lines: 0,
        }
    }

    /// Whether anything is drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin counting lines of an input file
    pub fn start_lines(&mut self, label: &str) {
        self.lines = 0;
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(LINE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Record one processed line, redrawing every few thousand lines
    pub fn tick_line(&mut self) {
        self.lines += 1;
        if self.lines % PROGRESS_TICK_LINES != 0 {
            return;
        }
        if let Some(ref bar) = self.bar {
            bar.set_position(self.lines);
        }
    }

    /// Lines recorded since the last [`ProgressManager::start_lines`]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    /// Begin a pass over a known number of pattern groups
    pub fn start_groups(&mut self, label: &str, total: usize) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(GROUP_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Record one finished pattern group
    pub fn advance_group(&self, pattern: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(pattern.to_string());
            bar.inc(1);
        }
    }

    /// Stop the current display, leaving a summary line behind
    pub fn finish(&mut self, summary: &str) {
        if let Some(bar) = self.bar.take() {
            bar.set_position(bar.length().unwrap_or(self.lines).max(bar.position()));
            bar.finish_with_message(summary.to_string());
        }
    }
}
