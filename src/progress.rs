//! Progress display for registry lookups
//!
//! Redraws a single status line on stdout using indicatif.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Format the status line for `current` of `total` lookups
pub fn status_line(current: u64, total: u64) -> String {
    format!(
        "🔄 Processing packages: {} / {} ({}%)",
        current,
        total,
        percent_floor(current, total)
    )
}

/// `floor(current / total * 100)`, 0 when there is nothing to process
fn percent_floor(current: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        current * 100 / total
    }
}

/// Progress reporter for the lookup loop
pub struct Progress {
    /// Whether progress display is enabled (disabled by --hide-progress)
    enabled: bool,
    /// Current progress bar
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Start the status line for a known number of lookups
    pub fn start(&mut self, total: u64) {
        if !self.enabled || total == 0 {
            return;
        }

        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
        bar.set_style(ProgressStyle::with_template("{msg}").expect("Invalid template"));
        self.bar = Some(bar);
    }

    /// Record one completed lookup and redraw the line
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            let total = bar.length().unwrap_or(0);
            bar.set_message(status_line(bar.position(), total));
        }
    }

    /// Leave the final status line on screen.
    /// Returns true if anything was drawn to the terminal.
    pub fn finish(&mut self) -> bool {
        let drawn = match self.bar {
            Some(ref bar) => {
                bar.finish();
                !bar.is_hidden()
            }
            None => false,
        };
        self.bar = None;
        drawn
    }
}
