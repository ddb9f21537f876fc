use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress indicator for a sweep.
///
/// The scheduler advances it once per completed chunk with the chunk's
/// size; when disabled every call is a no-op, so tests and non-TTY runs
/// need no special casing.
pub struct ProgressReporter {
    sweep_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            sweep_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the bar with `total_rows` as its length
    pub fn start_sweep(&mut self, total_rows: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_rows as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows checked ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Checking rows");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.sweep_progress = Some(pb);
    }

    /// Advance by `completed` rows (one call per finished chunk)
    pub fn advance(&self, completed: usize) {
        if let Some(ref pb) = self.sweep_progress {
            pb.inc(completed as u64);
        }
    }

    /// Hide the bar and print a completion summary
    pub fn finish_sweep(&self, online_count: usize, total_count: usize) {
        if let Some(ref pb) = self.sweep_progress {
            let message = if online_count == total_count {
                "✓ All rows online".to_string()
            } else {
                format!("✓ Sweep complete ({online_count}/{total_count} online)")
            };
            pb.finish_with_message(message);
        }
    }

    /// Clear the bar without a summary, e.g. before structured output
    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.sweep_progress {
            pb.finish_and_clear();
        }
    }
}
