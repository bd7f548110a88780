//! Terminal progress display driven by build diagnostics

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows grid rows as a progress bar and logs every other event
///
/// Log lines are printed with the bar suspended so the two never
/// interleave on the terminal.
pub struct ProgressDiagnostics {
    bar: ProgressBar,
    log: TracingDiagnostics,
}

impl Default for ProgressDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDiagnostics {
    /// Create a progress display with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(ROW_STYLE.clone());
        Self {
            bar,
            log: TracingDiagnostics,
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Diagnostics for ProgressDiagnostics {
    fn report(&self, event: Diagnostic<'_>) {
        match event {
            Diagnostic::MosaicStarted { rows, .. } => {
                self.bar.set_length(u64::from(rows));
                self.bar.set_position(0);
                self.bar.set_message("Generating mosaic");
            }
            Diagnostic::RowCompleted { .. } => self.bar.inc(1),
            Diagnostic::MosaicFinished { .. } => self.bar.finish_and_clear(),
            Diagnostic::CandidateSkipped { .. }
            | Diagnostic::CacheRejected { .. }
            | Diagnostic::CacheWriteFailed { .. }
            | Diagnostic::IndexReady { .. } => {}
        }

        self.bar.suspend(|| self.log.report(event));
    }
}
