use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::materialize::{Outcome, SkipReason, materialize};

use super::progress::Progress;

/// Per-run tallies folded from each file's outcome.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RunCounters {
    /// Newly created destination files (links + copies).
    pub processed: usize,
    pub links: usize,
    pub copies: usize,
    pub errors: usize,
    pub duplicates: usize,
    /// Non-files and undecodable streams.
    pub skipped: usize,
}

impl RunCounters {
    pub fn record(&mut self, outcome: Outcome) {
        if outcome.is_created() {
            self.processed += 1;
        }
        match outcome {
            Outcome::Linked => self.links += 1,
            Outcome::Copied(_) => self.copies += 1,
            Outcome::Skipped(SkipReason::Duplicate) => self.duplicates += 1,
            Outcome::Skipped(SkipReason::NotAFile | SkipReason::Unsupported) => self.skipped += 1,
        }
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub counters: RunCounters,
    /// The run stopped early on SIGINT/SIGTERM.
    pub interrupted: bool,
}

/// Materialize every path in order. Per-file errors are counted and reported
/// inline; only `interrupt` stops the run early.
pub fn process<I>(paths: I, destination: &Path, interrupt: &AtomicBool, progress: &Progress) -> RunReport
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut counters = RunCounters::default();

    for path in paths {
        if interrupt.load(Ordering::Relaxed) {
            return RunReport {
                counters,
                interrupted: true,
            };
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.update(&counters, &name);

        match materialize(&path, destination) {
            Ok(outcome) => {
                if outcome == Outcome::Skipped(SkipReason::Duplicate) {
                    progress.println("[i] Skipping duplicate file");
                }
                counters.record(outcome);
            }
            Err(e) => {
                debug!(path = %path.display(), error = ?e, "failed to process file");
                counters.record_error();
                progress.println(format!("[!] Error processing {name}: {e}"));
            }
        }
    }

    RunReport {
        counters,
        interrupted: interrupt.load(Ordering::Relaxed),
    }
}
