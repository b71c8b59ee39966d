//! Per-level progress reporting abstraction
//!
//! Decouples the descent from UI concerns (indicatif, stderr). Reporting is
//! purely observational; selection never depends on it.

use indicatif::ProgressBar;
use std::time::Duration;

use crate::model::Measurement;

/// How many measurements of a level the verbose report prints.
const REPORT_TOP_N: usize = 10;

/// A handle to an active level indicator
pub trait ProgressHandle: Send + Sync {
    fn finish(&self);
}

/// Factory for level indicators plus the per-level summary sink
pub trait ProgressReporter: Send + Sync {
    fn level_start(&self, depth: u32, total: usize) -> Box<dyn ProgressHandle>;
    fn level_report(&self, depth: u32, results: &[Measurement]);
}

/// Indicatif-based reporter for CLI usage
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn level_start(&self, depth: u32, total: usize) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("level {}: measuring {} directories", depth, total));
        pb.enable_steady_tick(Duration::from_millis(100));
        Box::new(IndicatifHandle(pb))
    }

    fn level_report(&self, depth: u32, results: &[Measurement]) {
        eprintln!("level {}:", depth);
        for m in results.iter().take(REPORT_TOP_N) {
            eprintln!(
                "  {:>10}  {:<9}  {}",
                m.display_size(),
                m.status.as_str(),
                m.path.display()
            );
        }
        if results.len() > REPORT_TOP_N {
            eprintln!("  ... and {} more", results.len() - REPORT_TOP_N);
        }
    }
}

struct IndicatifHandle(ProgressBar);

impl ProgressHandle for IndicatifHandle {
    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

/// No-op reporter for tests and benchmarks
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn level_start(&self, _depth: u32, _total: usize) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }

    fn level_report(&self, _depth: u32, _results: &[Measurement]) {}
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn finish(&self) {}
}

/// Reporter that only shows output when verbose
pub struct VerboseProgress {
    verbose: bool,
}

impl VerboseProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for VerboseProgress {
    fn level_start(&self, depth: u32, total: usize) -> Box<dyn ProgressHandle> {
        if self.verbose {
            IndicatifProgress.level_start(depth, total)
        } else {
            NoopProgress.level_start(depth, total)
        }
    }

    fn level_report(&self, depth: u32, results: &[Measurement]) {
        if self.verbose {
            IndicatifProgress.level_report(depth, results);
        }
    }
}
