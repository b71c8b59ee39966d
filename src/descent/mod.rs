//! Greedy level-by-level descent toward the heaviest directory
//!
//! # Architecture
//!
//! The descent is organized into layers:
//!
//! - **probe**: Size probing of one directory subtree (SizeProber trait)
//! - **measure**: Bounded parallel measurement of a sibling set
//! - **list**: Child-directory enumeration (DirLister trait)
//! - **progress**: Per-level progress reporting abstraction
//! - **controller**: The descent loop and its selection policy (this module)
//!
//! Levels are strictly sequential: the sibling set of level N+1 is only known
//! once level N's winner is selected. Within a level all probes race freely.

mod list;
mod measure;
mod probe;
mod progress;

pub use list::{DirLister, FsLister};
pub use measure::Measurer;
pub use probe::{FsProber, SizeProber};
pub use progress::{
    IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter, VerboseProgress,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::model::{Measurement, ProbeStatus};

/// The sole fatal error: the root has nothing to descend into.
#[derive(Debug, thiserror::Error)]
#[error("no subdirectories under {}", .0.display())]
pub struct NoDirectories(pub PathBuf);

/// Sort measurements heaviest first.
///
/// The sort is stable and unmeasured entries carry zero bytes, so ties keep
/// the original enumeration order.
pub fn sort_by_size(results: &mut [Measurement]) {
    results.sort_by(|a, b| b.bytes.cmp(&a.bytes));
}

/// Pick the level winner from measurements already sorted by `sort_by_size`.
///
/// Preference order: a confirmed non-empty measurement; else anything that
/// answered in time (a confirmed-empty or errored directory is more
/// informative than one whose measurement never arrived); else whatever is
/// there, so even an all-timeout level still yields a candidate.
pub fn select_best(results: &[Measurement]) -> Option<&Measurement> {
    results
        .iter()
        .find(|m| m.bytes > 0)
        .or_else(|| results.iter().find(|m| m.status != ProbeStatus::Timeout))
        .or_else(|| results.first())
}

/// Drives the descent: measure the current sibling set, pick the heaviest,
/// descend into it, repeat until the depth limit or a leaf.
pub struct DescentController<P, L> {
    measurer: Measurer<P>,
    lister: L,
    per_folder_timeout: Duration,
    max_depth: u32,
    progress: Box<dyn ProgressReporter>,
}

impl<P: SizeProber, L: DirLister> DescentController<P, L> {
    pub fn new(prober: Arc<P>, lister: L, per_folder_timeout: Duration, max_depth: u32) -> Self {
        Self {
            measurer: Measurer::new(prober),
            lister,
            per_folder_timeout,
            max_depth,
            progress: Box::new(VerboseProgress::new(true)),
        }
    }

    /// Create a quiet controller (no progress output, used by tests and benchmarks)
    pub fn quiet(prober: Arc<P>, lister: L, per_folder_timeout: Duration, max_depth: u32) -> Self {
        Self::new(prober, lister, per_folder_timeout, max_depth)
            .with_progress(Box::new(NoopProgress))
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the descent from `root` and return the final candidate.
    ///
    /// The candidate's `bytes` is an estimate; `status` says how far it can
    /// be trusted. Fails only when the root has no child directories at all.
    pub async fn run(&self, root: &Path) -> Result<Measurement> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("could not resolve path: {}", root.display()))?;

        let mut siblings = self.lister.list(&root);
        if siblings.is_empty() {
            return Err(NoDirectories(root).into());
        }

        let mut candidate = Measurement::root(root);
        let mut depth = 1u32;

        while depth <= self.max_depth {
            let spinner = self.progress.level_start(depth, siblings.len());
            let mut results = self
                .measurer
                .measure(&siblings, self.per_folder_timeout)
                .await;
            spinner.finish();

            sort_by_size(&mut results);
            self.progress.level_report(depth, &results);

            if let Some(best) = select_best(&results) {
                if !best.path.as_os_str().is_empty() {
                    candidate = best.clone();
                }
            }

            // An enumeration failure here reads as "no children": the
            // descent ends at the candidate rather than aborting the run
            let children = self.lister.list(&candidate.path);
            if children.is_empty() {
                break;
            }
            siblings = children;
            depth += 1;
        }

        Ok(candidate)
    }
}
