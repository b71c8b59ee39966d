//! Bounded parallel measurement of sibling directories.
//!
//! One probe task per path, all running concurrently; each is given its own
//! time budget counted from its own launch. Probes that do not finish in time
//! are aborted and reported as `TIMEOUT` instead of blocking the level.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::model::Measurement;

use super::probe::SizeProber;

/// One in-flight probe. The path is kept here as well as in the task closure,
/// so an anomalous completion (panic, abort) can still be attributed.
struct ProbeTask {
    path: PathBuf,
    deadline: Instant,
    handle: JoinHandle<(PathBuf, Result<u64>)>,
}

pub struct Measurer<P> {
    prober: Arc<P>,
}

impl<P: SizeProber> Measurer<P> {
    pub fn new(prober: Arc<P>) -> Self {
        Self { prober }
    }

    /// Measure every path concurrently, waiting up to `timeout` per probe.
    ///
    /// Returns exactly one `Measurement` per input path, whatever each probe
    /// did. No task spawned here survives the call: timed-out probes are
    /// aborted when their deadline passes, and a final sweep aborts anything
    /// still in flight.
    pub async fn measure(&self, paths: &[PathBuf], timeout: Duration) -> Vec<Measurement> {
        let mut tasks: Vec<ProbeTask> = paths
            .iter()
            .map(|path| {
                let prober = Arc::clone(&self.prober);
                let task_path = path.clone();
                let handle = tokio::spawn(async move {
                    let outcome = prober.probe(task_path.clone()).await;
                    (task_path, outcome)
                });
                ProbeTask {
                    path: path.clone(),
                    // Per-task budget, counted from this task's own launch
                    deadline: Instant::now() + timeout,
                    handle,
                }
            })
            .collect();

        let mut results = Vec::with_capacity(tasks.len());
        for task in &mut tasks {
            let measurement = match time::timeout_at(task.deadline, &mut task.handle).await {
                Ok(Ok((path, Ok(bytes)))) => Measurement::ok(path, bytes),
                Ok(Ok((path, Err(_)))) => Measurement::error(path),
                // Task finished without an outcome (panicked); the path is
                // recovered from our own record
                Ok(Err(_)) => Measurement::no_result(task.path.clone()),
                Err(_) => {
                    task.handle.abort();
                    Measurement::timeout(task.path.clone())
                }
            };
            results.push(measurement);
        }

        // Sweep: abort is a no-op on finished tasks, and guarantees nothing
        // spawned by this call keeps running after it returns
        for task in &tasks {
            task.handle.abort();
        }

        results
    }
}
