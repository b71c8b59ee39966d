//! Size probing: total byte count of a directory subtree.

use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use tokio::fs;

/// A unit of work that computes the total file size under one directory.
///
/// Probes run as independent tokio tasks that the measurer may abort at any
/// time, so implementations must hit await points regularly and hold no
/// resources that outlive the task (scoped handles only).
pub trait SizeProber: Send + Sync + 'static {
    fn probe(&self, path: PathBuf) -> impl Future<Output = Result<u64>> + Send;
}

/// Filesystem prober: iterative traversal over `tokio::fs::read_dir`.
pub struct FsProber;

impl SizeProber for FsProber {
    fn probe(&self, path: PathBuf) -> impl Future<Output = Result<u64>> + Send {
        async move {
            let mut total = 0u64;
            let mut pending = vec![path.clone()];
            let mut at_root = true;

            while let Some(dir) = pending.pop() {
                let mut entries = match fs::read_dir(&dir).await {
                    Ok(entries) => entries,
                    Err(err) if at_root => {
                        // The probed directory itself is unreadable: genuine failure
                        return Err(err)
                            .with_context(|| format!("cannot read {}", path.display()));
                    }
                    // Unreadable subtree contributes zero bytes
                    Err(_) => continue,
                };
                at_root = false;

                while let Ok(Some(entry)) = entries.next_entry().await {
                    let Ok(file_type) = entry.file_type().await else {
                        continue;
                    };
                    // file_type does not follow symlinks, so link cycles
                    // never enter the pending stack
                    if file_type.is_dir() {
                        pending.push(entry.path());
                    } else if file_type.is_file() {
                        if let Ok(meta) = entry.metadata().await {
                            total += meta.len();
                        }
                    }
                }
            }

            Ok(total)
        }
    }
}
