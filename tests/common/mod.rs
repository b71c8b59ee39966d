// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use dirhog::descent::{DirLister, SizeProber};
use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// What a scripted probe does for a given path
#[derive(Clone)]
pub enum Script {
    /// Complete immediately with this byte count
    Size(u64),
    /// Complete immediately with a failure
    Fail,
    /// Never complete within any sane test timeout
    Hang,
    /// Panic mid-probe (exercises the anomalous-completion path)
    Panic,
}

/// Prober that follows a per-path script. Unknown paths measure as 0 bytes.
/// Counts how many probes were started, so tests can assert round counts.
pub struct ScriptedProber {
    scripts: HashMap<PathBuf, Script>,
    calls: AtomicUsize,
}

impl ScriptedProber {
    pub fn new(scripts: impl IntoIterator<Item = (PathBuf, Script)>) -> Self {
        Self {
            scripts: scripts.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SizeProber for ScriptedProber {
    fn probe(&self, path: PathBuf) -> impl Future<Output = Result<u64>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self.scripts.get(&path).cloned();
        async move {
            match script {
                Some(Script::Size(bytes)) => Ok(bytes),
                Some(Script::Fail) => Err(anyhow!("scripted failure for {}", path.display())),
                Some(Script::Hang) => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(0)
                }
                Some(Script::Panic) => panic!("scripted panic for {}", path.display()),
                None => Ok(0),
            }
        }
    }
}

/// Lister serving a fixed parent -> children map; anything else is a leaf
pub struct MapLister {
    map: HashMap<PathBuf, Vec<PathBuf>>,
}

impl MapLister {
    pub fn new(map: impl IntoIterator<Item = (PathBuf, Vec<PathBuf>)>) -> Self {
        Self { map: map.into_iter().collect() }
    }
}

impl DirLister for MapLister {
    fn list(&self, path: &Path) -> Vec<PathBuf> {
        self.map.get(path).cloned().unwrap_or_default()
    }
}

/// Lister that always finds exactly one deeper child, never a leaf
pub struct InfiniteLister;

impl DirLister for InfiniteLister {
    fn list(&self, path: &Path) -> Vec<PathBuf> {
        vec![path.join("deeper")]
    }
}

/// Lister with no children anywhere
pub struct EmptyLister;

impl DirLister for EmptyLister {
    fn list(&self, _path: &Path) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Write a file of `len` bytes at `rel` under `root`, creating parent dirs
pub fn write_file(root: &Path, rel: &str, len: usize) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, vec![b'x'; len]).unwrap();
}

/// Canonical root of a temp dir (the controller canonicalizes its root,
/// so fake listers must be keyed on the canonical form)
pub fn canon(dir: &TempDir) -> PathBuf {
    dir.path().canonicalize().unwrap()
}
