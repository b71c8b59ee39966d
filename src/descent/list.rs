//! Child-directory enumeration.

use std::fs;
use std::path::{Path, PathBuf};

/// Enumerates the immediate child directories of a path.
///
/// Implementations must not fail: the controller treats an empty listing as
/// "leaf reached", so IO and permission errors map to an empty vec.
pub trait DirLister: Send + Sync {
    fn list(&self, path: &Path) -> Vec<PathBuf>;
}

/// Filesystem lister. Symlinks to directories are not treated as children.
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(path) else {
            return Vec::new();
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect()
    }
}
