use std::fmt;
use std::path::PathBuf;

use crate::util::format_size;

/// Outcome classification of one directory probe.
///
/// Only `Ok` means `bytes` is a real measured value; every other status
/// means "unknown, treat as zero for comparisons".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Probe completed and returned a byte count (0 is a confirmed-empty value).
    Ok,
    /// Probe completed but reported a failure.
    Error,
    /// Probe did not complete within its time budget and was terminated.
    Timeout,
    /// Probe task finished without producing a usable outcome (panic/abort).
    NoResult,
    /// Synthetic status of the initial candidate, before any measurement.
    Root,
}

impl ProbeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeStatus::Ok => "OK",
            ProbeStatus::Error => "ERROR",
            ProbeStatus::Timeout => "TIMEOUT",
            ProbeStatus::NoResult => "NO_RESULT",
            ProbeStatus::Root => "ROOT",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unit result of probing one directory.
///
/// Also serves as the descent Candidate: the controller starts from a `root`
/// measurement and replaces it wholesale with each level's winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub path: PathBuf,
    pub bytes: u64,
    pub status: ProbeStatus,
}

impl Measurement {
    pub fn ok(path: PathBuf, bytes: u64) -> Self {
        Self { path, bytes, status: ProbeStatus::Ok }
    }

    pub fn error(path: PathBuf) -> Self {
        Self { path, bytes: 0, status: ProbeStatus::Error }
    }

    pub fn timeout(path: PathBuf) -> Self {
        Self { path, bytes: 0, status: ProbeStatus::Timeout }
    }

    pub fn no_result(path: PathBuf) -> Self {
        Self { path, bytes: 0, status: ProbeStatus::NoResult }
    }

    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), bytes: 0, status: ProbeStatus::Root }
    }

    /// Whether `bytes` reflects an actual completed probe.
    pub fn measured(&self) -> bool {
        self.status == ProbeStatus::Ok
    }

    /// Formatted size for reports; "-" when the size was never measured,
    /// so unmeasured directories are not mistaken for empty ones.
    pub fn display_size(&self) -> String {
        if self.measured() {
            format_size(self.bytes)
        } else {
            "-".to_string()
        }
    }
}
