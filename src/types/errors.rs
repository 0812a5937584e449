use std::path::PathBuf;
use thiserror::Error;

/// Fatal startup errors. Everything else in a run (missing subdirectory,
/// missing source file, unmapped subject index, a failed copy or delete) is
/// local to one subject or file and is accumulated into the run summary
/// instead of aborting the batch.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset root does not exist: {0}")]
    RootMissing(PathBuf),
    #[error("Dataset root is not a directory: {0}")]
    RootNotADirectory(PathBuf),
    #[error("Failed to read dataset root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// The two recording file types paired per subject session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Timestamped event annotations (`.vmrk`).
    Marker,
    /// Raw signal data (`.eeg`).
    Data,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Marker => "vmrk",
            FileKind::Data => "eeg",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Marker => write!(f, "marker"),
            FileKind::Data => write!(f, "data"),
        }
    }
}

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
