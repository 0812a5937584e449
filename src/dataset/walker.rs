//! Subject directory discovery and source-file location.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::errors::{DatasetError, DatasetResult, FileKind};
use crate::SOURCE_STEM_SUFFIX;

/// Compiled regex for subject directory names (`sub-001`, `sub-115`, ...).
static RE_SUBJECT_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sub-(\d+)$").expect("Invalid regex"));

/// One subject directory found under the dataset root.
#[derive(Debug, Clone)]
pub struct SubjectDir {
    /// Absolute path to the subject directory.
    pub path: PathBuf,
    /// Raw directory name as-is from the filesystem.
    pub name: String,
    /// Numeric index parsed from the name.
    pub index: u32,
}

/// Fail fast if the dataset root is unusable. A bad root is the only fatal
/// condition in the whole workflow.
pub fn ensure_root(root: &Path) -> DatasetResult<()> {
    if !root.exists() {
        return Err(DatasetError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DatasetError::RootNotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// List the subject directories immediately under `root`, sorted ascending
/// by numeric index. Non-directories and names outside the `sub-<n>`
/// convention are ignored. Sorted output makes the processing order (and the
/// log) deterministic across platforms.
pub fn scan_subject_dirs(root: &Path) -> DatasetResult<Vec<SubjectDir>> {
    ensure_root(root)?;

    let entries = fs::read_dir(root).map_err(|e| DatasetError::RootUnreadable {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut subjects = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry under root: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        let Some(caps) = RE_SUBJECT_DIR.captures(&name) else {
            continue;
        };

        let index = match caps[1].parse::<u32>() {
            Ok(i) => i,
            Err(_) => {
                log::warn!("Subject index out of range in '{name}', skipping");
                continue;
            }
        };

        subjects.push(SubjectDir { path, name, index });
    }

    subjects.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));

    Ok(subjects)
}

/// Locate the source recording of the given kind inside an `eeg/` directory
/// by its fixed stem suffix (e.g. `*_task-visualoddball_eeg.vmrk`).
///
/// Zero matches yields `Ok(None)`. Multiple matches are resolved by taking
/// the lexicographically smallest file name; the discarded candidates are
/// logged. The dataset guarantees one recording per subject per kind, so an
/// ambiguous match usually means leftover files from a botched manual edit.
pub fn locate_source(eeg_dir: &Path, kind: FileKind) -> std::io::Result<Option<PathBuf>> {
    let suffix = format!("{}.{}", SOURCE_STEM_SUFFIX, kind.extension());

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(eeg_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        if name.ends_with(&suffix) {
            matches.push(path);
        }
    }

    matches.sort();

    if matches.len() > 1 {
        log::warn!(
            "{} candidate {kind} files in {}; keeping '{}', ignoring {} other(s)",
            matches.len(),
            eeg_dir.display(),
            matches[0].display(),
            matches.len() - 1
        );
    }

    Ok(matches.into_iter().next())
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
