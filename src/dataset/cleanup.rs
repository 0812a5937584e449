//! Cleanup pass: deletes previously generated target files anywhere under
//! the dataset root. Destructive and irreversible; sources are never
//! matched by the default pattern, but a caller-supplied pattern can be.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::dataset::fs_utils::make_deletable;
use crate::dataset::walker::ensure_root;
use crate::types::errors::{DatasetError, DatasetResult};
use crate::types::summary::CleanupSummary;

/// Matches exactly the filenames the rename pass produces,
/// e.g. `COCOA_013_VO.vmrk`, `SASA_019_VO.eeg`.
static RE_TARGET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(COCOA|SASA)_\d{3}_VO\..+$").expect("Invalid regex"));

/// Predicate matching the rename pass's own output, for the common
/// "undo what we generated" case.
pub fn default_target_matcher() -> impl Fn(&str) -> bool {
    |name: &str| RE_TARGET_NAME.is_match(name)
}

/// Build a file-name predicate from shell-style glob patterns
/// (`COCOA_*_VO.*`). A name matching any pattern is deleted.
pub fn glob_to_matcher(patterns: &[String]) -> DatasetResult<impl Fn(&str) -> bool> {
    let mut regexes = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let regex = glob_to_regex(pattern).map_err(|e| DatasetError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        regexes.push(regex);
    }
    Ok(move |name: &str| regexes.iter().any(|re| re.is_match(name)))
}

fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut re = String::with_capacity(pattern.len() + 2);
    re.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re)
}

/// Delete all generated target files under `root` (recursive, any depth).
pub fn cleanup(root: &Path) -> DatasetResult<CleanupSummary> {
    cleanup_matching(root, default_target_matcher())
}

/// Delete every file under `root` whose name satisfies `matches`.
///
/// The predicate sees the bare file name, not the path, so it can be unit
/// tested without a filesystem. Per-file failures are logged and counted;
/// the walk always finishes.
pub fn cleanup_matching<F>(root: &Path, matches: F) -> DatasetResult<CleanupSummary>
where
    F: Fn(&str) -> bool,
{
    ensure_root(root)?;

    let mut summary = CleanupSummary::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry during cleanup: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !matches(&name) {
            continue;
        }

        let path = entry.path();
        make_deletable(path);

        match fs::remove_file(path) {
            Ok(()) => {
                log::info!("Deleted: {}", path.display());
                summary.deleted += 1;
            }
            Err(e) => {
                log::error!("Error deleting {}: {e}", path.display());
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/cleanup_tests.rs"]
mod tests;
