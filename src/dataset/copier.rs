//! Rename pass: copies each subject's source recordings to the filenames
//! the analysis pipeline expects, leaving the sources untouched.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::dataset::fs_utils::make_deletable;
use crate::dataset::walker::{self, SubjectDir};
use crate::mapping;
use crate::types::errors::{DatasetResult, FileKind};
use crate::types::summary::RenameSummary;
use crate::EEG_SUBDIR;

/// Process every subject directory under `root`: locate the marker and data
/// source files, derive the expected names, and copy. Re-running is safe;
/// existing targets are overwritten with identical content.
///
/// Per-subject problems are logged and counted, never fatal. Only an
/// unusable root aborts the run.
pub fn process_all(root: &Path) -> DatasetResult<RenameSummary> {
    let subjects = walker::scan_subject_dirs(root)?;
    log::info!("Found {} subject directories", subjects.len());

    let mut summary = RenameSummary {
        subjects_total: subjects.len(),
        ..Default::default()
    };

    for subject in &subjects {
        log::info!("Processing {}...", subject.name);
        process_subject(subject, &mut summary);
    }

    Ok(summary)
}

fn process_subject(subject: &SubjectDir, summary: &mut RenameSummary) {
    let eeg_dir = subject.path.join(EEG_SUBDIR);
    if !eeg_dir.is_dir() {
        log::warn!("No '{EEG_SUBDIR}' subdirectory in {}", subject.name);
        summary.skipped += 1;
        return;
    }

    let marker = match walker::locate_source(&eeg_dir, FileKind::Marker) {
        Ok(Some(p)) => p,
        Ok(None) => {
            log::warn!("No marker file found in {}", eeg_dir.display());
            summary.skipped += 1;
            return;
        }
        Err(e) => {
            log::error!("Failed to read {}: {e}", eeg_dir.display());
            summary.errors += 1;
            return;
        }
    };

    let data = match walker::locate_source(&eeg_dir, FileKind::Data) {
        Ok(Some(p)) => p,
        Ok(None) => {
            log::warn!("No data file found in {}", eeg_dir.display());
            summary.skipped += 1;
            return;
        }
        Err(e) => {
            log::error!("Failed to read {}: {e}", eeg_dir.display());
            summary.errors += 1;
            return;
        }
    };

    if mapping::series_number(subject.index).is_none() {
        log::warn!(
            "Subject index {} in {} is outside every mapped range, skipping",
            subject.index,
            subject.name
        );
        summary.skipped += 1;
        return;
    }

    // One error per subject: the first failed copy stops this subject and
    // moves on to the next, matching the per-subject batch semantics.
    if let Err(e) = copy_subject_pair(subject, &eeg_dir, &marker, &data, summary) {
        log::error!("Error creating files for {}: {e}", subject.name);
        summary.errors += 1;
    }
}

fn copy_subject_pair(
    subject: &SubjectDir,
    eeg_dir: &Path,
    marker: &Path,
    data: &Path,
    summary: &mut RenameSummary,
) -> std::io::Result<()> {
    copy_as_target(subject, eeg_dir, marker, FileKind::Marker)?;
    summary.marker_files_copied += 1;

    copy_as_target(subject, eeg_dir, data, FileKind::Data)?;
    summary.data_files_copied += 1;

    Ok(())
}

/// Copy one source recording to its derived name inside the same `eeg/`
/// directory, preserving the source's modification time.
fn copy_as_target(
    subject: &SubjectDir,
    eeg_dir: &Path,
    source: &Path,
    kind: FileKind,
) -> std::io::Result<PathBuf> {
    // Use the source file's actual extension so the copied pair can never
    // disagree with what is on disk.
    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| kind.extension().to_string());

    // The caller already verified the index maps; this cannot be None here.
    let Some(target_name) = mapping::map_filename(subject.index, &extension) else {
        return Err(std::io::Error::other(format!(
            "no expected filename for subject index {}",
            subject.index
        )));
    };

    let target = eeg_dir.join(&target_name);
    copy_with_mtime(source, &target)?;
    log::info!(
        "Created {kind}: {} -> {target_name}",
        source.file_name().unwrap_or_default().to_string_lossy()
    );
    Ok(target)
}

/// `fs::copy` plus best-effort carry-over of the source modification time.
///
/// `fs::copy` carries the source's permission bits over, so a read-only
/// source (the dataset ships some) leaves a read-only target that the next
/// run could not reopen for writing. A leftover target from an earlier run
/// is therefore removed and replaced, never rewritten in place.
fn copy_with_mtime(source: &Path, target: &Path) -> std::io::Result<()> {
    if target.exists() {
        make_deletable(target);
        fs::remove_file(target)?;
    }

    fs::copy(source, target)?;

    let meta = fs::metadata(source)?;
    let mtime = FileTime::from_last_modification_time(&meta);
    if let Err(e) = filetime::set_file_mtime(target, mtime) {
        // Content is already in place; a failed timestamp is not worth
        // failing the subject over.
        log::debug!("Could not preserve mtime on {}: {e}", target.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/copier_tests.rs"]
mod tests;
