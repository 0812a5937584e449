/// Aggregate result of one rename pass over the dataset.
///
/// Marker and data copies are counted separately because the downstream
/// pipeline reads them as a pair; a subject with only one of the two copied
/// indicates a partial failure worth spotting in the totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    /// `.vmrk` files copied to their derived names.
    pub marker_files_copied: usize,
    /// `.eeg` files copied to their derived names.
    pub data_files_copied: usize,
    /// Subjects skipped (missing `eeg/` dir, missing source, no mapping).
    pub skipped: usize,
    /// Subjects whose copy step hit an I/O failure.
    pub errors: usize,
    /// All subject directories found under the root.
    pub subjects_total: usize,
}

impl RenameSummary {
    /// Total files written by this pass.
    pub fn copied(&self) -> usize {
        self.marker_files_copied + self.data_files_copied
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// Aggregate result of one cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub deleted: usize,
    pub errors: usize,
}

impl CleanupSummary {
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
