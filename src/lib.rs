pub mod dataset;
pub mod mapping;
pub mod types;

/// Fixed name of the per-subject recordings subdirectory.
pub const EEG_SUBDIR: &str = "eeg";

/// Stem suffix of the source recordings as shipped in the dataset,
/// e.g. `sub-001_task-visualoddball_eeg.vmrk`.
pub const SOURCE_STEM_SUFFIX: &str = "_task-visualoddball_eeg";
