//! Subject-index to target-filename mapping.
//!
//! The offsets below were reverse-engineered from the `DataFile=` /
//! `MarkerFile=` lines inside the shipped `.vhdr` headers. They are an
//! empirical fact about the dataset, not a tunable: do not "simplify" the
//! three COCOA segments into one offset (an earlier fix attempt did, and
//! produced wrong names for subjects 1-56 and 78-96).

/// Naming family of a mapped recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Cocoa,
    Sasa,
}

impl Series {
    /// Literal filename prefix for this series.
    pub fn prefix(self) -> &'static str {
        match self {
            Series::Cocoa => "COCOA",
            Series::Sasa => "SASA",
        }
    }
}

/// Resolve a subject index to its series and series-local number.
///
/// Segments:
/// - sub-001..=sub-056 -> COCOA, index + 12
/// - sub-057..=sub-077 -> COCOA, index + 13
/// - sub-078..=sub-096 -> COCOA, index + 14
/// - sub-111..=sub-127 -> SASA,  index - 96
///
/// Returns `None` for indices outside every segment (97-110, 0, >127);
/// those subjects have no expected filename and must be skipped.
pub fn series_number(subject_index: u32) -> Option<(Series, u32)> {
    match subject_index {
        1..=56 => Some((Series::Cocoa, subject_index + 12)),
        57..=77 => Some((Series::Cocoa, subject_index + 13)),
        78..=96 => Some((Series::Cocoa, subject_index + 14)),
        111..=127 => Some((Series::Sasa, subject_index - 96)),
        _ => None,
    }
}

/// Derive the expected target filename for a subject and file extension,
/// e.g. `map_filename(1, "vmrk")` -> `COCOA_013_VO.vmrk`.
///
/// The extension is copied verbatim; callers pass the source file's actual
/// extension so the pair stays consistent.
pub fn map_filename(subject_index: u32, extension: &str) -> Option<String> {
    let (series, number) = series_number(subject_index)?;
    Some(format!("{}_{:03}_VO.{}", series.prefix(), number, extension))
}

#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod tests;
