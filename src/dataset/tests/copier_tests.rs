use super::*;
use tempfile::TempDir;

/// Create `sub-<index>/eeg/` with a marker + data source pair.
fn add_subject(root: &Path, index: u32) -> PathBuf {
    let name = format!("sub-{index:03}");
    let eeg_dir = root.join(&name).join("eeg");
    fs::create_dir_all(&eeg_dir).unwrap();
    fs::write(
        eeg_dir.join(format!("{name}_task-visualoddball_eeg.vmrk")),
        format!("markers for {name}"),
    )
    .unwrap();
    fs::write(
        eeg_dir.join(format!("{name}_task-visualoddball_eeg.eeg")),
        format!("signal for {name}"),
    )
    .unwrap();
    eeg_dir
}

#[test]
fn test_process_all_creates_cocoa_pair() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 1);

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.marker_files_copied, 1);
    assert_eq!(summary.data_files_copied, 1);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.subjects_total, 1);

    // sub-001 -> COCOA_013, identical byte content to the sources
    let vmrk = fs::read(eeg_dir.join("COCOA_013_VO.vmrk")).unwrap();
    assert_eq!(vmrk, b"markers for sub-001");
    let eeg = fs::read(eeg_dir.join("COCOA_013_VO.eeg")).unwrap();
    assert_eq!(eeg, b"signal for sub-001");

    // Sources are untouched
    assert!(eeg_dir.join("sub-001_task-visualoddball_eeg.vmrk").exists());
    assert!(eeg_dir.join("sub-001_task-visualoddball_eeg.eeg").exists());
}

#[test]
fn test_process_all_creates_sasa_pair() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 115);

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.copied(), 2);
    // 115 - 96 = 19
    assert!(eeg_dir.join("SASA_019_VO.vmrk").exists());
    assert!(eeg_dir.join("SASA_019_VO.eeg").exists());
}

#[test]
fn test_unmapped_subject_is_skipped() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 100);

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.copied(), 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors, 0);

    // Only the two sources remain; nothing was created
    let count = fs::read_dir(&eeg_dir).unwrap().count();
    assert_eq!(count, 2);
}

#[test]
fn test_missing_eeg_dir_does_not_affect_other_subjects() {
    let root = TempDir::new().unwrap();
    add_subject(root.path(), 1);
    fs::create_dir(root.path().join("sub-005")).unwrap(); // no eeg/ inside
    add_subject(root.path(), 115);

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.subjects_total, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.marker_files_copied, 2);
    assert_eq!(summary.data_files_copied, 2);
    assert_eq!(summary.errors, 0);
}

#[test]
fn test_missing_data_file_skips_subject() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 2);
    fs::remove_file(eeg_dir.join("sub-002_task-visualoddball_eeg.eeg")).unwrap();

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.copied(), 0);
    assert_eq!(summary.skipped, 1);
    // The marker copy must not happen if the pair is incomplete
    assert!(!eeg_dir.join("COCOA_014_VO.vmrk").exists());
}

#[test]
fn test_rerun_is_idempotent() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 60);

    let first = process_all(root.path()).unwrap();
    let second = process_all(root.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.errors, 0);

    // sub-060 -> COCOA_073 (second segment, +13)
    let content = fs::read(eeg_dir.join("COCOA_073_VO.vmrk")).unwrap();
    assert_eq!(content, b"markers for sub-060");
}

#[test]
fn test_existing_target_is_overwritten() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 1);
    fs::write(eeg_dir.join("COCOA_013_VO.vmrk"), "stale content").unwrap();

    process_all(root.path()).unwrap();

    let content = fs::read(eeg_dir.join("COCOA_013_VO.vmrk")).unwrap();
    assert_eq!(content, b"markers for sub-001");
}

#[test]
fn test_copy_preserves_modification_time() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 1);

    let source = eeg_dir.join("sub-001_task-visualoddball_eeg.vmrk");
    let stamp = FileTime::from_unix_time(1_600_000_000, 0);
    filetime::set_file_mtime(&source, stamp).unwrap();

    process_all(root.path()).unwrap();

    let target_meta = fs::metadata(eeg_dir.join("COCOA_013_VO.vmrk")).unwrap();
    let target_mtime = FileTime::from_last_modification_time(&target_meta);
    assert_eq!(target_mtime.unix_seconds(), stamp.unix_seconds());
}

#[cfg(unix)]
#[test]
fn test_rerun_with_read_only_sources_stays_clean() {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 1);

    // The dataset ships some recordings read-only; fs::copy carries the
    // mode onto the target, which must not break the overwrite on re-run.
    for name in [
        "sub-001_task-visualoddball_eeg.vmrk",
        "sub-001_task-visualoddball_eeg.eeg",
    ] {
        fs::set_permissions(eeg_dir.join(name), fs::Permissions::from_mode(0o444)).unwrap();
    }

    let first = process_all(root.path()).unwrap();
    assert_eq!(first.errors, 0);
    assert_eq!(first.copied(), 2);

    let second = process_all(root.path()).unwrap();
    assert_eq!(second.errors, 0);
    assert_eq!(second.copied(), 2);

    let content = fs::read(eeg_dir.join("COCOA_013_VO.vmrk")).unwrap();
    assert_eq!(content, b"markers for sub-001");
}

#[test]
fn test_copy_failure_is_counted_and_isolated() {
    let root = TempDir::new().unwrap();
    let eeg_dir = add_subject(root.path(), 1);
    add_subject(root.path(), 115);

    // A directory squatting on the target name makes the copy fail no
    // matter who runs the test.
    fs::create_dir(eeg_dir.join("COCOA_013_VO.vmrk")).unwrap();

    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary.errors, 1);
    assert!(!summary.is_clean());

    // sub-115 is unaffected by sub-001's failure
    assert_eq!(summary.marker_files_copied, 1);
    assert_eq!(summary.data_files_copied, 1);
    assert!(root.path().join("sub-115/eeg/SASA_019_VO.vmrk").exists());
    assert!(root.path().join("sub-115/eeg/SASA_019_VO.eeg").exists());
}

#[test]
fn test_empty_root_is_a_clean_run() {
    let root = TempDir::new().unwrap();
    let summary = process_all(root.path()).unwrap();

    assert_eq!(summary, RenameSummary::default());
}
