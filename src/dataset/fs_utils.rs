use std::fs;
use std::path::Path;

/// Best effort: lift a restrictive mode before removing or replacing a file.
///
/// Windows refuses to delete read-only files, so the attribute must be
/// cleared first. On Unix, unlink is governed by the parent directory's
/// mode, not the file's; the chmod there mirrors what the dataset tooling
/// has always done and costs nothing.
pub(crate) fn make_deletable(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o644)) {
            log::debug!("Could not relax permissions on {}: {e}", path.display());
        }
    }
    #[cfg(not(unix))]
    {
        if let Ok(meta) = fs::metadata(path) {
            let mut perms = meta.permissions();
            if perms.readonly() {
                perms.set_readonly(false);
                if let Err(e) = fs::set_permissions(path, perms) {
                    log::debug!("Could not clear read-only on {}: {e}", path.display());
                }
            }
        }
    }
}
