//! Atomic file output.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error_handling::ConvertError;

/// Writes `contents` to `path`, replacing any existing file.
///
/// The data goes to a temporary file in the destination directory first and
/// is renamed into place only after it was fully written, so a failed write
/// never leaves a truncated output behind.
///
/// The temporary file is created owner-only, so before the rename it takes the
/// permissions of the file it replaces, or 0644 on unix for a new file.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(dir, e))?;
    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| ConvertError::io(path, e))?;

    let permissions = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ConvertError::io(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

// Temp files are not restricted outside unix.
#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
