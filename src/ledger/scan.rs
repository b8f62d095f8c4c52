//! Directory scanning for fresh review sessions.
//!
//! Lists the immediate children of the review directory using capability
//! scoped filesystem access. Only regular files are included; there is no
//! recursion and no extension filtering. Entries are sorted by name so the
//! ledger order (and therefore batch selection) is deterministic.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::error::CullError;

/// Lists all regular files directly under `directory`, sorted by name.
///
/// Returned paths are joined onto `directory` so they remain meaningful
/// when the persisted ledger is read from elsewhere.
///
/// # Errors
///
/// Returns [`CullError::Initialisation`] when the directory does not exist,
/// is not readable, or contains entries with non-UTF-8 names.
pub(crate) fn list_directory(directory: &Utf8Path) -> Result<Vec<Utf8PathBuf>, CullError> {
    let dir = Dir::open_ambient_dir(directory, ambient_authority())
        .map_err(|e| CullError::initialisation(&format!("cannot open {directory}: {e}")))?;

    let mut files = Vec::new();
    let entries = dir
        .entries()
        .map_err(|e| CullError::initialisation(&format!("cannot read {directory}: {e}")))?;
    for result in entries {
        let entry = result.map_err(|e| CullError::initialisation(&e))?;
        let file_type = entry.file_type().map_err(|e| CullError::initialisation(&e))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().map_err(|e| CullError::initialisation(&e))?;
        files.push(directory.join(name));
    }

    files.sort();
    Ok(files)
}
