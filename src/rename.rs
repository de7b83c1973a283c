//! Renaming files after their capture time
//!
//! The canonical name is `IMG_YYYYMMDD_HHMMSS` followed by the original
//! extension. When the name is taken, the file is only moved over it if dedup
//! is enabled and both files have identical content.

use crate::error::{Error, Result};
use crate::hash::files_identical;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to a file during the rename step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Moved to the canonical name
    Renamed(PathBuf),
    /// Already carries the canonical name (ignoring case)
    AlreadyNamed,
    /// The canonical name is taken by another file; nothing was moved
    Collision(PathBuf),
    /// The canonical name held identical content and was replaced
    Deduplicated(PathBuf),
}

/// Build the canonical file name for a capture time
///
/// The extension keeps its original case; a file without one gets none.
pub fn canonical_name(path: &Path, timestamp: &NaiveDateTime) -> String {
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("IMG_{}{}", timestamp.format("%Y%m%d_%H%M%S"), extension)
}

/// Rename `path` to its canonical name in the same directory
///
/// On a dedup replace the source path disappears and the target name now
/// refers to the source file, so the permissions and extended attributes
/// of the renamed source are the ones that survive.
pub fn rename_to_capture_time(
    path: &Path,
    timestamp: &NaiveDateTime,
    dedup: bool,
) -> Result<RenameOutcome> {
    let new_name = canonical_name(path, timestamp);
    let current_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if new_name.to_lowercase() == current_name.to_lowercase() {
        return Ok(RenameOutcome::AlreadyNamed);
    }

    let target = path.with_file_name(&new_name);

    if !target.exists() {
        move_file(path, &target)?;
        return Ok(RenameOutcome::Renamed(target));
    }

    if dedup && files_identical(path, &target)? {
        debug!(?path, ?target, "Target has identical content, replacing");
        move_file(path, &target)?;
        return Ok(RenameOutcome::Deduplicated(target));
    }

    Ok(RenameOutcome::Collision(target))
}

/// `fs::rename` replaces an existing target atomically on the platforms we support
fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
