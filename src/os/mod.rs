//! Platform-specific module for operating system features.

use std::io;
use std::path::Path;

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub mod unix;

/// Sets a file's creation time to the given Unix time in seconds.
pub type CreationTimeSetter = fn(&Path, i64) -> io::Result<()>;

/// Get the platform's creation-time setter.
/// Returns None on platforms without a settable creation time.
#[cfg(windows)]
pub fn creation_time_setter() -> Option<CreationTimeSetter> {
    Some(windows::set_creation_time)
}

#[cfg(not(windows))]
pub fn creation_time_setter() -> Option<CreationTimeSetter> {
    None
}

/// Check if the current process may write into `path`.
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    unix::is_writable(path)
}

/// Check if the current process may write into `path`.
#[cfg(windows)]
pub fn is_writable(path: &Path) -> bool {
    windows::is_writable(path)
}

#[cfg(not(any(unix, windows)))]
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
