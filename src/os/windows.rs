//! Windows-specific operating system features.

use std::fs::OpenOptions;
use std::io;
use std::os::windows::fs::OpenOptionsExt;
use std::os::windows::io::AsRawHandle;
use std::path::Path;
use winapi::shared::minwindef::FILETIME;
use winapi::um::fileapi::SetFileTime;
use winapi::um::winnt::{FILE_WRITE_ATTRIBUTES, HANDLE};

/// Seconds between 1601-01-01 (FILETIME epoch) and 1970-01-01
const EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// FILETIME counts 100ns intervals
const TICKS_PER_SEC: i64 = 10_000_000;

/// Set the creation time of a file, leaving access and write times alone.
pub fn set_creation_time(path: &Path, unix_secs: i64) -> io::Result<()> {
    let file = OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)?;

    let ticks = (unix_secs + EPOCH_OFFSET_SECS)
        .checked_mul(TICKS_PER_SEC)
        .filter(|t| *t >= 0)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "time out of FILETIME range"))?
        as u64;
    let created = FILETIME {
        dwLowDateTime: ticks as u32,
        dwHighDateTime: (ticks >> 32) as u32,
    };

    let ok = unsafe {
        SetFileTime(
            file.as_raw_handle() as HANDLE,
            &created,
            std::ptr::null(),
            std::ptr::null(),
        )
    };

    if ok != 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Check if a path exists and is not marked read-only.
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
