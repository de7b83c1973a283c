//! Filesystem timestamp update
//!
//! Capture times carry no zone, so they are read as local time, the same
//! way the camera clock was set.

use crate::error::{Error, Result};
use crate::os;
use chrono::{Duration, Local, LocalResult, NaiveDateTime, TimeZone};
use filetime::FileTime;
use std::path::Path;
use tracing::debug;

/// Convert a local capture time into Unix seconds
///
/// A time inside a DST fold resolves to the earlier instant. A time inside a
/// DST gap does not exist locally and is pushed forward by one hour.
pub fn to_unix_time(timestamp: &NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(timestamp) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.timestamp()),
        LocalResult::None => Local
            .from_local_datetime(&(*timestamp + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.timestamp()),
    }
}

/// Set a file's modification time (and creation time where supported)
///
/// The access time is set to now.
pub fn apply_capture_time(path: &Path, timestamp: &NaiveDateTime) -> Result<()> {
    let unix_secs = to_unix_time(timestamp).ok_or_else(|| Error::SetTimestamp {
        path: path.to_path_buf(),
        message: format!("{} does not exist in the local time zone", timestamp),
    })?;

    filetime::set_file_times(path, FileTime::now(), FileTime::from_unix_time(unix_secs, 0))
        .map_err(|e| Error::SetTimestamp {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(set_created) = os::creation_time_setter() {
        set_created(path, unix_secs).map_err(|e| Error::SetTimestamp {
            path: path.to_path_buf(),
            message: format!("creation time: {}", e),
        })?;
    }

    debug!(?path, unix_secs, "Timestamp updated");
    Ok(())
}
