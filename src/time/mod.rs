//! Capture time extraction
//!
//! Reads the EXIF `DateTimeOriginal` field of an image and turns it into a
//! [`NaiveDateTime`]. Producers disagree on separators and padding, so the
//! raw value is normalized before it is parsed with the EXIF layout.

pub mod exif;

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::trace;

pub use self::exif::{CaptureField, read_capture_field};

/// Layout of a normalized capture time
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Value some cameras write when no time was recorded
pub const ZERO_TIMESTAMP: &str = "0000:00:00 00:00:00";

/// Length of a normalized `YYYY:MM:DD HH:MM:SS` value
const NORMALIZED_LEN: usize = 19;

/// Rewrite a raw capture time into `YYYY:MM:DD HH:MM:SS` shape
///
/// `-`, `/`, `.` and `\` become `:`, a space-padded component (`": 1"`)
/// becomes zero-padded (`":01"`), and anything past 19 characters
/// (subseconds, zone suffixes) is dropped.
pub fn normalize_datetime(raw: &str) -> String {
    raw.replace(['-', '/', '.', '\\'], ":")
        .replace(": ", ":0")
        .chars()
        .take(NORMALIZED_LEN)
        .collect()
}

/// Normalize and parse a raw capture time
pub fn parse_capture_time(raw: &str) -> Result<NaiveDateTime> {
    let normalized = normalize_datetime(raw);
    if normalized == ZERO_TIMESTAMP {
        return Err(Error::ZeroTimestamp);
    }

    NaiveDateTime::parse_from_str(&normalized, EXIF_DATETIME_FORMAT).map_err(|source| {
        Error::TimestampParse {
            value: raw.to_string(),
            source,
        }
    })
}

/// Extract the capture time of an image file
pub fn extract_capture_time(path: &Path) -> Result<NaiveDateTime> {
    match read_capture_field(path)? {
        CaptureField::Value(raw) => {
            trace!(?path, %raw, "Found EXIF DateTimeOriginal");
            parse_capture_time(&raw)
        }
        CaptureField::Empty => Err(Error::EmptyCaptureTime),
        CaptureField::Missing => Err(Error::MissingCaptureTime),
    }
}
