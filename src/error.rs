//! Error types for exifdate2fs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for exifdate2fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for exifdate2fs
///
/// Only [`Error::RootDirectory`] aborts a run. Everything else is scoped to
/// a single file: the driver logs it, counts the file as skipped and moves on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{reason}: {}", path.display())]
    RootDirectory { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read EXIF data: {message}")]
    ExifRead { path: PathBuf, message: String },

    #[error("no EXIF DateTimeOriginal")]
    MissingCaptureTime,

    #[error("EXIF DateTimeOriginal has no value")]
    EmptyCaptureTime,

    #[error("EXIF date processing error: {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("EXIF DateTimeOriginal is zero, no timestamp recorded")]
    ZeroTimestamp,

    #[error("Failed to set timestamp: {message}")]
    SetTimestamp { path: PathBuf, message: String },

    #[error("Error renaming {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File hash computation failed for {}: {message}", path.display())]
    HashComputation { path: PathBuf, message: String },

    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    /// Whether this error ends the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::RootDirectory { .. })
    }
}
