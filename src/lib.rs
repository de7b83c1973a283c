//! exifdate2fs - Set image file timestamps from EXIF capture time
//!
//! This library provides the pieces of a single pass over a folder tree:
//! - Discovery of image files by extension
//! - EXIF DateTimeOriginal extraction with normalization of malformed values
//! - Modification (and, on Windows, creation) time update
//! - Optional rename to IMG_YYYYMMDD_HHMMSS with SHA3-256 based deduplication

pub mod cli;
pub mod config;
pub mod error;
pub mod hash;
pub mod os;
pub mod process;
pub mod rename;
pub mod scan;
pub mod time;
pub mod timestamp;

#[cfg(test)]
mod test_support;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use process::{FileOutcome, Processor, RunSummary};
pub use rename::RenameOutcome;
pub use scan::{Candidate, Discovery};
