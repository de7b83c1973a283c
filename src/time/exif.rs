//! EXIF capture time field lookup for images

use crate::error::{Error, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// State of the `DateTimeOriginal` field in a file's EXIF data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureField {
    /// The raw, unnormalized field value
    Value(String),
    /// The tag exists but carries no string
    Empty,
    /// The tag is not present
    Missing,
}

/// Read the raw `DateTimeOriginal` value from an image's EXIF metadata
///
/// The container (JPEG, TIFF-based RAW, HEIF, WebP) is detected by
/// kamadak-exif. The first ASCII string of the tag is returned as-is so the
/// caller can normalize producer quirks itself.
pub fn read_capture_field(path: &Path) -> Result<CaptureField> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        trace!(?path, "No DateTimeOriginal tag");
        return Ok(CaptureField::Missing);
    };

    match field.value {
        Value::Ascii(ref strings) => match strings.first() {
            Some(bytes) if !bytes.is_empty() => Ok(CaptureField::Value(
                String::from_utf8_lossy(bytes).into_owned(),
            )),
            _ => Ok(CaptureField::Empty),
        },
        // Not a string at all, let the parser report it
        ref other => Ok(CaptureField::Value(format!("{:?}", other))),
    }
}
