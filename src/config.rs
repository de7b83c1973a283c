//! Run configuration for exifdate2fs

use crate::error::{Error, Result};
use crate::os;
use std::path::{Component, Path, PathBuf};

/// Configuration for a single pass over a directory tree
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to scan (absolute)
    pub root: PathBuf,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Rename files to IMG_YYYYMMDD_HHMMSS after updating their timestamp
    pub rename: bool,

    /// Allow overwriting a rename target whose content is identical
    pub dedup: bool,

    /// Verbose output
    pub verbose: bool,

    /// Extensions whose EXIF capture time is applied
    pub image_extensions: Vec<String>,

    /// Extensions that are recognized but left alone
    pub reserved_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: true,
            rename: false,
            dedup: false,
            verbose: false,
            image_extensions: vec![
                "jpg".into(),
                "jpeg".into(),
                "tif".into(),
                "tiff".into(),
                "webp".into(),
                "heic".into(),
                "heif".into(),
                "cr2".into(),
            ],
            reserved_extensions: vec!["cr3".into(), "jxl".into()],
        }
    }
}

impl Config {
    /// Check if a file extension is a format we read capture time from
    pub fn is_image(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.image_extensions.iter().any(|e| e == &ext_lower)
    }

    /// Check if a file extension is reserved for later special handling
    pub fn is_reserved(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.reserved_extensions.iter().any(|e| e == &ext_lower)
    }

    /// Check if a file extension is picked up by the scan at all
    pub fn is_supported(&self, ext: &str) -> bool {
        self.is_image(ext) || self.is_reserved(ext)
    }

    /// Check the root directory precondition
    ///
    /// The root must exist, be a directory and be writable. A failure here is
    /// the only fatal error of a run.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() || !os::is_writable(&self.root) {
            return Err(Error::RootDirectory {
                path: self.root.clone(),
                reason: "No such directory or not writable".into(),
            });
        }
        Ok(())
    }
}

/// Turn the raw directory argument into an absolute root path
///
/// Paths pasted from a Windows shell as `"C:\Photos\"` reach us as
/// `C:\Photos"`, so trailing quotes go first, then trailing separators.
pub fn resolve_root(raw: &str) -> Result<PathBuf> {
    let trimmed = raw.trim_end_matches('"');
    let trimmed = trim_trailing_separators(trimmed);
    let trimmed = if trimmed.is_empty() { "." } else { trimmed };
    Ok(std::path::absolute(Path::new(trimmed))?)
}

fn trim_trailing_separators(s: &str) -> &str {
    let stripped = s.trim_end_matches(std::path::is_separator);
    if stripped.len() == s.len() {
        return s;
    }
    if stripped.is_empty() || is_drive_prefix(stripped) {
        // Keep the root itself, `/` or `C:\`
        &s[..stripped.len() + 1]
    } else {
        stripped
    }
}

/// `C:` on its own means the drive's current directory, not its root
fn is_drive_prefix(s: &str) -> bool {
    let mut components = Path::new(s).components();
    matches!(components.next(), Some(Component::Prefix(_))) && components.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_sets_are_case_insensitive() {
        let config = Config::default();
        for ext in ["jpg", "JPG", "Jpeg", "tif", "TIFF", "webp", "HEIC", "heif", "cr2"] {
            assert!(config.is_image(ext), "{ext} should be an image");
            assert!(config.is_supported(ext));
            assert!(!config.is_reserved(ext));
        }
        for ext in ["cr3", "JXL"] {
            assert!(config.is_reserved(ext));
            assert!(config.is_supported(ext));
            assert!(!config.is_image(ext));
        }
        for ext in ["png", "mp4", "txt", ""] {
            assert!(!config.is_supported(ext));
        }
    }

    #[test]
    fn test_resolve_root_strips_quotes_and_separators() {
        let dir = TempDir::new().unwrap();
        let raw = format!("{}{}\"", dir.path().display(), std::path::MAIN_SEPARATOR);

        let resolved = resolve_root(&raw).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_resolve_root_makes_relative_paths_absolute() {
        let resolved = resolve_root("some/relative/dir").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/relative/dir"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_root_keeps_filesystem_root() {
        assert_eq!(resolve_root("/").unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_trim_trailing_separators() {
        assert_eq!(trim_trailing_separators("photos"), "photos");
        assert_eq!(trim_trailing_separators("photos//"), "photos");
        assert_eq!(trim_trailing_separators(""), "");
    }

    #[cfg(windows)]
    #[test]
    fn test_drive_root_keeps_separator() {
        assert_eq!(trim_trailing_separators("C:\\"), "C:\\");
        assert_eq!(trim_trailing_separators("C:\\\\"), "C:\\");
        assert_eq!(trim_trailing_separators("C:\\Photos\\"), "C:\\Photos");
        assert_eq!(resolve_root("C:\\\"").unwrap(), PathBuf::from("C:\\"));
    }

    #[test]
    fn test_validate_accepts_writable_directory() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            root: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            root: dir.path().join("missing"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_validate_rejects_plain_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("photo.jpg");
        std::fs::write(&file, b"not a dir").unwrap();
        let config = Config {
            root: file,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().is_fatal());
    }
}
