//! Discovery of candidate image files
//!
//! Walks the root directory lazily with walkdir and yields every regular
//! file whose extension is in the supported set. Nothing is cached; walking
//! again means building a new [`Discovery`].

use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// A file picked up by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path of the file
    pub path: PathBuf,
    /// Extension without the dot, case preserved
    pub extension: String,
}

/// Lazy iterator over candidate files beneath a root directory
pub struct Discovery<'a> {
    walker: walkdir::IntoIter,
    config: &'a Config,
}

impl<'a> Discovery<'a> {
    /// Start a scan of `config.root`, honoring `config.recursive`
    pub fn new(config: &'a Config) -> Self {
        let mut walker = WalkDir::new(&config.root)
            .min_depth(1)
            .sort_by_file_name();
        if !config.recursive {
            walker = walker.max_depth(1);
        }

        Self {
            walker: walker.into_iter(),
            config,
        }
    }

    fn candidate(&self, path: &Path) -> Option<Candidate> {
        // Follows symlinks, so a link to an image counts and a dangling one does not
        if !path.is_file() {
            return None;
        }
        let ext = path.extension().and_then(|e| e.to_str())?;
        if !self.config.is_supported(ext) {
            trace!(?path, "Unsupported extension");
            return None;
        }
        Some(Candidate {
            path: path.to_path_buf(),
            extension: ext.to_string(),
        })
    }
}

impl Iterator for Discovery<'_> {
    /// Traversal errors are surfaced so the caller can decide to warn and go on
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if let Some(candidate) = self.candidate(entry.path()) {
                return Some(Ok(candidate));
            }
        }
    }
}
