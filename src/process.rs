//! Main file processor
//!
//! Handles the core logic of:
//! - Scanning the root directory
//! - Extracting capture times
//! - Updating timestamps
//! - Renaming files, with optional content deduplication

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rename::{RenameOutcome, rename_to_capture_time};
use crate::scan::{Candidate, Discovery};
use crate::time::extract_capture_time;
use crate::timestamp::apply_capture_time;
use chrono::NaiveDateTime;
use std::time::{Duration, Instant};
use tracing::{Level, debug, error, info, span, warn};

/// Result of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// Timestamp updated; `rename` is set when the rename step ran
    Processed {
        timestamp: NaiveDateTime,
        rename: Option<Result<RenameOutcome>>,
    },
    /// Left untouched for the given reason
    Skipped(Error),
    /// Extension is reserved and the file was passed through
    Reserved,
}

/// Counters for one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    started: Instant,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            processed: 0,
            skipped: 0,
            started: Instant::now(),
        }
    }

    /// Account for one file
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed { .. } => self.processed += 1,
            FileOutcome::Skipped(_) | FileOutcome::Reserved => self.skipped += 1,
        }
    }

    /// Wall-clock time since the run started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} files processed, {} skipped in {:.2} s",
            self.processed,
            self.skipped,
            self.elapsed().as_secs_f64()
        )
    }
}

/// Main processor for a directory tree
#[derive(Debug)]
pub struct Processor {
    config: Config,
}

impl Processor {
    /// Create a new processor, checking the root directory precondition
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the processing pipeline over every discovered file
    pub fn run(&self) -> RunSummary {
        let _span = span!(Level::INFO, "processor_run").entered();
        let mut summary = RunSummary::new();

        for candidate in Discovery::new(&self.config) {
            let candidate = match candidate {
                Ok(candidate) => candidate,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            let outcome = process_single_file(&candidate, &self.config);
            summary.record(&outcome);
        }

        summary
    }
}

/// Process one candidate: extract, stamp, optionally rename
pub fn process_single_file(candidate: &Candidate, config: &Config) -> FileOutcome {
    let path = candidate.path.as_path();
    let _file_span = span!(Level::DEBUG, "process_file", ?path).entered();

    if config.is_reserved(&candidate.extension) {
        debug!(?path, "Reserved format, passing through");
        return FileOutcome::Reserved;
    }

    let timestamp = match extract_capture_time(path) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            warn!("{} {}", path.display(), e);
            return FileOutcome::Skipped(e);
        }
    };

    if let Err(e) = apply_capture_time(path, &timestamp) {
        warn!("{} {}", path.display(), e);
        return FileOutcome::Skipped(e);
    }

    info!(
        "{} {}",
        path.display(),
        timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    let rename = config.rename.then(|| {
        let result = rename_to_capture_time(path, &timestamp, config.dedup);
        log_rename(path, &result);
        result
    });

    FileOutcome::Processed { timestamp, rename }
}

fn log_rename(path: &std::path::Path, result: &Result<RenameOutcome>) {
    let name_of = |p: &std::path::Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    match result {
        Ok(RenameOutcome::Renamed(target)) => {
            info!("{} renamed to {}", path.display(), name_of(target));
        }
        Ok(RenameOutcome::Deduplicated(target)) => {
            info!(
                "{} renamed to {} with overwrite (dedup)",
                path.display(),
                name_of(target)
            );
        }
        Ok(RenameOutcome::AlreadyNamed) => info!("No need to rename"),
        Ok(RenameOutcome::Collision(target)) => {
            warn!("{} already exists", name_of(target));
        }
        Err(e) => error!("{}", e),
    }
}
