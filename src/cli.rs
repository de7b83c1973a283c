//! CLI argument parsing with clap

use crate::config::{Config, resolve_root};
use crate::error::Result;
use clap::Parser;
use std::ffi::OsString;

/// Updates image file timestamps to the EXIF DateTimeOriginal capture time
///
/// Walks the directory (recursively unless told otherwise), sets each
/// image's modification time to when it was taken, and can rename files to
/// IMG_YYYYMMDD_HHMMSS.
#[derive(Parser, Debug)]
#[command(name = "exifdate2fs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start from
    pub directory: String,

    /// Don't recurse through subdirectories (also accepted as -nr)
    #[arg(short = 'n', long)]
    pub no_recursion: bool,

    /// Rename file to IMG_DATE_TIME (IMG_YYYYMMDD_HHMMSS)
    #[arg(long)]
    pub rename: bool,

    /// Allow overwrite if file is the same (checksum)
    #[arg(short, long)]
    pub dedup: bool,

    /// Show every file processed
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Parse the process arguments, accepting the legacy `-nr` spelling
    pub fn parse_args() -> Self {
        Self::parse_from(rewrite_legacy_flags(std::env::args_os()))
    }

    /// Convert CLI arguments to Config
    pub fn to_config(&self) -> Result<Config> {
        Ok(Config {
            root: resolve_root(&self.directory)?,
            recursive: !self.no_recursion,
            rename: self.rename,
            dedup: self.dedup,
            verbose: self.verbose,
            ..Config::default()
        })
    }
}

/// Map `-nr` to `--no-recursion`; clap would read it as `-n -r`
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "-nr" {
                OsString::from("--no-recursion")
            } else {
                arg
            }
        })
        .collect()
}
