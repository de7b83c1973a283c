//! exifdate2fs - Update image file timestamps from EXIF DateTimeOriginal
//!
//! Walks a directory, sets every image's modification time to its capture
//! time and optionally renames it to IMG_YYYYMMDD_HHMMSS.

use anyhow::Result;
use exifdate2fs::{Cli, Processor};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// CLI Output Module
mod cli_output {
    //! Colored console output for the banner and the run summary.

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI theme colors
    pub struct CliTheme;

    impl CliTheme {
        pub const SUCCESS: Color = Color::Green;
        pub const WARNING: Color = Color::Yellow;
        pub const HINT: Color = Color::DarkGrey;
        pub const ACCENT: Color = Color::Cyan;
    }

    /// Print the program name and version
    pub fn print_banner(name: &str, version: &str) {
        let _ = stdout().execute(Print(style(name).with(CliTheme::ACCENT).bold()));
        let _ = stdout().execute(Print(format!(" {}\n", version)));
    }

    /// Print a hint line
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// Print the final counts on one line
    pub fn print_summary(processed: usize, skipped: usize, secs: f64) {
        let processed = style(processed.to_string()).with(CliTheme::SUCCESS).bold();
        let skipped = style(skipped.to_string()).with(CliTheme::WARNING).bold();
        let elapsed = style(format!("{:.2} s", secs)).with(CliTheme::HINT);

        let _ = stdout().execute(Print(processed));
        let _ = stdout().execute(Print(" files processed, "));
        let _ = stdout().execute(Print(skipped));
        let _ = stdout().execute(Print(" skipped in "));
        let _ = stdout().execute(Print(elapsed));
        let _ = stdout().execute(Print("\n"));
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    // Keep the guard alive until every log line is flushed
    let _guard = setup_logging(&cli);

    cli_output::print_banner("ExifDate2FS", env!("CARGO_PKG_VERSION"));

    let config = cli.to_config()?;
    cli_output::print_hint(&format!(
        "Processing {} starting from {}",
        if config.recursive { "recursively" } else { "non-recursively" },
        config.root.display()
    ));

    let processor = match Processor::new(config) {
        Ok(processor) => processor,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let summary = processor.run();
    info!("{}", summary.summary());
    cli_output::print_summary(
        summary.processed,
        summary.skipped,
        summary.elapsed().as_secs_f64(),
    );

    Ok(ExitCode::SUCCESS)
}

/// Setup console logging on stderr
///
/// Without `--verbose` only warnings and errors are shown. `RUST_LOG`
/// overrides either default.
fn setup_logging(cli: &Cli) -> WorkerGuard {
    let level = if cli.verbose { Level::INFO } else { Level::WARN };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_writer(non_blocking),
            )
            .init();
    }

    guard
}
