//! srtshift - command-line entry point
//!
//! Reads an SRT file (or standard input), shifts it and writes the result
//! to a file (or standard output). Logs go to standard error.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use srtshift::cli::Args;
use srtshift::config::Config;
use srtshift::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let cwd = std::env::current_dir()?;
    let mut config = Config::locate(args.config.as_ref(), &cwd)?;
    args.apply_shift(&mut config.shift);
    if args.no_bom {
        config.output.write_bom = false;
    }

    let _guard = setup_logging(args.verbose, config.logging.directory.clone())?;

    // Rejected before anything is read or written
    let offset = config.shift.offset()?;
    debug!("Effective offset: {}", offset);

    if let Some(path) = &args.write_config {
        config.save_to_file(path)?;
        info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let workflow = Workflow::new(config);
    workflow
        .run(args.source.as_deref(), args.dest.as_deref(), &offset)
        .await?;

    Ok(())
}

/// Console logging to stderr, plus a daily rolling file when a directory is configured
fn setup_logging(verbose: bool, log_dir: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose);

    let (file_layer, guard) = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let (writer, guard) = non_blocking(rolling::daily(dir, "srtshift.log"));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer.boxed()), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if let Some(dir) = &log_dir {
        debug!("Logging to {}", dir.join("srtshift.log").display());
    }

    Ok(guard)
}
