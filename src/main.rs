//! timecode-sync
//!
//! Writes a shared start timecode to every clip of a multi-camera shoot so the
//! cameras line up on one timeline. Each subfolder of the given folder is one
//! camera; clip creation times come from the container tag or the filesystem.
//!
//! # Usage
//!
//! ```bash
//! timecode-sync sync footage/
//! timecode-sync sync footage/ --yes --offset "Camera2=00:00:01:12" --format json
//! timecode-sync inspect --input footage/Camera1/A001.mp4
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use multicam_timecode::adapters::tracing_log::{init_tracing, parse_log_level, LogFormat};
use multicam_timecode::cli::{commands, Cli, Commands};

/// Main entry point for the timecode-sync CLI application
fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = parse_log_level(&cli.log_level)?;
    let format: LogFormat = cli.log_format.parse()?;
    let log_level = init_tracing(level, format);

    info!("Starting timecode-sync");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let Cli {
        config, command, ..
    } = cli;
    runtime.block_on(async move {
        let config = config.as_deref();
        match command {
            Commands::Sync(args) => {
                info!("Executing sync command");
                commands::sync(args, config, log_level.as_ref()).await
            }
            Commands::Inspect(args) => {
                info!("Executing inspect command");
                commands::inspect(args, config).await
            }
        }
    })
}
