//! CLI module for timecode-sync
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{InspectArgs, SyncArgs};

/// Multicam timecode synchronizer
///
/// Derives a shared start timecode for every clip of a multi-camera shoot from
/// the clips' creation times, so the cameras line up on one timeline.
#[derive(Parser, Debug)]
#[command(name = "timecode-sync")]
#[command(about = "Align multi-camera footage by writing start timecodes derived from creation times")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "TIMECODE_SYNC_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Log output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub log_format: String,

    /// Configuration file (default: timecode_sync.toml when present)
    #[arg(long, env = "TIMECODE_SYNC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write synchronized timecodes to every clip of a multicam folder
    Sync(SyncArgs),
    /// Show the metadata read from one media file
    Inspect(InspectArgs),
}
