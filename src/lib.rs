//! Multicam timecode synchronization library
//!
//! Aligns the clips of several cameras on a shared zero time derived from
//! their creation times and writes the resulting start timecodes back to the
//! clips. The host editor, the prober and the dialogs are reached through the
//! traits in [`ports`]; [`adapters`] holds the filesystem, ffprobe and terminal
//! implementations used by the `timecode-sync` binary.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{ClipMetadataRecord, StartTimeSource, SyncSettings, Timecode};
pub use domain::rules::{CameraSynchronizer, SyncPlan};
