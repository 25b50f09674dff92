// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::OffsetEdit;

/// Host clip property holding the media file location
pub const FILE_PATH_PROPERTY: &str = "File Path";
/// Host clip property describing the media kind, e.g. "Video + Audio"
pub const TYPE_PROPERTY: &str = "Type";

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe a media file and return its container and stream metadata
    async fn probe(&self, file_path: &Path) -> Result<ProbeOutput, DomainError>;
}

/// Port for file system queries
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Get file metadata
    async fn get_file_metadata(&self, file_path: &Path) -> Result<FileMetadata, DomainError>;
}

/// File metadata
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub created: Option<SystemTime>,
    pub modified: Option<SystemTime>,
}

impl FileMetadata {
    /// Birth time, or modification time on platforms that do not record one
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.created.or(self.modified).map(DateTime::<Utc>::from)
    }
}

/// A clip object owned by the host editor
pub trait ClipHandle: Send + Sync {
    fn name(&self) -> String;

    fn get_property(&self, name: &str) -> Option<String>;

    /// Returns whether the host accepted the value
    fn set_property(&self, name: &str, value: &str) -> bool;
}

/// A media pool folder owned by the host editor
pub trait MediaFolder: Send + Sync {
    fn name(&self) -> String;

    fn subfolders(&self) -> Vec<Arc<dyn MediaFolder>>;

    fn clips(&self) -> Vec<Arc<dyn ClipHandle>>;
}

/// Port for the host editor's project and media pool
pub trait MediaPoolPort: Send + Sync {
    /// Name of the open project, if any
    fn project_name(&self) -> Option<String>;

    /// The single selected folder; `None` when nothing or several are selected
    fn current_folder(&self) -> Option<Arc<dyn MediaFolder>>;
}

/// Clip count of one discovered camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraSummary {
    pub name: String,
    pub clip_count: usize,
}

/// Everything the settings surface shows before analysis
#[derive(Debug, Clone)]
pub struct SettingsRequest {
    pub defaults: SyncSettings,
    pub project_name: String,
    pub folder_name: String,
    pub cameras: Vec<CameraSummary>,
    pub total_clips: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsOutcome {
    Submitted(SyncSettings),
    Cancelled,
}

/// Port for the settings dialog
#[async_trait]
pub trait SettingsPort: Send + Sync {
    async fn request_settings(&self, request: &SettingsRequest) -> Result<SettingsOutcome, DomainError>;
}

/// One row of the offset review
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetReviewEntry {
    pub camera: String,
    pub earliest_clip: String,
    /// Default offset formatted as `HH:MM:SS:FF`
    pub default_offset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OffsetReviewRequest {
    pub frame_rate: f64,
    pub global_zero: DateTime<Utc>,
    pub cameras: Vec<OffsetReviewEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OffsetReviewOutcome {
    /// Values as entered; validation happens in the interactor
    Edited(Vec<OffsetEdit>),
    Cancelled,
}

/// Port for reviewing and editing per-camera offsets.
///
/// Awaited without a timeout: the run resumes only once the user answers.
#[async_trait]
pub trait OffsetReviewPort: Send + Sync {
    async fn review_offsets(&self, request: &OffsetReviewRequest) -> Result<OffsetReviewOutcome, DomainError>;
}

/// Run phases reported to the progress surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    ReadingMetadata,
    WritingProperties,
}

/// Progress and cooperative cancellation
pub trait ProgressPort: Send + Sync {
    /// Called when a phase starts
    fn on_start(&self, phase: SyncPhase, total: usize);

    /// Called after each clip
    fn on_progress(&self, phase: SyncPhase, completed: usize, total: usize, message: &str);

    /// Called when the run completes
    fn on_complete(&self, message: &str);

    /// Polled between cameras and between clips
    fn should_cancel(&self) -> bool;
}

/// Port for logging and observability
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);
}

/// Port for configuration files
#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Load setting overrides from a file
    async fn load_config(&self, file_path: &Path) -> Result<SettingsOverrides, DomainError>;

    /// Location searched when no file is given explicitly
    fn default_config_path(&self) -> PathBuf;
}
