//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::domain::errors::DomainError;
use crate::domain::model::{SettingsOverrides, StartTimeSource};
use crate::domain::rules::OffsetEdit;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Folder holding one subfolder per camera
    pub folder: PathBuf,

    /// Project name shown in dialogs and the report (default: folder name)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Creation time used for each clip (TAG_CREATION_TIME, OS_FILE_CREATION_TIME)
    #[arg(long)]
    pub start_time_source: Option<StartTimeSource>,

    /// Clip property receiving the camera name ("Angle", "Camera #")
    #[arg(long)]
    pub camera_property: Option<String>,

    /// Name for the multicam clip
    #[arg(long)]
    pub multicam_name: Option<String>,

    /// Only use the first N clips of each camera
    #[arg(long)]
    pub max_clips: Option<usize>,

    /// Log per-clip creation times
    #[arg(long)]
    pub debug: bool,

    /// Do not write the End TC property
    #[arg(long)]
    pub no_end_timecode: bool,

    /// Timeline frame rate (default: rate of the earliest clip)
    #[arg(long)]
    pub frame_rate: Option<f64>,

    /// Seconds allowed for probing one clip
    #[arg(long)]
    pub probe_timeout: Option<u64>,

    /// ffprobe executable
    #[arg(long)]
    pub ffprobe: Option<String>,

    /// Proceed without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Review and edit per-camera offsets before timecodes are written
    #[arg(long)]
    pub review_offsets: bool,

    /// Offset for one camera, as CAMERA=HH:MM:SS:FF (repeatable)
    #[arg(long = "offset", value_name = "CAMERA=TC", requires = "yes")]
    pub offsets: Vec<String>,

    /// Report format (text, json, yaml)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl SyncArgs {
    /// Settings given on the command line
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            start_time_source: self.start_time_source,
            camera_property: self.camera_property.clone(),
            multicam_clip_name: self.multicam_name.clone(),
            max_clips_per_camera: self.max_clips,
            debug: self.debug.then_some(true),
            write_end_timecode: self.no_end_timecode.then_some(false),
            project_frame_rate: self.frame_rate,
            probe_timeout_secs: self.probe_timeout,
            ffprobe_path: self.ffprobe.clone(),
        }
    }

    /// Split `--offset CAMERA=TC` values. Timecodes are validated later,
    /// against the timeline frame rate.
    pub fn offset_edits(&self) -> Result<Vec<OffsetEdit>, DomainError> {
        self.offsets
            .iter()
            .map(|raw| {
                raw.split_once('=')
                    .filter(|(camera, _)| !camera.trim().is_empty())
                    .map(|(camera, value)| OffsetEdit::new(camera.trim(), value.trim()))
                    .ok_or_else(|| {
                        DomainError::BadArgs(format!(
                            "Invalid offset '{}': expected CAMERA=HH:MM:SS:FF",
                            raw
                        ))
                    })
            })
            .collect()
    }
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// ffprobe executable
    #[arg(long)]
    pub ffprobe: Option<String>,

    /// Seconds allowed for probing
    #[arg(long)]
    pub probe_timeout: Option<u64>,
}

impl InspectArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            probe_timeout_secs: self.probe_timeout,
            ffprobe_path: self.ffprobe.clone(),
            ..SettingsOverrides::default()
        }
    }
}
