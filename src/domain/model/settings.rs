// Run settings - immutable configuration for one synchronization run

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::model::StartTimeSource;

/// Clip properties written by the property writer
pub const START_TC_PROPERTY: &str = "Start TC";
pub const END_TC_PROPERTY: &str = "End TC";

/// Host property slots offered for the camera label
pub const CAMERA_PROPERTY_CHOICES: [&str; 2] = ["Camera #", "Angle"];

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings collected before analysis starts. Passed by value into the
/// interactor; nothing reads them from global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub start_time_source: StartTimeSource,
    /// Clip property receiving the camera name
    pub camera_property: String,
    /// Carried for the host's multicam clip, not used when computing timecodes
    pub multicam_clip_name: String,
    pub max_clips_per_camera: Option<usize>,
    pub debug: bool,
    /// Also write the legacy `End TC` property
    pub write_end_timecode: bool,
    /// Timeline rate; defaults to the rate of the clip that defines zero time
    pub project_frame_rate: Option<f64>,
    #[serde(with = "duration_secs")]
    pub probe_timeout: Duration,
    pub ffprobe_path: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            start_time_source: StartTimeSource::TagCreationTime,
            camera_property: "Angle".to_string(),
            multicam_clip_name: "multicam".to_string(),
            max_clips_per_camera: None,
            debug: false,
            write_end_timecode: true,
            project_frame_rate: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            ffprobe_path: "ffprobe".to_string(),
        }
    }
}

impl SyncSettings {
    pub fn validate(&self) -> DomainResult<()> {
        if self.camera_property.trim().is_empty() {
            return Err(DomainError::ConfigError(
                "Camera property cannot be empty".to_string(),
            ));
        }
        if self.max_clips_per_camera == Some(0) {
            return Err(DomainError::ConfigError(
                "Clip limit per camera must be at least 1".to_string(),
            ));
        }
        if let Some(rate) = self.project_frame_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DomainError::ConfigError(format!(
                    "Project frame rate must be positive, got {}",
                    rate
                )));
            }
        }
        if self.probe_timeout.is_zero() {
            return Err(DomainError::ConfigError(
                "Probe timeout must be greater than zero".to_string(),
            ));
        }
        if self.ffprobe_path.trim().is_empty() {
            return Err(DomainError::ConfigError(
                "ffprobe path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Partial settings from one configuration layer (file, environment, CLI).
/// Unset fields leave the lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    pub start_time_source: Option<StartTimeSource>,
    pub camera_property: Option<String>,
    pub multicam_clip_name: Option<String>,
    pub max_clips_per_camera: Option<usize>,
    pub debug: Option<bool>,
    pub write_end_timecode: Option<bool>,
    pub project_frame_rate: Option<f64>,
    pub probe_timeout_secs: Option<u64>,
    pub ffprobe_path: Option<String>,
}

impl SettingsOverrides {
    /// Layer `higher` on top of `self`
    pub fn merge(self, higher: SettingsOverrides) -> SettingsOverrides {
        SettingsOverrides {
            start_time_source: higher.start_time_source.or(self.start_time_source),
            camera_property: higher.camera_property.or(self.camera_property),
            multicam_clip_name: higher.multicam_clip_name.or(self.multicam_clip_name),
            max_clips_per_camera: higher.max_clips_per_camera.or(self.max_clips_per_camera),
            debug: higher.debug.or(self.debug),
            write_end_timecode: higher.write_end_timecode.or(self.write_end_timecode),
            project_frame_rate: higher.project_frame_rate.or(self.project_frame_rate),
            probe_timeout_secs: higher.probe_timeout_secs.or(self.probe_timeout_secs),
            ffprobe_path: higher.ffprobe_path.or(self.ffprobe_path),
        }
    }

    pub fn apply_to(self, settings: SyncSettings) -> SyncSettings {
        SyncSettings {
            start_time_source: self.start_time_source.unwrap_or(settings.start_time_source),
            camera_property: self.camera_property.unwrap_or(settings.camera_property),
            multicam_clip_name: self.multicam_clip_name.unwrap_or(settings.multicam_clip_name),
            max_clips_per_camera: self.max_clips_per_camera.or(settings.max_clips_per_camera),
            debug: self.debug.unwrap_or(settings.debug),
            write_end_timecode: self.write_end_timecode.unwrap_or(settings.write_end_timecode),
            project_frame_rate: self.project_frame_rate.or(settings.project_frame_rate),
            probe_timeout: self
                .probe_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(settings.probe_timeout),
            ffprobe_path: self.ffprobe_path.unwrap_or(settings.ffprobe_path),
        }
    }

    /// Number of fields this layer sets
    pub fn len(&self) -> usize {
        [
            self.start_time_source.is_some(),
            self.camera_property.is_some(),
            self.multicam_clip_name.is_some(),
            self.max_clips_per_camera.is_some(),
            self.debug.is_some(),
            self.write_end_timecode.is_some(),
            self.project_frame_rate.is_some(),
            self.probe_timeout_secs.is_some(),
            self.ffprobe_path.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
