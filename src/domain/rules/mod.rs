// Domain rules - Camera synchronization

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::*;
use crate::domain::model::*;

/// A clip reduced to what synchronization needs
#[derive(Debug, Clone, PartialEq)]
pub struct TimedClip {
    /// Position of the clip among its camera's discovered clips
    pub source_index: usize,
    pub clip_name: String,
    /// Creation time from the selected source
    pub creation_time: DateTime<Utc>,
    pub frame_rate: u32,
    pub frame_count: u64,
}

impl TimedClip {
    pub fn from_record(
        record: &ClipMetadataRecord,
        source: StartTimeSource,
        source_index: usize,
    ) -> DomainResult<Self> {
        Ok(Self {
            source_index,
            clip_name: record.clip_name.clone(),
            creation_time: record.creation_time(source)?,
            frame_rate: record.frame_rate,
            frame_count: record.frame_count,
        })
    }
}

/// Clips of one camera in discovery order
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInput {
    /// Position of the camera among the discovered cameras
    pub source_index: usize,
    pub name: String,
    pub clips: Vec<TimedClip>,
}

/// Per-camera state after the minimum and default offset are known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraPlan {
    pub name: String,
    #[serde(skip)]
    pub source_index: usize,
    /// Index into the camera's input clips
    pub earliest_clip_index: usize,
    pub earliest_clip_name: String,
    pub minimum_creation_time: DateTime<Utc>,
    pub default_offset: Timecode,
    pub offset: Timecode,
    #[serde(skip)]
    clips: Vec<TimedClip>,
}

impl CameraPlan {
    pub fn clips(&self) -> &[TimedClip] {
        &self.clips
    }

    pub fn is_offset_overridden(&self) -> bool {
        self.offset != self.default_offset
    }
}

/// Result of the analysis phase: global zero and one plan per usable camera
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncPlan {
    pub frame_rate: f64,
    pub global_zero: DateTime<Utc>,
    pub cameras: Vec<CameraPlan>,
    /// Cameras dropped for having no usable clip
    pub excluded_cameras: Vec<String>,
}

/// A user edit of one camera's offset, as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetEdit {
    pub camera: String,
    pub value: String,
}

impl OffsetEdit {
    pub fn new(camera: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            camera: camera.into(),
            value: value.into(),
        }
    }
}

/// Final timecodes for one clip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipTimecodes {
    #[serde(skip)]
    pub source_index: usize,
    pub clip_name: String,
    pub creation_time: DateTime<Utc>,
    pub start: Timecode,
    pub end: Option<Timecode>,
}

/// Final timecodes for every clip of one camera, in discovery order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraAssignment {
    #[serde(skip)]
    pub source_index: usize,
    pub camera: String,
    pub offset: Timecode,
    pub clips: Vec<ClipTimecodes>,
}

/// Aligns cameras on a shared zero time and derives per-clip start timecodes.
///
/// Every camera is assumed to have started rolling at about the same moment,
/// so the gap between a camera's earliest clip and the global zero is treated
/// as clock drift and becomes that camera's default offset.
#[derive(Debug, Clone)]
pub struct CameraSynchronizer {
    project_frame_rate: Option<f64>,
    write_end_timecode: bool,
}

impl CameraSynchronizer {
    pub fn new(settings: &SyncSettings) -> Self {
        Self {
            project_frame_rate: settings.project_frame_rate,
            write_end_timecode: settings.write_end_timecode,
        }
    }

    /// Per-camera minimum, global zero and default offsets
    pub fn prepare(&self, cameras: Vec<CameraInput>) -> DomainResult<SyncPlan> {
        let mut excluded_cameras = Vec::new();
        let mut usable = Vec::new();

        for camera in cameras {
            match earliest_clip(&camera.clips) {
                Some(index) => usable.push((camera, index)),
                None => {
                    tracing::warn!(
                        "Camera '{}' has no usable clips and is excluded from synchronization",
                        camera.name
                    );
                    excluded_cameras.push(camera.name);
                }
            }
        }

        // ties between cameras go to the first camera in folder order
        let mut zero: Option<&TimedClip> = None;
        for (camera, index) in &usable {
            let candidate = &camera.clips[*index];
            if zero.map_or(true, |current| candidate.creation_time < current.creation_time) {
                zero = Some(candidate);
            }
        }
        let zero_clip = zero.ok_or(DomainError::NoSynchronizableCameras)?;
        let global_zero = zero_clip.creation_time;
        let frame_rate = self
            .project_frame_rate
            .unwrap_or_else(|| f64::from(zero_clip.frame_rate));

        tracing::debug!(
            "Earliest creation time {} (clip '{}'), timeline rate {} fps",
            global_zero.to_rfc3339(),
            zero_clip.clip_name,
            frame_rate
        );

        let mut plans = Vec::with_capacity(usable.len());
        for (camera, index) in usable {
            let minimum_creation_time = camera.clips[index].creation_time;
            let default_offset =
                Timecode::from_duration(minimum_creation_time - global_zero, frame_rate)?;

            plans.push(CameraPlan {
                earliest_clip_name: camera.clips[index].clip_name.clone(),
                name: camera.name,
                source_index: camera.source_index,
                earliest_clip_index: index,
                minimum_creation_time,
                default_offset,
                offset: default_offset,
                clips: camera.clips,
            });
        }

        Ok(SyncPlan {
            frame_rate,
            global_zero,
            cameras: plans,
            excluded_cameras,
        })
    }

    /// Apply user edits to camera offsets.
    ///
    /// Every edit is parsed before any is applied; one malformed value rejects
    /// the whole set. Blank values keep the default. Returns the names of
    /// edited cameras that are not part of the plan.
    pub fn apply_offset_edits(
        &self,
        plan: &mut SyncPlan,
        edits: &[OffsetEdit],
    ) -> DomainResult<Vec<String>> {
        let mut parsed = Vec::new();
        let mut unknown = Vec::new();

        for edit in edits {
            let Some(index) = plan.cameras.iter().position(|c| c.name == edit.camera) else {
                unknown.push(edit.camera.clone());
                continue;
            };
            if edit.value.trim().is_empty() {
                continue;
            }
            let offset = Timecode::parse(&edit.value, plan.frame_rate).map_err(|e| {
                DomainError::InvalidOffset {
                    camera: edit.camera.clone(),
                    value: edit.value.clone(),
                    reason: e.to_string(),
                }
            })?;
            parsed.push((index, offset));
        }

        for (index, offset) in parsed {
            plan.cameras[index].offset = offset;
        }

        Ok(unknown)
    }

    /// Start (and optionally end) timecode for every clip
    pub fn assign(&self, plan: &SyncPlan) -> DomainResult<Vec<CameraAssignment>> {
        plan.cameras
            .iter()
            .map(|camera| {
                let offset = camera.offset.to_duration();
                let clips = camera
                    .clips
                    .iter()
                    .map(|clip| {
                        let adjusted = clip.creation_time - offset;
                        let start =
                            Timecode::from_duration(adjusted - plan.global_zero, plan.frame_rate)?;
                        let end = if self.write_end_timecode {
                            Some(start.add_frames(clip.frame_count as i64)?)
                        } else {
                            None
                        };
                        Ok(ClipTimecodes {
                            source_index: clip.source_index,
                            clip_name: clip.clip_name.clone(),
                            creation_time: clip.creation_time,
                            start,
                            end,
                        })
                    })
                    .collect::<DomainResult<Vec<_>>>()?;

                Ok(CameraAssignment {
                    source_index: camera.source_index,
                    camera: camera.name.clone(),
                    offset: camera.offset,
                    clips,
                })
            })
            .collect()
    }
}

/// Index of the earliest clip; the first one encountered wins ties
fn earliest_clip(clips: &[TimedClip]) -> Option<usize> {
    let mut earliest: Option<usize> = None;
    for (index, clip) in clips.iter().enumerate() {
        match earliest {
            Some(current) if clips[current].creation_time <= clip.creation_time => {}
            _ => earliest = Some(index),
        }
    }
    earliest
}
