// Sync interactor - Orchestrates the multicam timecode synchronization use case

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::{render_structured, ClipMetadataExtractor, ClipPropertyWriter, ReportFormat};
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Interactor for the synchronization use case
pub struct SyncInteractor {
    media_pool_port: Arc<dyn MediaPoolPort>,
    settings_port: Arc<dyn SettingsPort>,
    offset_review_port: Arc<dyn OffsetReviewPort>,
    progress_port: Arc<dyn ProgressPort>,
    log_port: Arc<dyn LogPort>,
    extractor: ClipMetadataExtractor,
}

/// A camera subfolder and its video clips in discovery order
struct DiscoveredCamera {
    name: String,
    clips: Vec<Arc<dyn ClipHandle>>,
}

impl SyncInteractor {
    /// Create new sync interactor with injected ports
    pub fn new(
        media_pool_port: Arc<dyn MediaPoolPort>,
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        settings_port: Arc<dyn SettingsPort>,
        offset_review_port: Arc<dyn OffsetReviewPort>,
        progress_port: Arc<dyn ProgressPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        let extractor = ClipMetadataExtractor::new(probe_port, fs_port, Arc::clone(&log_port));
        Self {
            media_pool_port,
            settings_port,
            offset_review_port,
            progress_port,
            log_port,
            extractor,
        }
    }

    /// Run discovery, analysis and the write phase.
    ///
    /// Fatal conditions return before any clip property is written.
    pub async fn execute(&self, request: SyncRequest) -> Result<SyncResponse, DomainError> {
        let project_name = self
            .media_pool_port
            .project_name()
            .ok_or(DomainError::NoProject)?;
        let folder = self
            .media_pool_port
            .current_folder()
            .ok_or(DomainError::NoFolderSelected)?;
        let folder_name = folder.name();

        self.log_port
            .info(&format!(
                "Synchronizing cameras of folder '{}' in project '{}'",
                folder_name, project_name
            ))
            .await;

        let mut cameras = self.discover_cameras(folder.as_ref())?;
        let total_clips: usize = cameras.iter().map(|c| c.clips.len()).sum();
        if total_clips == 0 {
            return Err(DomainError::NoClips);
        }

        let settings_request = SettingsRequest {
            defaults: request.defaults.clone(),
            project_name: project_name.clone(),
            folder_name: folder_name.clone(),
            cameras: cameras
                .iter()
                .map(|camera| CameraSummary {
                    name: camera.name.clone(),
                    clip_count: camera.clips.len(),
                })
                .collect(),
            total_clips,
        };
        let settings = match self.settings_port.request_settings(&settings_request).await? {
            SettingsOutcome::Submitted(settings) => settings,
            SettingsOutcome::Cancelled => return Err(DomainError::Cancelled),
        };
        settings.validate()?;
        if !CAMERA_PROPERTY_CHOICES.contains(&settings.camera_property.as_str()) {
            self.log_port
                .warn(&format!(
                    "Camera property '{}' is not one of {}; the host may reject it",
                    settings.camera_property,
                    CAMERA_PROPERTY_CHOICES.join(", ")
                ))
                .await;
        }

        if let Some(limit) = settings.max_clips_per_camera {
            for camera in &mut cameras {
                if camera.clips.len() > limit {
                    self.log_port
                        .info(&format!(
                            "Camera '{}': using the first {} of {} clips",
                            camera.name,
                            limit,
                            camera.clips.len()
                        ))
                        .await;
                    camera.clips.truncate(limit);
                }
            }
        }

        let (inputs, skipped_clips) = self.read_metadata(&cameras, &settings).await?;

        let synchronizer = CameraSynchronizer::new(&settings);
        let mut plan = synchronizer.prepare(inputs)?;
        self.warn_frame_rate_mismatches(&plan).await;

        if request.review_offsets {
            self.review_offsets(&synchronizer, &mut plan).await?;
        }
        for camera in &plan.cameras {
            let message = if camera.offset.is_zero() {
                format!(
                    "Camera '{}': no offset (earliest clip '{}')",
                    camera.name, camera.earliest_clip_name
                )
            } else {
                format!(
                    "Camera '{}': offset {} (earliest clip '{}')",
                    camera.name, camera.offset, camera.earliest_clip_name
                )
            };
            self.log_port.info(&message).await;
        }

        let assignments = synchronizer.assign(&plan)?;

        if self.progress_port.should_cancel() {
            return Err(DomainError::Cancelled);
        }

        let writer = ClipPropertyWriter::new(Arc::clone(&self.log_port), &settings);
        let camera_reports = self
            .write_properties(&writer, &cameras, &plan, assignments)
            .await;

        let clips_written = camera_reports.iter().map(|c| c.clips.len()).sum::<usize>();
        let failed_writes = camera_reports
            .iter()
            .flat_map(|c| &c.clips)
            .map(|clip| clip.failed_properties.len())
            .sum::<usize>();

        let summary = format!(
            "Timecodes set on {} clip(s) across {} camera(s), {} clip(s) skipped",
            clips_written,
            camera_reports.len(),
            skipped_clips.len()
        );
        self.progress_port.on_complete(&summary);
        if failed_writes > 0 {
            self.log_port
                .warn(&format!("{} property write(s) were rejected", failed_writes))
                .await;
        }

        Ok(SyncResponse {
            project_name,
            folder_name,
            frame_rate: plan.frame_rate,
            global_zero: plan.global_zero,
            settings,
            cameras: camera_reports,
            excluded_cameras: plan.excluded_cameras,
            skipped_clips,
            clips_written,
            failed_writes,
        })
    }

    /// One camera per subfolder; clips whose `Type` mentions video
    fn discover_cameras(&self, folder: &dyn MediaFolder) -> Result<Vec<DiscoveredCamera>, DomainError> {
        let subfolders = folder.subfolders();
        if subfolders.is_empty() {
            return Err(DomainError::NoSubfolders {
                folder: folder.name(),
            });
        }

        Ok(subfolders
            .iter()
            .map(|subfolder| DiscoveredCamera {
                name: subfolder.name(),
                clips: subfolder
                    .clips()
                    .into_iter()
                    .filter(|clip| {
                        clip.get_property(TYPE_PROPERTY)
                            .is_some_and(|kind| kind.contains("Video"))
                    })
                    .collect(),
            })
            .collect())
    }

    /// Extract metadata for every clip. Per-clip failures are collected and
    /// the clip is left out of its camera.
    async fn read_metadata(
        &self,
        cameras: &[DiscoveredCamera],
        settings: &SyncSettings,
    ) -> Result<(Vec<CameraInput>, Vec<SkippedClip>), DomainError> {
        let total: usize = cameras.iter().map(|c| c.clips.len()).sum();
        self.progress_port.on_start(SyncPhase::ReadingMetadata, total);

        let mut inputs = Vec::with_capacity(cameras.len());
        let mut skipped = Vec::new();
        let mut completed = 0;

        for (camera_index, camera) in cameras.iter().enumerate() {
            if self.progress_port.should_cancel() {
                return Err(DomainError::Cancelled);
            }

            let mut clips = Vec::with_capacity(camera.clips.len());
            for (clip_index, clip) in camera.clips.iter().enumerate() {
                if self.progress_port.should_cancel() {
                    return Err(DomainError::Cancelled);
                }

                let clip_name = clip.name();
                match self
                    .read_clip(clip.as_ref(), &clip_name, clip_index, settings)
                    .await
                {
                    Ok(timed) => clips.push(timed),
                    Err(e) if e.is_recoverable() => {
                        self.log_port
                            .warn(&format!(
                                "Skipping clip '{}' of camera '{}': {}",
                                clip_name, camera.name, e
                            ))
                            .await;
                        skipped.push(SkippedClip {
                            camera: camera.name.clone(),
                            clip_name,
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => return Err(e),
                }

                completed += 1;
                self.progress_port.on_progress(
                    SyncPhase::ReadingMetadata,
                    completed,
                    total,
                    &format!(
                        "Reading clips information (Camera '{}')... ({} of {})",
                        camera.name, completed, total
                    ),
                );
            }

            inputs.push(CameraInput {
                source_index: camera_index,
                name: camera.name.clone(),
                clips,
            });
        }

        Ok((inputs, skipped))
    }

    async fn read_clip(
        &self,
        clip: &dyn ClipHandle,
        clip_name: &str,
        clip_index: usize,
        settings: &SyncSettings,
    ) -> Result<TimedClip, DomainError> {
        let file_path = clip
            .get_property(FILE_PATH_PROPERTY)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                DomainError::FsFail(format!("Clip '{}' has no '{}' property", clip_name, FILE_PATH_PROPERTY))
            })?;

        let record = self.extractor.extract(clip_name, &file_path).await?;
        TimedClip::from_record(&record, settings.start_time_source, clip_index)
    }

    async fn warn_frame_rate_mismatches(&self, plan: &SyncPlan) {
        for camera in &plan.cameras {
            for clip in camera.clips() {
                if (f64::from(clip.frame_rate) - plan.frame_rate).abs() > f64::EPSILON {
                    self.log_port
                        .warn(&format!(
                            "Clip '{}' of camera '{}' is {} fps, timecodes use {} fps",
                            clip.clip_name, camera.name, clip.frame_rate, plan.frame_rate
                        ))
                        .await;
                }
            }
        }
    }

    async fn review_offsets(
        &self,
        synchronizer: &CameraSynchronizer,
        plan: &mut SyncPlan,
    ) -> Result<(), DomainError> {
        let review = OffsetReviewRequest {
            frame_rate: plan.frame_rate,
            global_zero: plan.global_zero,
            cameras: plan
                .cameras
                .iter()
                .map(|camera| OffsetReviewEntry {
                    camera: camera.name.clone(),
                    earliest_clip: camera.earliest_clip_name.clone(),
                    default_offset: camera.default_offset.to_string(),
                })
                .collect(),
        };

        let edits = match self.offset_review_port.review_offsets(&review).await? {
            OffsetReviewOutcome::Edited(edits) => edits,
            OffsetReviewOutcome::Cancelled => return Err(DomainError::Cancelled),
        };

        let unknown = synchronizer.apply_offset_edits(plan, &edits)?;
        for camera in unknown {
            self.log_port
                .warn(&format!("Ignoring offset for unknown camera '{}'", camera))
                .await;
        }
        Ok(())
    }

    async fn write_properties(
        &self,
        writer: &ClipPropertyWriter,
        cameras: &[DiscoveredCamera],
        plan: &SyncPlan,
        assignments: Vec<CameraAssignment>,
    ) -> Vec<CameraReport> {
        let total: usize = assignments.iter().map(|a| a.clips.len()).sum();
        self.progress_port.on_start(SyncPhase::WritingProperties, total);

        let mut reports = Vec::with_capacity(assignments.len());
        let mut completed = 0;

        for (assignment, camera_plan) in assignments.into_iter().zip(&plan.cameras) {
            let handles = cameras
                .get(assignment.source_index)
                .map(|camera| camera.clips.as_slice())
                .unwrap_or_default();

            let mut clip_reports = Vec::with_capacity(assignment.clips.len());
            for timecodes in assignment.clips {
                let failed_properties =
                    match handles.get(timecodes.source_index) {
                        Some(clip) => writer.write(&assignment.camera, clip.as_ref(), &timecodes).await,
                        None => {
                            self.log_port
                                .error(&format!(
                                    "Clip '{}' of camera '{}' disappeared from the media pool",
                                    timecodes.clip_name, assignment.camera
                                ))
                                .await;
                            vec![START_TC_PROPERTY.to_string()]
                        }
                    };

                completed += 1;
                self.progress_port.on_progress(
                    SyncPhase::WritingProperties,
                    completed,
                    total,
                    &format!(
                        "Setting clips time codes and angles... ({} of {})",
                        completed, total
                    ),
                );

                clip_reports.push(ClipReport {
                    clip_name: timecodes.clip_name,
                    creation_time: timecodes.creation_time,
                    start_tc: timecodes.start.to_string(),
                    end_tc: timecodes.end.map(|end| end.to_string()),
                    failed_properties,
                });
            }

            reports.push(CameraReport {
                name: assignment.camera,
                earliest_clip: camera_plan.earliest_clip_name.clone(),
                default_offset: camera_plan.default_offset.to_string(),
                offset: assignment.offset.to_string(),
                offset_overridden: camera_plan.is_offset_overridden(),
                clips: clip_reports,
            });
        }

        reports
    }
}

/// Request for a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncRequest {
    /// Values pre-filled in the settings dialog
    pub defaults: SyncSettings,
    /// Show computed offsets for editing before assignment
    pub review_offsets: bool,
}

impl SyncRequest {
    pub fn new(defaults: SyncSettings) -> Self {
        Self {
            defaults,
            review_offsets: false,
        }
    }

    pub fn with_offset_review(mut self, review_offsets: bool) -> Self {
        self.review_offsets = review_offsets;
        self
    }
}

/// A clip left out of synchronization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedClip {
    pub camera: String,
    pub clip_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipReport {
    pub clip_name: String,
    pub creation_time: DateTime<Utc>,
    pub start_tc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_tc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraReport {
    pub name: String,
    pub earliest_clip: String,
    pub default_offset: String,
    pub offset: String,
    pub offset_overridden: bool,
    pub clips: Vec<ClipReport>,
}

/// Outcome of a synchronization run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncResponse {
    pub project_name: String,
    pub folder_name: String,
    pub frame_rate: f64,
    pub global_zero: DateTime<Utc>,
    pub settings: SyncSettings,
    pub cameras: Vec<CameraReport>,
    pub excluded_cameras: Vec<String>,
    pub skipped_clips: Vec<SkippedClip>,
    pub clips_written: usize,
    pub failed_writes: usize,
}

impl SyncResponse {
    /// Find a camera report by name
    pub fn camera(&self, name: &str) -> Option<&CameraReport> {
        self.cameras.iter().find(|camera| camera.name == name)
    }

    /// Render the run summary
    pub fn render(&self, format: ReportFormat) -> Result<String, DomainError> {
        if let Some(structured) = render_structured(self, format)? {
            return Ok(structured);
        }
        Ok(self.format_as_text())
    }

    fn format_as_text(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "Timecode Synchronization:");
        let _ = writeln!(output, "  Project: {}", self.project_name);
        let _ = writeln!(output, "  Folder: {}", self.folder_name);
        let _ = writeln!(output, "  Frame Rate: {} fps", self.frame_rate);
        let _ = writeln!(output, "  Zero Time: {}", self.global_zero.to_rfc3339());
        let _ = writeln!(output, "  Start Time Source: {}", self.settings.start_time_source);
        let _ = writeln!(output, "  Camera Property: {}", self.settings.camera_property);

        for camera in &self.cameras {
            let _ = writeln!(
                output,
                "\nCamera '{}' (offset {}{}):",
                camera.name,
                camera.offset,
                if camera.offset_overridden {
                    format!(", default {}", camera.default_offset)
                } else {
                    String::new()
                }
            );
            for clip in &camera.clips {
                let _ = write!(output, "  {:<32} Start TC {}", clip.clip_name, clip.start_tc);
                if let Some(end_tc) = &clip.end_tc {
                    let _ = write!(output, "  End TC {}", end_tc);
                }
                if !clip.failed_properties.is_empty() {
                    let _ = write!(output, "  (not set: {})", clip.failed_properties.join(", "));
                }
                let _ = writeln!(output);
            }
        }

        if !self.excluded_cameras.is_empty() {
            let _ = writeln!(
                output,
                "\nExcluded Cameras: {}",
                self.excluded_cameras.join(", ")
            );
        }

        if !self.skipped_clips.is_empty() {
            let _ = writeln!(output, "\nSkipped Clips ({}):", self.skipped_clips.len());
            for skipped in &self.skipped_clips {
                let _ = writeln!(
                    output,
                    "  {}/{}: {}",
                    skipped.camera, skipped.clip_name, skipped.reason
                );
            }
        }

        let _ = writeln!(
            output,
            "\n{} clip(s) updated, {} property write(s) rejected",
            self.clips_written, self.failed_writes
        );

        output
    }
}
