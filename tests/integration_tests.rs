use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use multicam_timecode::adapters::{
    FsLocalAdapter, FsMediaPoolAdapter, PresetDialogAdapter, TracingLogAdapter,
};
use multicam_timecode::app::{SyncInteractor, SyncRequest, SyncResponse};
use multicam_timecode::domain::model::*;
use multicam_timecode::domain::rules::OffsetEdit;
use multicam_timecode::ports::*;
use multicam_timecode::*;
use serde_json::json;
use tempfile::TempDir;

/// In-memory stand-ins for the host editor, the prober and the progress surface
mod test_utils {
    use super::*;

    pub fn video_probe(creation_time: &str, frames: u64) -> ProbeOutput {
        serde_json::from_value(json!({
            "streams": [
                {"codec_type": "video", "codec_name": "h264", "r_frame_rate": "24/1",
                 "nb_frames": frames.to_string(), "width": 1920, "height": 1080},
                {"codec_type": "audio", "codec_name": "aac"}
            ],
            "format": {
                "nb_streams": 2,
                "duration": format!("{:.3}", frames as f64 / 24.0),
                "size": "1048576",
                "tags": {"creation_time": creation_time}
            }
        }))
        .unwrap()
    }

    pub fn audio_probe(creation_time: &str) -> ProbeOutput {
        serde_json::from_value(json!({
            "streams": [{"codec_type": "audio", "codec_name": "pcm_s24le"}],
            "format": {"nb_streams": 1, "tags": {"creation_time": creation_time}}
        }))
        .unwrap()
    }

    /// Probe answers keyed by full path or file name
    #[derive(Default)]
    pub struct FakeProbe {
        answers: HashMap<String, Result<ProbeOutput, DomainError>>,
        pub calls: AtomicUsize,
    }

    impl FakeProbe {
        pub fn with(mut self, file_name: &str, answer: Result<ProbeOutput, DomainError>) -> Self {
            self.answers.insert(file_name.to_string(), answer);
            self
        }
    }

    #[async_trait]
    impl ProbePort for FakeProbe {
        async fn probe(&self, file_path: &Path) -> Result<ProbeOutput, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(answer) = self.answers.get(&file_path.display().to_string()) {
                return answer.clone();
            }
            let file_name = file_path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            self.answers.get(&file_name).cloned().unwrap_or_else(|| {
                Err(DomainError::ProbeFailed {
                    path: file_path.display().to_string(),
                    stderr: "no such file".to_string(),
                })
            })
        }
    }

    pub struct FakeFs;

    #[async_trait]
    impl FsPort for FakeFs {
        async fn file_exists(&self, _file_path: &Path) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn get_file_metadata(&self, _file_path: &Path) -> Result<FileMetadata, DomainError> {
            Ok(FileMetadata {
                size: 1_048_576,
                created: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_714_557_600)),
                modified: None,
            })
        }
    }

    pub struct MemoryClip {
        name: String,
        properties: Mutex<BTreeMap<String, String>>,
    }

    impl MemoryClip {
        pub fn new(name: &str, kind: &str) -> Arc<Self> {
            let mut properties = BTreeMap::new();
            properties.insert(TYPE_PROPERTY.to_string(), kind.to_string());
            properties.insert(FILE_PATH_PROPERTY.to_string(), format!("/media/{}", name));
            Arc::new(Self {
                name: name.to_string(),
                properties: Mutex::new(properties),
            })
        }

        pub fn video(name: &str) -> Arc<Self> {
            Self::new(name, "Video + Audio")
        }

        pub fn video_at(name: &str, file_path: &str) -> Arc<Self> {
            let clip = Self::video(name);
            clip.set_property(FILE_PATH_PROPERTY, file_path);
            clip
        }

        pub fn property(&self, name: &str) -> Option<String> {
            self.properties.lock().unwrap().get(name).cloned()
        }
    }

    impl ClipHandle for MemoryClip {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn get_property(&self, name: &str) -> Option<String> {
            self.property(name)
        }

        fn set_property(&self, name: &str, value: &str) -> bool {
            self.properties
                .lock()
                .unwrap()
                .insert(name.to_string(), value.to_string());
            true
        }
    }

    pub struct MemoryFolder {
        pub name: String,
        pub subfolders: Vec<Arc<MemoryFolder>>,
        pub clips: Vec<Arc<MemoryClip>>,
    }

    impl MediaFolder for MemoryFolder {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn subfolders(&self) -> Vec<Arc<dyn MediaFolder>> {
            self.subfolders
                .iter()
                .map(|folder| Arc::clone(folder) as Arc<dyn MediaFolder>)
                .collect()
        }

        fn clips(&self) -> Vec<Arc<dyn ClipHandle>> {
            self.clips
                .iter()
                .map(|clip| Arc::clone(clip) as Arc<dyn ClipHandle>)
                .collect()
        }
    }

    pub fn camera(name: &str, clips: &[&Arc<MemoryClip>]) -> Arc<MemoryFolder> {
        Arc::new(MemoryFolder {
            name: name.to_string(),
            subfolders: Vec::new(),
            clips: clips.iter().map(|&clip| Arc::clone(clip)).collect(),
        })
    }

    pub struct MemoryPool {
        pub project: Option<String>,
        pub folder: Option<Arc<MemoryFolder>>,
    }

    impl MemoryPool {
        pub fn with_cameras(cameras: Vec<Arc<MemoryFolder>>) -> Self {
            Self {
                project: Some("Wedding".to_string()),
                folder: Some(Arc::new(MemoryFolder {
                    name: "footage".to_string(),
                    subfolders: cameras,
                    clips: Vec::new(),
                })),
            }
        }
    }

    impl MediaPoolPort for MemoryPool {
        fn project_name(&self) -> Option<String> {
            self.project.clone()
        }

        fn current_folder(&self) -> Option<Arc<dyn MediaFolder>> {
            self.folder
                .as_ref()
                .map(|folder| Arc::clone(folder) as Arc<dyn MediaFolder>)
        }
    }

    /// Records progress messages; raises cancellation after `cancel_after` updates
    #[derive(Default)]
    pub struct RecordingProgress {
        pub messages: Mutex<Vec<String>>,
        pub cancel_after: Option<usize>,
        cancelled: AtomicBool,
    }

    impl RecordingProgress {
        pub fn cancelling_after(updates: usize) -> Self {
            Self {
                cancel_after: Some(updates),
                ..Self::default()
            }
        }
    }

    impl ProgressPort for RecordingProgress {
        fn on_start(&self, _phase: SyncPhase, _total: usize) {}

        fn on_progress(&self, _phase: SyncPhase, _completed: usize, _total: usize, message: &str) {
            let mut messages = self.messages.lock().unwrap();
            messages.push(message.to_string());
            if self.cancel_after == Some(messages.len()) {
                self.cancelled.store(true, Ordering::SeqCst);
            }
        }

        fn on_complete(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }

        fn should_cancel(&self) -> bool {
            self.cancelled.load(Ordering::SeqCst)
        }
    }

    pub struct CancellingDialog;

    #[async_trait]
    impl SettingsPort for CancellingDialog {
        async fn request_settings(&self, _request: &SettingsRequest) -> Result<SettingsOutcome, DomainError> {
            Ok(SettingsOutcome::Cancelled)
        }
    }

    #[async_trait]
    impl OffsetReviewPort for CancellingDialog {
        async fn review_offsets(&self, _request: &OffsetReviewRequest) -> Result<OffsetReviewOutcome, DomainError> {
            Ok(OffsetReviewOutcome::Cancelled)
        }
    }

    pub fn interactor(
        pool: MemoryPool,
        probe: Arc<FakeProbe>,
        dialog: Arc<PresetDialogAdapter>,
        progress: Arc<RecordingProgress>,
    ) -> SyncInteractor {
        SyncInteractor::new(
            Arc::new(pool),
            probe,
            Arc::new(FakeFs),
            dialog.clone(),
            dialog,
            progress,
            Arc::new(TracingLogAdapter::new()),
        )
    }
}

use test_utils::*;

/// Two cameras at 24 fps; camera B started rolling two minutes after camera A
struct TwoCameraShoot {
    a1: Arc<MemoryClip>,
    a2: Arc<MemoryClip>,
    b1: Arc<MemoryClip>,
    b2: Arc<MemoryClip>,
    probe: Arc<FakeProbe>,
}

impl TwoCameraShoot {
    fn new() -> Self {
        let probe = FakeProbe::default()
            .with("A001.mp4", Ok(video_probe("2024-05-01T10:00:00Z", 2400)))
            .with("A002.mp4", Ok(video_probe("2024-05-01T10:05:00Z", 480)))
            .with("B001.mp4", Ok(video_probe("2024-05-01T10:02:00Z", 240)))
            .with("B002.mp4", Ok(video_probe("2024-05-01T10:02:05Z", 240)));

        Self {
            a1: MemoryClip::video("A001.mp4"),
            a2: MemoryClip::video("A002.mp4"),
            b1: MemoryClip::video("B001.mp4"),
            b2: MemoryClip::video("B002.mp4"),
            probe: Arc::new(probe),
        }
    }

    fn pool(&self) -> MemoryPool {
        MemoryPool::with_cameras(vec![
            camera("CamA", &[&self.a1, &self.a2]),
            camera("CamB", &[&self.b1, &self.b2]),
        ])
    }

    async fn run(&self, dialog: PresetDialogAdapter, review: bool) -> Result<SyncResponse, DomainError> {
        let progress = Arc::new(RecordingProgress::default());
        interactor(self.pool(), self.probe.clone(), Arc::new(dialog), progress)
            .execute(SyncRequest::new(SyncSettings::default()).with_offset_review(review))
            .await
    }

    fn untouched(&self) -> bool {
        [&self.a1, &self.a2, &self.b1, &self.b2]
            .iter()
            .all(|clip| clip.property(START_TC_PROPERTY).is_none())
    }
}

#[tokio::test]
async fn test_two_camera_sync() {
    let shoot = TwoCameraShoot::new();
    let response = shoot
        .run(PresetDialogAdapter::accept_defaults(), false)
        .await
        .unwrap();

    assert_eq!(response.frame_rate, 24.0);
    assert_eq!(response.camera("CamA").unwrap().offset, "00:00:00:00");
    assert_eq!(response.camera("CamB").unwrap().offset, "00:02:00:00");
    assert_eq!(response.clips_written, 4);
    assert_eq!(response.failed_writes, 0);

    // the camera offset nets out its start delay
    assert_eq!(shoot.b1.property(START_TC_PROPERTY).unwrap(), "00:00:00:00");
    assert_eq!(shoot.b1.property(END_TC_PROPERTY).unwrap(), "00:00:10:00");
    assert_eq!(shoot.b2.property(START_TC_PROPERTY).unwrap(), "00:00:05:00");
    assert_eq!(shoot.a1.property(START_TC_PROPERTY).unwrap(), "00:00:00:00");
    assert_eq!(shoot.a1.property(END_TC_PROPERTY).unwrap(), "00:01:40:00");
    assert_eq!(shoot.a2.property(START_TC_PROPERTY).unwrap(), "00:05:00:00");

    assert_eq!(shoot.a1.property("Angle").unwrap(), "CamA");
    assert_eq!(shoot.b2.property("Angle").unwrap(), "CamB");
}

#[tokio::test]
async fn test_zero_offset_override_keeps_wall_clock_position() {
    let shoot = TwoCameraShoot::new();
    let dialog = PresetDialogAdapter::accept_defaults()
        .offsets(vec![OffsetEdit::new("CamB", "00:00:00:00")]);
    let response = shoot.run(dialog, true).await.unwrap();

    let cam_b = response.camera("CamB").unwrap();
    assert!(cam_b.offset_overridden);
    assert_eq!(cam_b.default_offset, "00:02:00:00");
    assert_eq!(shoot.b2.property(START_TC_PROPERTY).unwrap(), "00:02:05:00");
}

#[tokio::test]
async fn test_invalid_offset_aborts_before_writes() {
    let shoot = TwoCameraShoot::new();
    let dialog = PresetDialogAdapter::accept_defaults()
        .offsets(vec![OffsetEdit::new("CamB", "2 minutes")]);

    let result = shoot.run(dialog, true).await;

    assert!(matches!(result, Err(DomainError::InvalidOffset { ref camera, .. }) if camera == "CamB"));
    assert!(shoot.untouched());
}

#[tokio::test]
async fn test_end_timecode_disabled() {
    let shoot = TwoCameraShoot::new();
    let settings = SyncSettings {
        write_end_timecode: false,
        camera_property: "Camera #".to_string(),
        ..SyncSettings::default()
    };
    let response = shoot
        .run(PresetDialogAdapter::with_settings(settings), false)
        .await
        .unwrap();

    assert!(response.cameras.iter().flat_map(|c| &c.clips).all(|c| c.end_tc.is_none()));
    assert!(shoot.b1.property(END_TC_PROPERTY).is_none());
    assert_eq!(shoot.b1.property("Camera #").unwrap(), "CamB");
}

#[tokio::test]
async fn test_clip_without_video_stream_is_excluded() {
    let shoot = TwoCameraShoot::new();
    // earlier than every real clip; would move zero time if it counted
    let scratch = MemoryClip::video("A000.mp4");
    let probe = Arc::new(
        FakeProbe::default()
            .with("A000.mp4", Ok(audio_probe("2024-05-01T09:00:00Z")))
            .with("A001.mp4", Ok(video_probe("2024-05-01T10:00:00Z", 2400)))
            .with("B001.mp4", Ok(video_probe("2024-05-01T10:02:00Z", 240))),
    );
    let pool = MemoryPool::with_cameras(vec![
        camera("CamA", &[&scratch, &shoot.a1]),
        camera("CamB", &[&shoot.b1]),
    ]);

    let response = interactor(
        pool,
        probe,
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::default())
    .await
    .unwrap();

    assert_eq!(response.global_zero.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    assert_eq!(response.skipped_clips.len(), 1);
    assert_eq!(response.skipped_clips[0].clip_name, "A000.mp4");
    assert!(response.skipped_clips[0].reason.contains("video stream"));
    assert!(scratch.property(START_TC_PROPERTY).is_none());
    assert_eq!(response.camera("CamB").unwrap().offset, "00:02:00:00");
}

#[tokio::test]
async fn test_probe_timeout_skips_clip_and_continues() {
    let shoot = TwoCameraShoot::new();
    let probe = Arc::new(
        FakeProbe::default()
            .with(
                "A001.mp4",
                Err(DomainError::ProbeTimeout {
                    path: "/media/A001.mp4".to_string(),
                    seconds: 10,
                }),
            )
            .with("A002.mp4", Ok(video_probe("2024-05-01T10:05:00Z", 480)))
            .with("B001.mp4", Ok(video_probe("2024-05-01T10:02:00Z", 240)))
            .with("B002.mp4", Ok(video_probe("2024-05-01T10:02:05Z", 240))),
    );

    let response = interactor(
        shoot.pool(),
        probe.clone(),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::default())
    .await
    .unwrap();

    assert_eq!(probe.calls.load(Ordering::SeqCst), 4);
    assert_eq!(response.clips_written, 3);
    assert!(response.skipped_clips[0].reason.contains("timed out"));
    // CamB now defines zero time
    assert_eq!(response.camera("CamB").unwrap().offset, "00:00:00:00");
    assert_eq!(response.camera("CamA").unwrap().offset, "00:03:00:00");
    assert!(shoot.a1.property(START_TC_PROPERTY).is_none());
}

#[tokio::test]
async fn test_camera_without_usable_clips_is_excluded() {
    let shoot = TwoCameraShoot::new();
    let broken = MemoryClip::video("C001.mp4");
    let pool = MemoryPool::with_cameras(vec![
        camera("CamA", &[&shoot.a1]),
        camera("CamC", &[&broken]),
    ]);

    let response = interactor(
        pool,
        shoot.probe.clone(),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::default())
    .await
    .unwrap();

    assert_eq!(response.excluded_cameras, vec!["CamC".to_string()]);
    assert_eq!(response.cameras.len(), 1);
}

#[tokio::test]
async fn test_no_synchronizable_cameras() {
    let clip = MemoryClip::video("X001.mp4");
    let pool = MemoryPool::with_cameras(vec![camera("CamX", &[&clip])]);

    let result = interactor(
        pool,
        Arc::new(FakeProbe::default()),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::default())
    .await;

    assert!(matches!(result, Err(DomainError::NoSynchronizableCameras)));
}

#[tokio::test]
async fn test_cancellation_leaves_clips_untouched() {
    let shoot = TwoCameraShoot::new();
    let progress = Arc::new(RecordingProgress::cancelling_after(1));

    let result = interactor(
        shoot.pool(),
        shoot.probe.clone(),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        progress.clone(),
    )
    .execute(SyncRequest::default())
    .await;

    assert!(matches!(result, Err(DomainError::Cancelled)));
    assert_eq!(shoot.probe.calls.load(Ordering::SeqCst), 1);
    assert!(shoot.untouched());
}

#[tokio::test]
async fn test_settings_dialog_cancelled() {
    let shoot = TwoCameraShoot::new();
    let dialog = Arc::new(CancellingDialog);

    let result = SyncInteractor::new(
        Arc::new(shoot.pool()),
        shoot.probe.clone(),
        Arc::new(FakeFs),
        dialog.clone(),
        dialog,
        Arc::new(RecordingProgress::default()),
        Arc::new(TracingLogAdapter::new()),
    )
    .execute(SyncRequest::default())
    .await;

    assert!(matches!(result, Err(DomainError::Cancelled)));
    assert_eq!(shoot.probe.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_progress_messages() {
    let shoot = TwoCameraShoot::new();
    let progress = Arc::new(RecordingProgress::default());

    interactor(
        shoot.pool(),
        shoot.probe.clone(),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        progress.clone(),
    )
    .execute(SyncRequest::default())
    .await
    .unwrap();

    let messages = progress.messages.lock().unwrap();
    assert_eq!(messages[0], "Reading clips information (Camera 'CamA')... (1 of 4)");
    assert_eq!(messages[3], "Reading clips information (Camera 'CamB')... (4 of 4)");
    assert_eq!(messages[4], "Setting clips time codes and angles... (1 of 4)");
    assert_eq!(messages[7], "Setting clips time codes and angles... (4 of 4)");
}

#[tokio::test]
async fn test_same_named_clips_are_written_individually() {
    let card_a = MemoryClip::video_at("C0001.MP4", "/cardA/C0001.MP4");
    let card_b = MemoryClip::video_at("C0001.MP4", "/cardB/C0001.MP4");
    let probe = FakeProbe::default()
        .with("/cardA/C0001.MP4", Ok(video_probe("2024-05-01T10:00:00Z", 240)))
        .with("/cardB/C0001.MP4", Ok(video_probe("2024-05-01T10:30:00Z", 240)));
    let pool = MemoryPool::with_cameras(vec![camera("CamA", &[&card_a, &card_b])]);

    let response = interactor(
        pool,
        Arc::new(probe),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::new(SyncSettings::default()))
    .await
    .unwrap();

    assert_eq!(response.clips_written, 2);
    assert_eq!(card_a.property(START_TC_PROPERTY).as_deref(), Some("00:00:00:00"));
    assert_eq!(card_b.property(START_TC_PROPERTY).as_deref(), Some("00:30:00:00"));
    assert_eq!(card_b.property(END_TC_PROPERTY).as_deref(), Some("00:30:10:00"));
}

#[tokio::test]
async fn test_clip_limit_per_camera() {
    let shoot = TwoCameraShoot::new();
    let settings = SyncSettings {
        max_clips_per_camera: Some(1),
        ..SyncSettings::default()
    };

    let response = shoot
        .run(PresetDialogAdapter::with_settings(settings), false)
        .await
        .unwrap();

    assert_eq!(response.clips_written, 2);
    assert_eq!(shoot.probe.calls.load(Ordering::SeqCst), 2);
    assert!(shoot.a2.property(START_TC_PROPERTY).is_none());
}

#[tokio::test]
async fn test_non_video_clips_are_not_discovered() {
    let wav = MemoryClip::new("sound.wav", "Audio");
    let pool = MemoryPool::with_cameras(vec![camera("Recorder", &[&wav])]);

    let result = interactor(
        pool,
        Arc::new(FakeProbe::default()),
        Arc::new(PresetDialogAdapter::accept_defaults()),
        Arc::new(RecordingProgress::default()),
    )
    .execute(SyncRequest::default())
    .await;

    assert!(matches!(result, Err(DomainError::NoClips)));
}

#[tokio::test]
async fn test_selection_errors() {
    let run = |pool: MemoryPool| async move {
        interactor(
            pool,
            Arc::new(FakeProbe::default()),
            Arc::new(PresetDialogAdapter::accept_defaults()),
            Arc::new(RecordingProgress::default()),
        )
        .execute(SyncRequest::default())
        .await
    };

    let no_project = MemoryPool {
        project: None,
        folder: None,
    };
    assert!(matches!(run(no_project).await, Err(DomainError::NoProject)));

    let no_folder = MemoryPool {
        project: Some("Wedding".to_string()),
        folder: None,
    };
    assert!(matches!(run(no_folder).await, Err(DomainError::NoFolderSelected)));

    let flat = MemoryPool::with_cameras(Vec::new());
    assert!(matches!(
        run(flat).await,
        Err(DomainError::NoSubfolders { ref folder }) if folder == "footage"
    ));
}

#[tokio::test]
async fn test_filesystem_media_pool() {
    let dir = TempDir::new().unwrap();
    for (camera, file) in [("Camera1", "A001.mp4"), ("Camera2", "B001.mp4")] {
        std::fs::create_dir(dir.path().join(camera)).unwrap();
        std::fs::write(dir.path().join(camera).join(file), b"x").unwrap();
    }
    std::fs::write(dir.path().join("Camera2").join("notes.txt"), b"x").unwrap();

    let probe = Arc::new(
        FakeProbe::default()
            .with("A001.mp4", Ok(video_probe("2024-05-01T10:00:00Z", 240)))
            .with("B001.mp4", Ok(video_probe("2024-05-01T10:00:03Z", 240))),
    );
    let pool = Arc::new(FsMediaPoolAdapter::new("Shoot", dir.path()));
    let dialog = Arc::new(PresetDialogAdapter::accept_defaults());

    let response = SyncInteractor::new(
        pool.clone(),
        probe,
        Arc::new(FsLocalAdapter::new()),
        dialog.clone(),
        dialog,
        Arc::new(RecordingProgress::default()),
        Arc::new(TracingLogAdapter::new()),
    )
    .execute(SyncRequest::default())
    .await
    .unwrap();

    assert_eq!(response.project_name, "Shoot");
    assert_eq!(response.clips_written, 2);
    assert_eq!(response.camera("Camera2").unwrap().offset, "00:00:03:00");
    assert!(response.skipped_clips.is_empty());
}

#[test]
fn test_end_to_end_timecode_values() {
    // 90 s apart at 25 fps
    let delta = chrono::TimeDelta::seconds(90);
    assert_eq!(Timecode::from_duration(delta, 25.0).unwrap().to_string(), "00:01:30:00");

    // wraps at one hour
    let wrapped = Timecode::from_total_frames(3600 * 25 + 10, 25.0).unwrap();
    assert_eq!(wrapped.to_string(), "00:00:00:10");
}
