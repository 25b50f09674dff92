use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::adapters::{
    FFprobeAdapter, FsLocalAdapter, FsMediaPoolAdapter, PresetDialogAdapter, TerminalDialogAdapter,
    TracingLogAdapter, TracingProgressAdapter,
};
use crate::app::{inspect_interactor::InspectInteractor, sync_interactor::SyncInteractor};
use crate::domain::model::SyncSettings;
use crate::domain::rules::OffsetEdit;
use crate::ports::{
    FsPort, LogPort, MediaPoolPort, OffsetReviewPort, ProbePort, ProgressPort, SettingsPort,
};

pub trait AppContainer: Send + Sync {
    fn sync_interactor(&self) -> Arc<SyncInteractor>;
    fn inspect_interactor(&self) -> Arc<InspectInteractor>;
    /// Raising this flag stops a run at its next checkpoint
    fn cancel_handle(&self) -> Arc<AtomicBool>;
}

/// How the settings and offset dialogs are answered
#[derive(Debug, Clone)]
pub enum DialogMode {
    /// Prompt on the terminal
    Interactive,
    /// Accept the defaults and apply these offsets
    Preset { offsets: Vec<OffsetEdit> },
}

/// Run-specific wiring inputs
#[derive(Debug, Clone)]
pub struct ContainerOptions {
    pub project_name: String,
    /// Folder standing in for the media pool selection
    pub media_root: PathBuf,
    pub dialogs: DialogMode,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            project_name: "Untitled Project".to_string(),
            media_root: PathBuf::from("."),
            dialogs: DialogMode::Interactive,
        }
    }
}

pub struct DefaultAppContainer {
    sync_interactor: Arc<SyncInteractor>,
    inspect_interactor: Arc<InspectInteractor>,
    cancel_handle: Arc<AtomicBool>,
}

impl DefaultAppContainer {
    /// The probe adapter takes its binary and timeout from `settings`
    pub fn new(settings: &SyncSettings, options: ContainerOptions) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::from_settings(settings));
        let fs_port = Arc::new(FsLocalAdapter::new());
        let log_port = Arc::new(TracingLogAdapter::new());
        let progress_port = Arc::new(TracingProgressAdapter::new());
        let cancel_handle = progress_port.cancel_handle();
        let media_pool_port = Arc::new(FsMediaPoolAdapter::new(
            options.project_name,
            options.media_root,
        ));

        let (settings_port, offset_review_port): (Arc<dyn SettingsPort>, Arc<dyn OffsetReviewPort>) =
            match options.dialogs {
                DialogMode::Interactive => {
                    let dialog = Arc::new(TerminalDialogAdapter::stdio());
                    (
                        Arc::clone(&dialog) as Arc<dyn SettingsPort>,
                        dialog as Arc<dyn OffsetReviewPort>,
                    )
                }
                DialogMode::Preset { offsets } => {
                    let dialog = Arc::new(PresetDialogAdapter::accept_defaults().offsets(offsets));
                    (
                        Arc::clone(&dialog) as Arc<dyn SettingsPort>,
                        dialog as Arc<dyn OffsetReviewPort>,
                    )
                }
            };

        let sync_interactor = Arc::new(SyncInteractor::new(
            media_pool_port as Arc<dyn MediaPoolPort>,
            Arc::clone(&probe_port) as Arc<dyn ProbePort>,
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
            settings_port,
            offset_review_port,
            progress_port as Arc<dyn ProgressPort>,
            Arc::clone(&log_port) as Arc<dyn LogPort>,
        ));

        let inspect_interactor = Arc::new(InspectInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            fs_port as Arc<dyn FsPort>,
            log_port as Arc<dyn LogPort>,
        ));

        Self {
            sync_interactor,
            inspect_interactor,
            cancel_handle,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn sync_interactor(&self) -> Arc<SyncInteractor> {
        Arc::clone(&self.sync_interactor)
    }

    fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }

    fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_handle)
    }
}
