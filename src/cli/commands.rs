//! Command implementations

use std::path::Path;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::tracing_log::LogLevelHandle;
use crate::adapters::TomlConfigAdapter;
use crate::app::container::{AppContainer, ContainerOptions, DefaultAppContainer, DialogMode};
use crate::app::{InspectRequest, ReportFormat, SyncRequest};
use crate::cli::args::{InspectArgs, SyncArgs};
use crate::config_initialization::resolve_settings;
use crate::domain::model::SettingsOverrides;

/// Execute the sync command
pub async fn sync(
    args: SyncArgs,
    config: Option<&Path>,
    log_level: Option<&LogLevelHandle>,
) -> Result<()> {
    info!("Starting sync operation");
    info!("Folder: {}", args.folder.display());

    if !args.folder.is_dir() {
        return Err(anyhow::anyhow!(
            "Folder does not exist: {}",
            args.folder.display()
        ));
    }

    let format: ReportFormat = args.format.parse()?;
    let offsets = args.offset_edits()?;
    let settings = load_settings(config, args.overrides()).await?;

    if settings.debug {
        if let Some(handle) = log_level {
            handle.enable_debug()?;
        }
    }

    let project_name = args.project_name.clone().unwrap_or_else(|| {
        args.folder
            .canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().to_string()))
            .unwrap_or_else(|| args.folder.display().to_string())
    });
    let review_offsets = args.review_offsets || !offsets.is_empty();
    let dialogs = if args.yes {
        DialogMode::Preset { offsets }
    } else {
        DialogMode::Interactive
    };

    let container = DefaultAppContainer::new(
        &settings,
        ContainerOptions {
            project_name,
            media_root: args.folder.clone(),
            dialogs,
        },
    );

    let cancel = container.cancel_handle();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Cancellation requested, stopping after the current clip");
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let request = SyncRequest::new(settings).with_offset_review(review_offsets);
    let result = container.sync_interactor().execute(request).await;
    ctrl_c.abort();

    let response = result.context("Synchronization failed")?;
    println!("{}", response.render(format)?);

    info!("Sync operation completed successfully");
    Ok(())
}

/// Execute the inspect command
pub async fn inspect(args: InspectArgs, config: Option<&Path>) -> Result<()> {
    info!("Starting inspect operation");
    info!("Input: {}", args.input.display());

    let format: ReportFormat = args.format.parse()?;
    let settings = load_settings(config, args.overrides()).await?;

    let container = DefaultAppContainer::new(&settings, ContainerOptions::default());
    let response = container
        .inspect_interactor()
        .execute(InspectRequest::with_format(args.input.clone(), format))
        .await
        .context("Failed to inspect input file")?;

    println!("{}", response.summary.trim_end());

    info!("Inspect operation completed successfully");
    Ok(())
}

async fn load_settings(
    config: Option<&Path>,
    cli_overrides: SettingsOverrides,
) -> Result<crate::domain::model::SyncSettings> {
    resolve_settings(
        &TomlConfigAdapter::new(),
        config,
        |name| std::env::var(name).ok(),
        cli_overrides,
    )
    .await
    .context("Failed to resolve settings")
}
