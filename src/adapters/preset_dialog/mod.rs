// Preset dialog adapter - Non-interactive answers for unattended runs

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::OffsetEdit;
use crate::ports::*;

/// Answers both dialogs from values fixed up front (`--yes`, `--offset`)
pub struct PresetDialogAdapter {
    settings: Option<SyncSettings>,
    offsets: Vec<OffsetEdit>,
}

impl PresetDialogAdapter {
    /// Accept the defaults shown in the settings request
    pub fn accept_defaults() -> Self {
        Self {
            settings: None,
            offsets: Vec::new(),
        }
    }

    /// Submit `settings` regardless of the request
    pub fn with_settings(settings: SyncSettings) -> Self {
        Self {
            settings: Some(settings),
            offsets: Vec::new(),
        }
    }

    /// Offsets answered by the review step
    pub fn offsets(mut self, offsets: Vec<OffsetEdit>) -> Self {
        self.offsets = offsets;
        self
    }
}

#[async_trait]
impl SettingsPort for PresetDialogAdapter {
    async fn request_settings(&self, request: &SettingsRequest) -> Result<SettingsOutcome, DomainError> {
        let settings = self
            .settings
            .clone()
            .unwrap_or_else(|| request.defaults.clone());
        Ok(SettingsOutcome::Submitted(settings))
    }
}

#[async_trait]
impl OffsetReviewPort for PresetDialogAdapter {
    async fn review_offsets(&self, _request: &OffsetReviewRequest) -> Result<OffsetReviewOutcome, DomainError> {
        Ok(OffsetReviewOutcome::Edited(self.offsets.clone()))
    }
}
