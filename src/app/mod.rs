// Application layer - Use case interactors

use std::str::FromStr;

use serde::Serialize;

use crate::domain::errors::DomainError;

pub mod container;
pub mod inspect_interactor;
pub mod metadata_extractor;
pub mod property_writer;
pub mod sync_interactor;

// Re-export interactors
pub use inspect_interactor::{InspectInteractor, InspectRequest, InspectResponse};
pub use metadata_extractor::ClipMetadataExtractor;
pub use property_writer::ClipPropertyWriter;
pub use sync_interactor::{SyncInteractor, SyncRequest, SyncResponse};

/// How reports are rendered for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid output format: {}. Valid formats: text, json, yaml",
                s
            ))),
        }
    }
}

/// Serialize a report as JSON or YAML; `None` for text
pub(crate) fn render_structured<T: Serialize>(
    value: &T,
    format: ReportFormat,
) -> Result<Option<String>, DomainError> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(value)
            .map(Some)
            .map_err(|e| DomainError::InternalError(format!("JSON serialization failed: {}", e))),
        ReportFormat::Yaml => serde_yaml::to_string(value)
            .map(Some)
            .map_err(|e| DomainError::InternalError(format!("YAML serialization failed: {}", e))),
        ReportFormat::Text => Ok(None),
    }
}
