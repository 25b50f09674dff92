// TOML config adapter - Settings defaults from a TOML file

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "timecode_sync.toml";

/// Layout of the configuration file: one `[timecode_sync]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    timecode_sync: SettingsOverrides,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Create new TOML config adapter
    pub fn new() -> Self {
        Self
    }

    /// Deserialize config from TOML string
    pub fn parse(toml_content: &str) -> Result<SettingsOverrides, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.timecode_sync)
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigPort for TomlConfigAdapter {
    async fn load_config(&self, file_path: &Path) -> Result<SettingsOverrides, DomainError> {
        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            DomainError::ConfigError(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    fn default_config_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_table() {
        let overrides = TomlConfigAdapter::parse(
            r#"
            [timecode_sync]
            start_time_source = "OS_FILE_CREATION_TIME"
            camera_property = "Camera #"
            max_clips_per_camera = 20
            debug = true
            "#,
        )
        .unwrap();

        assert_eq!(
            overrides.start_time_source,
            Some(StartTimeSource::OsFileCreationTime)
        );
        assert_eq!(overrides.camera_property.as_deref(), Some("Camera #"));
        assert_eq!(overrides.max_clips_per_camera, Some(20));
        assert_eq!(overrides.debug, Some(true));
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(TomlConfigAdapter::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        let result = TomlConfigAdapter::parse("[timecode_sync]\nstart_time_source = \"FILENAME\"");
        assert!(matches!(result, Err(DomainError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[timecode_sync]\nprobe_timeout_secs = 5\n").unwrap();

        let adapter = TomlConfigAdapter::new();
        let overrides = adapter.load_config(&path).await.unwrap();
        assert_eq!(overrides.probe_timeout_secs, Some(5));

        let missing = adapter.load_config(&dir.path().join("nope.toml")).await;
        assert!(matches!(missing, Err(DomainError::ConfigError(_))));
    }
}
