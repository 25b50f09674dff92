//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::{debug, info};

use crate::domain::errors::DomainError;
use crate::domain::model::{SettingsOverrides, StartTimeSource, SyncSettings};
use crate::ports::ConfigPort;

/// Prefix of the environment variables that override settings
pub const ENV_PREFIX: &str = "TIMECODE_SYNC_";

/// Resolve run settings following precedence: CLI > Env > File > Defaults.
///
/// An explicitly given config file must exist; the default one is optional.
pub async fn resolve_settings(
    config_port: &dyn ConfigPort,
    explicit_config: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    cli_overrides: SettingsOverrides,
) -> Result<SyncSettings, DomainError> {
    info!("Initializing configuration hierarchy");

    let file_overrides = match explicit_config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            config_port.load_config(path).await?
        }
        None => {
            let default_path = config_port.default_config_path();
            if default_path.is_file() {
                info!("Loading configuration from: {}", default_path.display());
                config_port.load_config(&default_path).await?
            } else {
                debug!("No configuration file at {}", default_path.display());
                SettingsOverrides::default()
            }
        }
    };

    let env_overrides = environment_overrides(env)?;
    if !env_overrides.is_empty() {
        info!("Applied {} environment variable overrides", env_overrides.len());
    }
    if !cli_overrides.is_empty() {
        info!("Applied {} CLI configuration overrides", cli_overrides.len());
    }

    let settings = file_overrides
        .merge(env_overrides)
        .merge(cli_overrides)
        .apply_to(SyncSettings::default());
    settings.validate()?;

    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Read `TIMECODE_SYNC_*` variables through `env`
pub fn environment_overrides(
    env: impl Fn(&str) -> Option<String>,
) -> Result<SettingsOverrides, DomainError> {
    let var = |name: &str| {
        env(&format!("{}{}", ENV_PREFIX, name))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    Ok(SettingsOverrides {
        start_time_source: var("START_TIME_SOURCE")
            .map(|value| {
                value
                    .parse::<StartTimeSource>()
                    .map_err(|e| env_error("START_TIME_SOURCE", &e.to_string()))
            })
            .transpose()?,
        camera_property: var("CAMERA_PROPERTY"),
        multicam_clip_name: var("MULTICAM_CLIP_NAME"),
        max_clips_per_camera: parse_var(var("MAX_CLIPS"), "MAX_CLIPS")?,
        debug: parse_bool(var("DEBUG"), "DEBUG")?,
        write_end_timecode: parse_bool(var("WRITE_END_TIMECODE"), "WRITE_END_TIMECODE")?,
        project_frame_rate: parse_var(var("FRAME_RATE"), "FRAME_RATE")?,
        probe_timeout_secs: parse_var(var("PROBE_TIMEOUT"), "PROBE_TIMEOUT")?,
        ffprobe_path: var("FFPROBE"),
    })
}

fn parse_var<T: std::str::FromStr>(value: Option<String>, name: &str) -> Result<Option<T>, DomainError>
where
    T::Err: std::fmt::Display,
{
    value
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|e| env_error(name, &format!("'{}': {}", value, e)))
        })
        .transpose()
}

fn parse_bool(value: Option<String>, name: &str) -> Result<Option<bool>, DomainError> {
    value
        .map(|value| match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(env_error(name, &format!("'{}' is not a boolean", value))),
        })
        .transpose()
}

fn env_error(name: &str, message: &str) -> DomainError {
    DomainError::ConfigError(format!("{}{}: {}", ENV_PREFIX, name, message))
}
