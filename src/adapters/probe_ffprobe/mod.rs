//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` as a subprocess, one file at a time, bounded by a timeout.
//! A probe that overruns is killed and reported as `ProbeTimeout`.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    ffprobe_path: String,
    timeout: Duration,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(ffprobe_path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
            timeout,
        }
    }

    /// Create an adapter from run settings
    pub fn from_settings(settings: &SyncSettings) -> Self {
        Self::new(settings.ffprobe_path.clone(), settings.probe_timeout)
    }

    fn build_command(&self, file_path: &Path) -> Command {
        let mut command = Command::new(&self.ffprobe_path);
        command
            .arg("-i")
            .arg(file_path)
            .args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(windows)]
        {
            // no console window per probe
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        command
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe(&self, file_path: &Path) -> Result<ProbeOutput, DomainError> {
        let display_path = file_path.display().to_string();
        trace!(
            "Running command: {} -i {} -v quiet -print_format json -show_format -show_streams",
            self.ffprobe_path,
            display_path
        );

        let child = self
            .build_command(file_path)
            .spawn()
            .map_err(|e| DomainError::ProbeFailed {
                path: display_path.clone(),
                stderr: format!("failed to run {}: {}", self.ffprobe_path, e),
            })?;

        // Dropping the future on timeout drops the child, and kill_on_drop kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| DomainError::ProbeFailed {
                path: display_path.clone(),
                stderr: e.to_string(),
            })?,
            Err(_) => {
                return Err(DomainError::ProbeTimeout {
                    path: display_path,
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |code| code.to_string());
            return Err(DomainError::ProbeFailed {
                path: display_path,
                stderr: if stderr.is_empty() {
                    format!("exit status {}", code)
                } else {
                    format!("exit status {}: {}", code, stderr)
                },
            });
        }

        parse_probe_output(&display_path, &output.stdout)
    }
}

/// Parse ffprobe's JSON document
pub fn parse_probe_output(path: &str, stdout: &[u8]) -> Result<ProbeOutput, DomainError> {
    serde_json::from_slice(stdout).map_err(|e| DomainError::ProbeParse {
        path: path.to_string(),
        message: e.to_string(),
    })
}
