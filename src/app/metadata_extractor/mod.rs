// Metadata extractor - Probe plus filesystem facts for one clip

use std::path::Path;
use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Builds a `ClipMetadataRecord` for one media file
pub struct ClipMetadataExtractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl ClipMetadataExtractor {
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            probe_port,
            fs_port,
            log_port,
        }
    }

    /// Probe `file_path` and combine the result with its size and OS
    /// creation time. All failures here are per-clip.
    pub async fn extract(
        &self,
        clip_name: &str,
        file_path: &Path,
    ) -> Result<ClipMetadataRecord, DomainError> {
        let file_metadata = self.fs_port.get_file_metadata(file_path).await?;
        let os_creation_time = file_metadata.creation_time().ok_or_else(|| {
            DomainError::FsFail(format!(
                "No creation or modification time available for {}",
                file_path.display()
            ))
        })?;

        let probe = self.probe_port.probe(file_path).await?;
        let record = ClipMetadataRecord::from_probe(
            clip_name,
            file_path.to_path_buf(),
            &probe,
            os_creation_time,
            file_metadata.size,
        )?;

        if record.video_stream_count > 1 {
            self.log_port
                .warn(&format!(
                    "Clip '{}' has {} video streams, using the first one",
                    clip_name, record.video_stream_count
                ))
                .await;
        }

        self.log_port
            .debug(&format!(
                "Clip '{}': tag creation time {}, OS creation time {}, {} fps, {} frames",
                clip_name,
                record
                    .tag_creation_time
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "none".to_string()),
                record.os_creation_time.to_rfc3339(),
                record.frame_rate,
                record.frame_count
            ))
            .await;

        Ok(record)
    }
}
