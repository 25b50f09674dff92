// Inspect interactor - Metadata report for a single media file

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{render_structured, ClipMetadataExtractor, ReportFormat};
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Interactor for media file inspection use case
pub struct InspectInteractor {
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
    extractor: ClipMetadataExtractor,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        let extractor =
            ClipMetadataExtractor::new(probe_port, Arc::clone(&fs_port), Arc::clone(&log_port));
        Self {
            fs_port,
            log_port,
            extractor,
        }
    }

    /// Execute media file inspection
    pub async fn execute(&self, request: InspectRequest) -> Result<InspectResponse, DomainError> {
        self.log_port
            .info(&format!(
                "Starting media file inspection for: {}",
                request.input_path.display()
            ))
            .await;

        if !self.fs_port.file_exists(&request.input_path).await? {
            return Err(DomainError::FsFail(format!(
                "Input file does not exist: {}",
                request.input_path.display()
            )));
        }

        let clip_name = request
            .input_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| request.input_path.display().to_string());
        let record = self.extractor.extract(&clip_name, &request.input_path).await?;

        let summary = match render_structured(&record, request.format)? {
            Some(structured) => structured,
            None => format_as_text(&record),
        };

        self.log_port.info("Media file inspection completed successfully").await;

        Ok(InspectResponse { record, summary })
    }
}

fn format_as_text(record: &ClipMetadataRecord) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Clip Information:");
    let _ = writeln!(output, "  Clip: {}", record.clip_name);
    let _ = writeln!(output, "  File: {}", record.file_path.display());
    let _ = writeln!(output, "  Duration: {:.3}s", record.duration_seconds);
    let _ = writeln!(output, "  File Size: {:.2} MB", record.size_bytes as f64 / 1_048_576.0);
    let _ = writeln!(
        output,
        "  Streams: {} ({} video)",
        record.stream_count, record.video_stream_count
    );
    let _ = writeln!(
        output,
        "  Video: {}x{} @ {} fps, {} frames, {}",
        record.width, record.height, record.frame_rate, record.frame_count, record.codec_name
    );
    let _ = writeln!(
        output,
        "  Tag Creation Time: {}",
        record
            .tag_creation_time
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "none".to_string())
    );
    let _ = writeln!(
        output,
        "  OS Creation Time: {}",
        record.os_creation_time.to_rfc3339()
    );

    output
}

/// Request for media file inspection
#[derive(Debug, Clone)]
pub struct InspectRequest {
    pub input_path: PathBuf,
    pub format: ReportFormat,
}

impl InspectRequest {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(input_path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            input_path: input_path.into(),
            format,
        }
    }
}

/// Response from media file inspection
#[derive(Debug, Clone)]
pub struct InspectResponse {
    pub record: ClipMetadataRecord,
    pub summary: String,
}
