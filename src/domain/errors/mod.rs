// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Timecode fields out of range for the frame rate
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// Timecode text is not `HH:MM:SS:FF`
    #[error("Malformed timecode string '{input}': expected HH:MM:SS:FF")]
    MalformedTimecodeString { input: String },

    /// Arithmetic between timecodes at different rates
    #[error("Incompatible frame rates: {left} fps and {right} fps")]
    IncompatibleFrameRate { left: f64, right: f64 },

    /// Probe did not finish within the allotted time
    #[error("Probe timed out after {seconds}s: {path}")]
    ProbeTimeout { path: String, seconds: u64 },

    /// Probe exited with a failure status
    #[error("Probe failed for {path}: {stderr}")]
    ProbeFailed { path: String, stderr: String },

    /// Probe output could not be interpreted
    #[error("Unreadable probe output for {path}: {message}")]
    ProbeParse { path: String, message: String },

    /// Clip has no video stream
    #[error("Clip '{clip}' does not have a video stream")]
    NoVideoStream { clip: String },

    /// Selected creation time source is absent for this clip
    #[error("Clip '{clip}' has no creation time tag")]
    MissingCreationTime { clip: String },

    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),

    /// No project is open in the host
    #[error("No project is currently open. Please open a project and try again.")]
    NoProject,

    /// Zero or several folders selected
    #[error("No folder selected: please select only one folder with subfolders representing the clips for each camera. E.g. footage/Camera1, footage/Camera2, etc.")]
    NoFolderSelected,

    /// Selected folder has no camera subfolders
    #[error("No subfolders found in '{folder}'. Please select a folder with subfolders representing the clips for each camera. E.g. footage/Camera1, footage/Camera2, etc.")]
    NoSubfolders { folder: String },

    /// No video clips across all cameras
    #[error("No video clips found in the camera subfolders")]
    NoClips,

    /// Every camera was excluded after metadata extraction
    #[error("No camera has any clip with usable metadata")]
    NoSynchronizableCameras,

    /// User entered an offset that does not parse
    #[error("Invalid offset '{value}' for camera '{camera}': {reason}")]
    InvalidOffset {
        camera: String,
        value: String,
        reason: String,
    },

    /// Run cancelled at a dialog or checkpoint
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Per-clip failures: the clip is skipped and the run continues
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::ProbeTimeout { .. }
                | DomainError::ProbeFailed { .. }
                | DomainError::ProbeParse { .. }
                | DomainError::NoVideoStream { .. }
                | DomainError::MissingCreationTime { .. }
                | DomainError::FsFail(_)
        )
    }
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(DomainError::ProbeTimeout { path: "a.mp4".into(), seconds: 10 }.is_recoverable());
        assert!(DomainError::NoVideoStream { clip: "a.wav".into() }.is_recoverable());
        assert!(!DomainError::Cancelled.is_recoverable());
        assert!(!DomainError::NoClips.is_recoverable());
        assert!(!DomainError::InvalidOffset {
            camera: "Camera1".into(),
            value: "x".into(),
            reason: "bad".into(),
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = DomainError::MalformedTimecodeString { input: "1:2:3".into() };
        assert_eq!(
            err.to_string(),
            "Malformed timecode string '1:2:3': expected HH:MM:SS:FF"
        );
        assert_eq!(DomainError::Cancelled.to_string(), "Operation cancelled by user");
    }
}
