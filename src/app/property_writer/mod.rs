// Property writer - Best-effort writes of timecodes and camera labels

use std::sync::Arc;

use crate::domain::model::*;
use crate::domain::rules::ClipTimecodes;
use crate::ports::*;

/// Writes `Start TC`, optionally `End TC`, and the camera property of a clip.
/// A rejected write is logged and reported, never fatal.
pub struct ClipPropertyWriter {
    log_port: Arc<dyn LogPort>,
    camera_property: String,
}

impl ClipPropertyWriter {
    pub fn new(log_port: Arc<dyn LogPort>, settings: &SyncSettings) -> Self {
        Self {
            log_port,
            camera_property: settings.camera_property.clone(),
        }
    }

    /// Returns the names of properties the host refused
    pub async fn write(
        &self,
        camera: &str,
        clip: &dyn ClipHandle,
        timecodes: &ClipTimecodes,
    ) -> Vec<String> {
        let start = timecodes.start.to_string();
        let end = timecodes.end.map(|end| end.to_string());

        let mut writes = vec![(START_TC_PROPERTY, start.as_str())];
        if let Some(end) = end.as_deref() {
            writes.push((END_TC_PROPERTY, end));
        }
        writes.push((self.camera_property.as_str(), camera));

        let mut failed = Vec::new();
        for (property, value) in writes {
            if !clip.set_property(property, value) {
                self.log_port
                    .warn(&format!(
                        "Could not set '{}' to '{}' on clip '{}'",
                        property,
                        value,
                        clip.name()
                    ))
                    .await;
                failed.push(property.to_string());
            }
        }
        failed
    }
}
