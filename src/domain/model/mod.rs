// Domain models - Core types and data structures

mod clip;
mod settings;
mod timecode;

pub use clip::{
    parse_creation_tag, parse_frame_rate_numerator, ClipMetadataRecord, ProbeFormat, ProbeOutput,
    ProbeStream, StartTimeSource,
};
pub use settings::{
    SettingsOverrides, SyncSettings, CAMERA_PROPERTY_CHOICES, DEFAULT_PROBE_TIMEOUT, END_TC_PROPERTY,
    START_TC_PROPERTY,
};
pub use timecode::{Timecode, HOUR_WRAP_SECONDS};
