// Clip metadata - probe output contract and the per-clip record built from it

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Which timestamp is authoritative for a clip's creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartTimeSource {
    /// Filesystem creation time of the media file
    OsFileCreationTime,
    /// `creation_time` tag embedded in the container
    #[default]
    TagCreationTime,
}

impl StartTimeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartTimeSource::OsFileCreationTime => "OS_FILE_CREATION_TIME",
            StartTimeSource::TagCreationTime => "TAG_CREATION_TIME",
        }
    }
}

impl FromStr for StartTimeSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "OS_FILE_CREATION_TIME" | "OS" => Ok(StartTimeSource::OsFileCreationTime),
            "TAG_CREATION_TIME" | "TAG" => Ok(StartTimeSource::TagCreationTime),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid start time source: {}. Valid sources: OS_FILE_CREATION_TIME, TAG_CREATION_TIME",
                s
            ))),
        }
    }
}

impl fmt::Display for StartTimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured output of `ffprobe -print_format json -show_format -show_streams`.
///
/// Only the fields the synchronizer consumes are modelled; everything else is
/// ignored by serde.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: ProbeFormat,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub nb_streams: Option<u32>,
    /// Numeric string, bytes
    #[serde(default)]
    pub size: Option<String>,
    /// Numeric string, seconds
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub codec_name: Option<String>,
    #[serde(default)]
    pub codec_long_name: Option<String>,
    /// Rational `"N/D"`
    #[serde(default)]
    pub r_frame_rate: Option<String>,
    /// Numeric string
    #[serde(default)]
    pub nb_frames: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ProbeStream {
    pub fn is_video(&self) -> bool {
        self.codec_type.as_deref() == Some("video")
    }
}

impl ProbeOutput {
    /// Video streams in probe order
    pub fn video_streams(&self) -> Vec<&ProbeStream> {
        self.streams.iter().filter(|s| s.is_video()).collect()
    }

    /// Raw `creation_time` container tag
    pub fn creation_time_tag(&self) -> Option<&str> {
        self.format.tags.get("creation_time").map(String::as_str)
    }
}

/// Metadata for one clip, built once during the metadata pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipMetadataRecord {
    pub clip_name: String,
    pub file_path: PathBuf,
    pub size_bytes: u64,
    pub duration_seconds: f64,
    /// Numerator of `r_frame_rate`; the denominator is discarded
    pub frame_rate: u32,
    pub frame_count: u64,
    pub tag_creation_time: Option<DateTime<Utc>>,
    pub os_creation_time: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    pub codec_name: String,
    pub codec_long_name: String,
    pub stream_count: u32,
    pub video_stream_count: usize,
}

impl ClipMetadataRecord {
    /// Build a record from probe output plus filesystem facts.
    ///
    /// The first video stream in probe order is the main stream. Fails with
    /// `NoVideoStream` when there is none.
    pub fn from_probe(
        clip_name: &str,
        file_path: PathBuf,
        probe: &ProbeOutput,
        os_creation_time: DateTime<Utc>,
        file_size: u64,
    ) -> DomainResult<Self> {
        let video_streams = probe.video_streams();
        let main_stream = video_streams.first().ok_or_else(|| DomainError::NoVideoStream {
            clip: clip_name.to_string(),
        })?;

        let parse_error = |message: String| DomainError::ProbeParse {
            path: file_path.display().to_string(),
            message,
        };

        let frame_rate = main_stream
            .r_frame_rate
            .as_deref()
            .and_then(parse_frame_rate_numerator)
            .ok_or_else(|| {
                parse_error(format!(
                    "unusable r_frame_rate {:?}",
                    main_stream.r_frame_rate
                ))
            })?;

        let duration_seconds = match probe.format.duration.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| parse_error(format!("invalid duration '{}'", raw)))?,
            None => 0.0,
        };

        let size_bytes = match probe.format.size.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| parse_error(format!("invalid size '{}'", raw)))?,
            None => file_size,
        };

        let frame_count = match main_stream.nb_frames.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(|frames| frames as u64)
                .map_err(|_| parse_error(format!("invalid nb_frames '{}'", raw)))?,
            None => estimate_frame_count(duration_seconds, frame_rate),
        };

        // an unreadable tag counts as missing; only the tag source needs it
        let tag_creation_time = probe.creation_time_tag().and_then(|raw| {
            let parsed = parse_creation_tag(raw);
            if parsed.is_none() {
                tracing::warn!(
                    "Ignoring unreadable creation_time tag '{}' of clip '{}'",
                    raw,
                    clip_name
                );
            }
            parsed
        });

        Ok(Self {
            clip_name: clip_name.to_string(),
            file_path,
            size_bytes,
            duration_seconds,
            frame_rate,
            frame_count,
            tag_creation_time,
            os_creation_time,
            width: main_stream.width.unwrap_or(0),
            height: main_stream.height.unwrap_or(0),
            codec_name: main_stream.codec_name.clone().unwrap_or_default(),
            codec_long_name: main_stream.codec_long_name.clone().unwrap_or_default(),
            stream_count: probe
                .format
                .nb_streams
                .unwrap_or(probe.streams.len() as u32),
            video_stream_count: video_streams.len(),
        })
    }

    /// Creation time according to the selected source
    pub fn creation_time(&self, source: StartTimeSource) -> DomainResult<DateTime<Utc>> {
        match source {
            StartTimeSource::OsFileCreationTime => Ok(self.os_creation_time),
            StartTimeSource::TagCreationTime => {
                self.tag_creation_time
                    .ok_or_else(|| DomainError::MissingCreationTime {
                        clip: self.clip_name.clone(),
                    })
            }
        }
    }
}

/// Integer numerator of a `"num/den"` rate. Zero rates are rejected.
pub fn parse_frame_rate_numerator(raw: &str) -> Option<u32> {
    let numerator = raw.split('/').next()?.trim().parse::<u32>().ok()?;
    (numerator > 0).then_some(numerator)
}

/// ISO-8601 creation tag; values without an offset are taken as UTC
pub fn parse_creation_tag(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn estimate_frame_count(duration_seconds: f64, frame_rate: u32) -> u64 {
    let estimate = (duration_seconds * f64::from(frame_rate)).floor();
    tracing::debug!(
        "nb_frames missing, estimated {} frames from {:.3}s at {} fps",
        estimate,
        duration_seconds,
        frame_rate
    );
    estimate.max(0.0) as u64
}
