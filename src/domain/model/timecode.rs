// Timecode value type - HH:MM:SS:FF at a fixed frame rate

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Length of the timecode cycle. Frame totals wrap at this boundary and never
/// carry into the hours field.
pub const HOUR_WRAP_SECONDS: u32 = 3600;

/// Fraction of a frame absorbed when a duration lands on a frame boundary.
/// Covers the microsecond rounding in `to_duration` at fractional rates.
const FRAME_EPSILON: f64 = 1e-3;

/// A frame-accurate position `HH:MM:SS:FF` at a fixed frame rate.
///
/// Non drop-frame. The frame rate is real valued so 29.97 is representable.
/// The fields count frames at the nominal rate (the rate rounded up, so 30 for
/// 29.97), while durations convert through the real rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timecode {
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    frame_rate: f64,
}

impl Timecode {
    /// Create a timecode, validating every field against the frame rate
    pub fn new(
        frame_rate: f64,
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
    ) -> DomainResult<Self> {
        validate_frame_rate(frame_rate)?;
        if minutes >= 60 {
            return Err(DomainError::InvalidTimecode(format!(
                "minutes must be less than 60, got {}",
                minutes
            )));
        }
        if seconds >= 60 {
            return Err(DomainError::InvalidTimecode(format!(
                "seconds must be less than 60, got {}",
                seconds
            )));
        }
        if f64::from(frames) >= frame_rate {
            return Err(DomainError::InvalidTimecode(format!(
                "frames must be less than the frame rate ({} fps), got {}",
                frame_rate, frames
            )));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
            frame_rate,
        })
    }

    /// `00:00:00:00` at the given rate
    pub fn zero(frame_rate: f64) -> DomainResult<Self> {
        Self::new(frame_rate, 0, 0, 0, 0)
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Total frame count represented by this timecode
    pub fn total_frames(&self) -> i64 {
        let total_seconds = i64::from(self.hours) * 3600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds);
        total_seconds * nominal_frame_rate(self.frame_rate) + i64::from(self.frames)
    }

    /// Rebuild a timecode from a frame total.
    ///
    /// The total is reduced modulo one hour of frames first, so anything past
    /// the hour boundary cycles back through `00:MM:SS:FF`. Negative totals
    /// wrap the same way.
    pub fn from_total_frames(total_frames: i64, frame_rate: f64) -> DomainResult<Self> {
        validate_frame_rate(frame_rate)?;

        let frames_per_second = nominal_frame_rate(frame_rate);
        let frames_per_minute = 60 * frames_per_second;
        let frames_per_cycle = i64::from(HOUR_WRAP_SECONDS) * frames_per_second;

        let remaining = total_frames.rem_euclid(frames_per_cycle);
        let minutes = remaining / frames_per_minute;
        let seconds = remaining % frames_per_minute / frames_per_second;
        let frames = remaining % frames_per_second;

        Ok(Self {
            hours: 0,
            minutes: minutes as u32,
            seconds: seconds as u32,
            frames: frames as u32,
            frame_rate,
        })
    }

    /// Convert a wall-clock duration into a timecode, flooring to whole frames
    pub fn from_duration(duration: TimeDelta, frame_rate: f64) -> DomainResult<Self> {
        validate_frame_rate(frame_rate)?;

        let total_milliseconds = match duration.num_microseconds() {
            Some(micros) => micros as f64 / 1000.0,
            None => duration.num_milliseconds() as f64,
        };
        let frame_duration_ms = 1000.0 / frame_rate;
        let total_frames = (total_milliseconds / frame_duration_ms + FRAME_EPSILON).floor() as i64;

        Self::from_total_frames(total_frames, frame_rate)
    }

    /// Wall-clock duration of this timecode
    pub fn to_duration(&self) -> TimeDelta {
        let micros = (self.total_frames() as f64 / self.frame_rate * 1_000_000.0).round() as i64;
        TimeDelta::microseconds(micros)
    }

    /// Add two timecodes at the same frame rate
    pub fn checked_add(&self, other: &Timecode) -> DomainResult<Self> {
        self.ensure_same_rate(other)?;
        Self::from_total_frames(self.total_frames() + other.total_frames(), self.frame_rate)
    }

    /// Subtract two timecodes at the same frame rate
    pub fn checked_sub(&self, other: &Timecode) -> DomainResult<Self> {
        self.ensure_same_rate(other)?;
        Self::from_total_frames(self.total_frames() - other.total_frames(), self.frame_rate)
    }

    /// Add a raw frame count, e.g. a clip length
    pub fn add_frames(&self, frames: i64) -> DomainResult<Self> {
        Self::from_total_frames(self.total_frames() + frames, self.frame_rate)
    }

    /// Parse `HH:MM:SS:FF`
    pub fn parse(text: &str, frame_rate: f64) -> DomainResult<Self> {
        let trimmed = text.trim();
        let malformed = || DomainError::MalformedTimecodeString {
            input: text.to_string(),
        };

        let fields = trimmed
            .split(':')
            .map(|field| {
                if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                field.parse::<u32>().map_err(|_| malformed())
            })
            .collect::<DomainResult<Vec<u32>>>()?;

        match fields.as_slice() {
            [hours, minutes, seconds, frames] => {
                Self::new(frame_rate, *hours, *minutes, *seconds, *frames)
            }
            _ => Err(malformed()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_frames() == 0
    }

    fn ensure_same_rate(&self, other: &Timecode) -> DomainResult<()> {
        if (self.frame_rate - other.frame_rate).abs() > f64::EPSILON {
            return Err(DomainError::IncompatibleFrameRate {
                left: self.frame_rate,
                right: other.frame_rate,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Frames per timecode second: the largest frame field plus one
fn nominal_frame_rate(frame_rate: f64) -> i64 {
    (frame_rate.ceil() as i64).max(1)
}

fn validate_frame_rate(frame_rate: f64) -> DomainResult<()> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(DomainError::InvalidTimecode(format!(
            "frame rate must be positive, got {}",
            frame_rate
        )));
    }
    Ok(())
}
