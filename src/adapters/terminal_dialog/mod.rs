//! Terminal dialogs
//!
//! Line-based stand-ins for the host's settings and offset windows. The
//! reader and writer are generic so tests can drive the prompts from memory.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::{StartTimeSource, SyncSettings, CAMERA_PROPERTY_CHOICES};
use crate::domain::rules::OffsetEdit;
use crate::ports::*;

/// Interactive settings and offset review on a terminal
pub struct TerminalDialogAdapter<R, W> {
    io: Mutex<(R, W)>,
}

impl TerminalDialogAdapter<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout, answer on stdin
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> TerminalDialogAdapter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn with_io<T>(
        &self,
        f: impl FnOnce(&mut R, &mut W) -> std::io::Result<T>,
    ) -> Result<T, DomainError> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| DomainError::InternalError("terminal dialog lock poisoned".to_string()))?;
        let (reader, writer) = &mut *guard;
        f(reader, writer)
            .map_err(|e| DomainError::InternalError(format!("terminal I/O failed: {}", e)))
    }
}

/// Print `prompt` and read one line. `None` on end of input.
fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_settings_summary<W: Write>(writer: &mut W, request: &SettingsRequest) -> std::io::Result<()> {
    let settings = &request.defaults;

    writeln!(writer, "Project: {}", request.project_name)?;
    writeln!(writer, "Folder:  {}", request.folder_name)?;
    writeln!(
        writer,
        "Found {} camera(s) with {} video clip(s):",
        request.cameras.len(),
        request.total_clips
    )?;
    for camera in &request.cameras {
        writeln!(writer, "  {:<24} {} clip(s)", camera.name, camera.clip_count)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Start time source:   {}", settings.start_time_source)?;
    writeln!(writer, "Camera property:     {}", settings.camera_property)?;
    writeln!(writer, "Multicam clip name:  {}", settings.multicam_clip_name)?;
    match settings.max_clips_per_camera {
        Some(limit) => writeln!(writer, "Clips per camera:    first {}", limit)?,
        None => writeln!(writer, "Clips per camera:    all")?,
    }
    match settings.project_frame_rate {
        Some(rate) => writeln!(writer, "Frame rate:          {} fps", rate)?,
        None => writeln!(writer, "Frame rate:          from earliest clip")?,
    }
    writeln!(
        writer,
        "End TC:              {}",
        if settings.write_end_timecode { "on" } else { "off" }
    )?;
    writeln!(
        writer,
        "Debug:               {}",
        if settings.debug { "on" } else { "off" }
    )?;
    writeln!(writer)
}

/// Prompt until `parse` accepts the answer; blank keeps `current`.
/// `None` on end of input.
fn ask_field<R, W, T>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    current: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> std::io::Result<Option<Option<T>>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = ask(reader, writer, &format!("  {} [{}]: ", label, current))? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(None));
        }
        match parse(&answer) {
            Some(value) => return Ok(Some(Some(value))),
            None => writeln!(writer, "  '{}' is not a valid value", answer)?,
        }
    }
}

fn parse_switch(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" | "on" | "true" => Some(true),
        "n" | "no" | "off" | "false" => Some(false),
        _ => None,
    }
}

fn parse_clip_limit(answer: &str) -> Option<Option<usize>> {
    if answer.eq_ignore_ascii_case("all") {
        return Some(None);
    }
    answer.parse::<usize>().ok().filter(|&limit| limit > 0).map(Some)
}

/// Field-by-field edit of the run settings. `None` when input ends.
fn edit_settings<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    defaults: &SyncSettings,
) -> std::io::Result<Option<SyncSettings>> {
    let mut settings = defaults.clone();
    writeln!(writer, "Press Enter to keep a value.")?;

    let choices = CAMERA_PROPERTY_CHOICES.join(", ");
    let Some(source) = ask_field(
        reader,
        writer,
        "Start time source (OS_FILE_CREATION_TIME, TAG_CREATION_TIME)",
        &settings.start_time_source.to_string(),
        |answer| answer.parse::<StartTimeSource>().ok(),
    )?
    else {
        return Ok(None);
    };
    let Some(camera_property) = ask_field(
        reader,
        writer,
        &format!("Camera property ({})", choices),
        &settings.camera_property,
        |answer| Some(answer.to_string()),
    )?
    else {
        return Ok(None);
    };
    let Some(multicam_clip_name) = ask_field(
        reader,
        writer,
        "Multicam clip name",
        &settings.multicam_clip_name,
        |answer| Some(answer.to_string()),
    )?
    else {
        return Ok(None);
    };
    let current_limit = settings
        .max_clips_per_camera
        .map_or_else(|| "all".to_string(), |limit| limit.to_string());
    let Some(max_clips) = ask_field(
        reader,
        writer,
        "Clips per camera (number or all)",
        &current_limit,
        parse_clip_limit,
    )?
    else {
        return Ok(None);
    };
    let Some(debug) = ask_field(
        reader,
        writer,
        "Debug (y/n)",
        if settings.debug { "y" } else { "n" },
        parse_switch,
    )?
    else {
        return Ok(None);
    };

    if let Some(source) = source {
        settings.start_time_source = source;
    }
    if let Some(camera_property) = camera_property {
        settings.camera_property = camera_property;
    }
    if let Some(multicam_clip_name) = multicam_clip_name {
        settings.multicam_clip_name = multicam_clip_name;
    }
    if let Some(max_clips) = max_clips {
        settings.max_clips_per_camera = max_clips;
    }
    if let Some(debug) = debug {
        settings.debug = debug;
    }
    Ok(Some(settings))
}

#[async_trait]
impl<R, W> SettingsPort for TerminalDialogAdapter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    async fn request_settings(&self, request: &SettingsRequest) -> Result<SettingsOutcome, DomainError> {
        self.with_io(|reader, writer| {
            write_settings_summary(writer, request)?;
            let answer = ask(reader, writer, "Do you want to proceed? [Y/n/e to edit] ")?;

            Ok(match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("") | Some("y") | Some("yes") => {
                    SettingsOutcome::Submitted(request.defaults.clone())
                }
                Some("e") | Some("edit") => match edit_settings(reader, writer, &request.defaults)? {
                    Some(settings) => SettingsOutcome::Submitted(settings),
                    None => SettingsOutcome::Cancelled,
                },
                _ => SettingsOutcome::Cancelled,
            })
        })
    }
}

#[async_trait]
impl<R, W> OffsetReviewPort for TerminalDialogAdapter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    async fn review_offsets(&self, request: &OffsetReviewRequest) -> Result<OffsetReviewOutcome, DomainError> {
        self.with_io(|reader, writer| {
            writeln!(
                writer,
                "Camera offsets at {} fps, zero time {}",
                request.frame_rate,
                request.global_zero.to_rfc3339()
            )?;
            writeln!(
                writer,
                "Enter HH:MM:SS:FF to change an offset, press Enter to keep it, q to cancel."
            )?;

            let mut edits = Vec::with_capacity(request.cameras.len());
            for entry in &request.cameras {
                let prompt = format!(
                    "  {} (earliest clip {}) [{}]: ",
                    entry.camera, entry.earliest_clip, entry.default_offset
                );
                match ask(reader, writer, &prompt)? {
                    None => return Ok(OffsetReviewOutcome::Cancelled),
                    Some(answer) if answer.eq_ignore_ascii_case("q") => {
                        return Ok(OffsetReviewOutcome::Cancelled)
                    }
                    Some(answer) => edits.push(OffsetEdit::new(entry.camera.clone(), answer)),
                }
            }
            Ok(OffsetReviewOutcome::Edited(edits))
        })
    }
}
