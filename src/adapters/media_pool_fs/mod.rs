//! Filesystem-backed media pool
//!
//! Stands in for the host editor: the selected folder is a directory, each
//! immediate subdirectory is a camera, and each file inside it is a clip.
//! Clip properties live in memory for the duration of the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use tracing::warn;
use walkdir::WalkDir;

use crate::ports::*;

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "mxf", "mts", "m2ts", "mkv", "avi", "braw", "r3d", "crm", "insv", "lrv", "webm",
];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "aac", "m4a", "flac", "aif", "aiff"];
const STILL_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "dng", "heic"];

/// Properties the host owns; writes to them are rejected
const READ_ONLY_PROPERTIES: &[&str] = &[FILE_PATH_PROPERTY, TYPE_PROPERTY, "Clip Name"];

/// Media pool rooted at one directory
pub struct FsMediaPoolAdapter {
    project_name: String,
    root: PathBuf,
}

impl FsMediaPoolAdapter {
    pub fn new(project_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            root: root.into(),
        }
    }
}

impl MediaPoolPort for FsMediaPoolAdapter {
    fn project_name(&self) -> Option<String> {
        Some(self.project_name.clone())
    }

    fn current_folder(&self) -> Option<Arc<dyn MediaFolder>> {
        if !self.root.is_dir() {
            return None;
        }
        Some(Arc::new(FsMediaFolder::new(self.root.clone())))
    }
}

/// A directory in the media pool. Children are listed once and cached so
/// property writes stick to the same clip objects.
pub struct FsMediaFolder {
    path: PathBuf,
    subfolders: OnceLock<Vec<Arc<FsMediaFolder>>>,
    clips: OnceLock<Vec<Arc<FsClip>>>,
}

impl FsMediaFolder {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            subfolders: OnceLock::new(),
            clips: OnceLock::new(),
        }
    }

    pub fn fs_clips(&self) -> &[Arc<FsClip>] {
        self.clips.get_or_init(|| {
            list_children(&self.path, false)
                .into_iter()
                .map(|path| Arc::new(FsClip::new(path)))
                .collect()
        })
    }

    fn fs_subfolders(&self) -> &[Arc<FsMediaFolder>] {
        self.subfolders.get_or_init(|| {
            list_children(&self.path, true)
                .into_iter()
                .map(|path| Arc::new(FsMediaFolder::new(path)))
                .collect()
        })
    }
}

impl MediaFolder for FsMediaFolder {
    fn name(&self) -> String {
        file_name(&self.path)
    }

    fn subfolders(&self) -> Vec<Arc<dyn MediaFolder>> {
        self.fs_subfolders()
            .iter()
            .map(|folder| Arc::clone(folder) as Arc<dyn MediaFolder>)
            .collect()
    }

    fn clips(&self) -> Vec<Arc<dyn ClipHandle>> {
        self.fs_clips()
            .iter()
            .map(|clip| Arc::clone(clip) as Arc<dyn ClipHandle>)
            .collect()
    }
}

/// A media file with an in-memory property table
pub struct FsClip {
    name: String,
    properties: RwLock<BTreeMap<String, String>>,
}

impl FsClip {
    pub fn new(path: PathBuf) -> Self {
        let name = file_name(&path);
        let mut properties = BTreeMap::new();
        properties.insert("Clip Name".to_string(), name.clone());
        properties.insert(TYPE_PROPERTY.to_string(), media_type(&path).to_string());
        properties.insert(
            FILE_PATH_PROPERTY.to_string(),
            path.to_string_lossy().to_string(),
        );

        Self {
            name,
            properties: RwLock::new(properties),
        }
    }

    /// Snapshot of all properties
    pub fn properties(&self) -> BTreeMap<String, String> {
        match self.properties.read() {
            Ok(properties) => properties.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ClipHandle for FsClip {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn get_property(&self, name: &str) -> Option<String> {
        match self.properties.read() {
            Ok(properties) => properties.get(name).cloned(),
            Err(poisoned) => poisoned.into_inner().get(name).cloned(),
        }
    }

    fn set_property(&self, name: &str, value: &str) -> bool {
        if name.trim().is_empty() || READ_ONLY_PROPERTIES.contains(&name) {
            return false;
        }
        match self.properties.write() {
            Ok(mut properties) => {
                properties.insert(name.to_string(), value.to_string());
                true
            }
            Err(_) => false,
        }
    }
}

/// Immediate children sorted by name; hidden entries skipped
fn list_children(dir: &Path, directories: bool) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
        .filter(|entry| {
            if directories {
                entry.file_type().is_dir()
            } else {
                entry.file_type().is_file()
            }
        })
        .map(|entry| entry.into_path())
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Host-style `Type` value derived from the extension
fn media_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        "Video + Audio"
    } else if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        "Audio"
    } else if STILL_EXTENSIONS.contains(&extension.as_str()) {
        "Still"
    } else {
        "Other"
    }
}
