// Adapters - External system implementations

pub mod fs_local;
pub mod media_pool_fs;
pub mod preset_dialog;
pub mod probe_ffprobe;
pub mod terminal_dialog;
pub mod toml_config;
pub mod tracing_log;
pub mod tracing_progress;

// Re-export adapters
pub use fs_local::FsLocalAdapter;
pub use media_pool_fs::FsMediaPoolAdapter;
pub use preset_dialog::PresetDialogAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use terminal_dialog::TerminalDialogAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
pub use tracing_progress::TracingProgressAdapter;
