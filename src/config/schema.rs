use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wurli/config.toml` or
/// `~/.config/wurli/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WURLI__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub remote: RemoteSettings,
    pub library: LibrarySettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume at startup, `0..=100`.
    pub initial_volume: u8,
    /// Whether selecting the already-active track restarts it from the top
    /// rather than doing nothing.
    pub restart_on_reselect: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            restart_on_reselect: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Streaming-provider domain namespaces; locators under these domains
    /// become remote tracks.
    pub providers: Vec<String>,
    /// Path to the resolver manifest mapping identifiers to metadata and
    /// stream locators. Remote tracks fail to resolve without one.
    pub manifest: Option<PathBuf>,
    /// Remote identifiers queued at startup.
    pub tracks: Vec<String>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            providers: vec!["soundcloud.com".into()],
            manifest: None,
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// How much `+` / `-` move the volume per press.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the key-binding help line is shown at the bottom.
    pub show_controls_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ wurli ~ ".to_string(),
            show_controls_help: true,
        }
    }
}
