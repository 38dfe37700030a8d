use std::path::{Path, PathBuf};

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::track::TrackMeta;

/// One discovered local audio file.
#[derive(Debug, Clone)]
pub struct ScannedTrack {
    pub path: PathBuf,
    pub meta: TrackMeta,
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Read display metadata from the file's tags, falling back to the file
/// stem for the title and the placeholder artist.
fn read_meta(path: &Path) -> TrackMeta {
    let mut meta = TrackMeta::default();
    meta.title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    if let Ok(tagged) = lofty::read_from_path(path) {
        meta.duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    meta.title = v.trim().to_string();
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                if !v.trim().is_empty() {
                    meta.artist = v.trim().to_string();
                }
            }
        }
    }

    meta
}

/// Walk `dir` and collect playable files, sorted by title,
/// case-insensitively.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<ScannedTrack> {
    let mut tracks: Vec<ScannedTrack> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(ScannedTrack {
                path: path.to_path_buf(),
                meta: read_meta(path),
            });
        }
    }

    tracks.sort_by(|a, b| {
        a.meta
            .title
            .to_lowercase()
            .cmp(&b.meta.title.to_lowercase())
    });
    tracks
}
