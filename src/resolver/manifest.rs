//! Manifest-backed resolver.
//!
//! Stands in for the streaming provider's API: a TOML file maps provider
//! identifiers to display metadata and a locally playable stream locator.
//!
//! ```toml
//! [tracks."soundcloud.com/newnavy/zimbabwe"]
//! title = "Can I Get Wit' Ya in Zimbabwe"
//! artist = "Notorious B.I.G. / New Navy"
//! stream = "songs/Zimbabwe.mp3"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{MetadataResolver, ResolveError, ResolvedMeta};

#[derive(Debug, Clone, Deserialize)]
struct ManifestEntry {
    title: String,
    artist: String,
    stream: String,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    tracks: HashMap<String, ManifestEntry>,
}

pub struct ManifestResolver {
    entries: HashMap<String, ManifestEntry>,
}

impl ManifestResolver {
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ResolveError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let file: ManifestFile =
            toml::from_str(raw).map_err(|e| ResolveError::Unavailable(e.to_string()))?;
        Ok(Self {
            entries: file.tracks,
        })
    }

    /// A resolver with no entries; every lookup fails.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetadataResolver for ManifestResolver {
    fn resolve(&self, identifier: &str) -> Result<ResolvedMeta, ResolveError> {
        // Identifiers in the manifest may omit the scheme; try the raw form
        // first, then the form with the scheme stripped.
        let stripped = identifier
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(identifier);

        self.entries
            .get(identifier)
            .or_else(|| self.entries.get(stripped))
            .map(|entry| ResolvedMeta {
                title: entry.title.clone(),
                artist: entry.artist.clone(),
                stream_locator: entry.stream.clone(),
            })
            .ok_or_else(|| ResolveError::UnknownIdentifier(identifier.to_string()))
    }
}
