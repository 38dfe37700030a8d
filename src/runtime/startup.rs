use std::env;
use std::path::Path;
use std::sync::mpsc::Receiver;

use crate::config::Settings;
use crate::jukebox::Jukebox;
use crate::library::scan;
use crate::resolver::{ManifestResolver, ResolveOutcome, spawn_resolver};

/// Spawn the resolver worker when a manifest is configured and hand its
/// request channel to the jukebox. Without one, remote tracks fail with a
/// notice instead of hanging `Pending` forever.
pub fn wire_resolver(jukebox: &mut Jukebox, settings: &Settings) -> Option<Receiver<ResolveOutcome>> {
    let manifest_path = settings.remote.manifest.as_deref()?;
    match ManifestResolver::load(manifest_path) {
        Ok(resolver) => {
            let (tx, rx) = spawn_resolver(resolver);
            jukebox.set_resolver(tx);
            Some(rx)
        }
        Err(e) => {
            eprintln!("wurli: cannot load resolver manifest: {e}");
            None
        }
    }
}

/// Fill the playlist from the music directory and the configured remote
/// identifiers, then make the first track active (but do not start it).
pub fn seed_playlist(jukebox: &mut Jukebox, settings: &Settings) {
    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    for scanned in scan(Path::new(&dir), &settings.library) {
        if let Some(locator) = scanned.path.to_str() {
            jukebox.add_track(locator, Some(scanned.meta));
        }
    }

    for identifier in &settings.remote.tracks {
        jukebox.add_track(identifier, None);
    }

    if let Some(first) = jukebox.tracks().first().map(|t| t.id) {
        jukebox.change_active(first);
    }
}
