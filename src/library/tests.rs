use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::config::LibrarySettings;

#[test]
fn scan_filters_non_audio_and_sorts_by_title_case_insensitive() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    let tracks = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(tracks.len(), 2);
    // Tags are unreadable, so titles fall back to the file stems.
    assert_eq!(tracks[0].meta.title, "A");
    assert_eq!(tracks[1].meta.title, "b");
    assert_eq!(tracks[0].meta.artist, "Unknown artist");
}

#[test]
fn scan_respects_extension_settings() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("b.flac"), b"x").unwrap();

    let settings = LibrarySettings {
        extensions: vec!["flac".into()],
        ..LibrarySettings::default()
    };
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 1);
    assert!(tracks[0].path.ends_with(Path::new("b.flac")));
}

#[test]
fn scan_skips_hidden_files_unless_enabled() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"x").unwrap();

    let tracks = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].meta.title, "visible");

    let settings = LibrarySettings {
        include_hidden: true,
        ..LibrarySettings::default()
    };
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 2);
}

#[test]
fn scan_non_recursive_stays_in_the_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("top.mp3"), b"x").unwrap();
    fs::write(dir.path().join("sub").join("deep.mp3"), b"x").unwrap();

    let settings = LibrarySettings {
        recursive: false,
        ..LibrarySettings::default()
    };
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].meta.title, "top");
}
