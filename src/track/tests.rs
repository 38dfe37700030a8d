use super::*;
use crate::audio::PlaybackEngine;
use crate::audio::fake::FakeOutput;
use crate::audio::AudioOutput;

fn providers() -> Vec<String> {
    vec!["soundcloud.com".to_string()]
}

fn engine(output: &FakeOutput, locator: &str) -> PlaybackEngine {
    PlaybackEngine::new(output.create(locator).unwrap())
}

#[test]
fn classify_matches_provider_domains_and_subdomains() {
    for locator in [
        "https://soundcloud.com/artist/song",
        "http://soundcloud.com/artist/song",
        "soundcloud.com/artist/song",
        "api.soundcloud.com/tracks/123",
        "  https://soundcloud.com/padded  ",
        "HTTPS://SOUNDCLOUD.COM/SHOUTING",
    ] {
        assert!(
            matches!(classify(locator, &providers()), TrackSource::Remote { .. }),
            "expected remote: {locator:?}"
        );
    }
}

#[test]
fn classify_defaults_to_local() {
    for locator in [
        "a.mp3",
        "songs/Zimbabwe.mp3",
        "/home/user/music/track.flac",
        "https://example.com/file.mp3",
        "notsoundcloud.com/artist/song",
        "blob:d3f1c2",
        "",
        "   ",
        "C://music/file.mp3",
    ] {
        assert!(
            matches!(classify(locator, &providers()), TrackSource::Local { .. }),
            "expected local: {locator:?}"
        );
    }
}

#[test]
fn classify_with_no_providers_is_always_local() {
    assert!(matches!(
        classify("https://soundcloud.com/x", &[]),
        TrackSource::Local { .. }
    ));
}

#[test]
fn meta_defaults_to_unknown_placeholders() {
    let meta = TrackMeta::default();
    assert_eq!(meta.title, "Unknown title");
    assert_eq!(meta.artist, "Unknown artist");
    assert_eq!(meta.duration, None);
}

#[test]
fn local_track_is_ready_and_delegates_playback() {
    let output = FakeOutput::new();
    let log = output.log_handle();

    let source = classify("a.mp3", &providers());
    let mut track = Track::local(
        TrackId::new(0),
        source,
        TrackMeta::new("A", "tester"),
        engine(&output, "a.mp3"),
    );

    assert_eq!(track.readiness(), Readiness::Ready);
    track.play().unwrap();
    track.pause().unwrap();
    track.stop().unwrap();

    assert_eq!(
        log.borrow().as_slice(),
        [
            "create a.mp3".to_string(),
            "start a.mp3".to_string(),
            "pause a.mp3".to_string(),
            "pause a.mp3".to_string(),
            "reset a.mp3".to_string(),
        ]
    );
}

#[test]
fn pending_and_failed_tracks_reject_playback_without_panicking() {
    let source = classify("soundcloud.com/artist/song", &providers());
    let mut track = Track::remote(TrackId::new(1), source);

    assert_eq!(track.readiness(), Readiness::Pending);
    assert!(matches!(track.play(), Err(TrackError::StillResolving)));
    assert!(matches!(track.pause(), Err(TrackError::StillResolving)));
    assert!(matches!(track.stop(), Err(TrackError::StillResolving)));

    track.mark_failed();
    assert_eq!(track.readiness(), Readiness::Failed);
    assert!(matches!(track.play(), Err(TrackError::Unavailable)));
}

#[test]
fn promote_binds_meta_and_engine_once() {
    let output = FakeOutput::new();
    let source = classify("soundcloud.com/artist/song", &providers());
    let mut track = Track::remote(TrackId::new(2), source);

    track.promote(
        TrackMeta::new("Resolved", "Artist"),
        engine(&output, "stream.mp3"),
    );
    assert_eq!(track.readiness(), Readiness::Ready);
    assert_eq!(track.meta.title, "Resolved");

    // A duplicate completion must not clobber the bound state.
    track.promote(
        TrackMeta::new("Duplicate", "Other"),
        engine(&output, "other.mp3"),
    );
    assert_eq!(track.meta.title, "Resolved");
}

#[test]
fn mark_failed_is_ignored_once_ready() {
    let output = FakeOutput::new();
    let source = classify("soundcloud.com/artist/song", &providers());
    let mut track = Track::remote(TrackId::new(4), source);

    track.promote(
        TrackMeta::new("Resolved", "Artist"),
        engine(&output, "stream.mp3"),
    );
    track.mark_failed();

    assert_eq!(track.readiness(), Readiness::Ready);
    track.play().unwrap();
}

#[test]
fn promote_is_ignored_after_failure() {
    let output = FakeOutput::new();
    let source = classify("soundcloud.com/artist/song", &providers());
    let mut track = Track::remote(TrackId::new(3), source);

    track.mark_failed();
    track.promote(TrackMeta::new("Late", "Late"), engine(&output, "late.mp3"));
    assert_eq!(track.readiness(), Readiness::Failed);
    assert!(matches!(track.play(), Err(TrackError::Unavailable)));
}
