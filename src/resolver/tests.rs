use std::time::Duration;

use super::*;
use crate::track::TrackId;

struct EchoResolver;

impl MetadataResolver for EchoResolver {
    fn resolve(&self, identifier: &str) -> Result<ResolvedMeta, ResolveError> {
        if identifier.contains("missing") {
            return Err(ResolveError::UnknownIdentifier(identifier.to_string()));
        }
        Ok(ResolvedMeta {
            title: format!("title of {identifier}"),
            artist: "echo".to_string(),
            stream_locator: format!("{identifier}.mp3"),
        })
    }
}

#[test]
fn worker_delivers_outcomes_in_processing_order() {
    let (tx, rx) = spawn_resolver(EchoResolver);

    for (raw, identifier) in [(1u64, "a"), (2, "missing-b"), (3, "c")] {
        tx.send(ResolveRequest {
            track: TrackId::new(raw),
            identifier: identifier.to_string(),
        })
        .unwrap();
    }
    drop(tx);

    let mut outcomes = Vec::new();
    while let Ok(outcome) = rx.recv_timeout(Duration::from_secs(5)) {
        outcomes.push(outcome);
    }

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].track, TrackId::new(1));
    assert!(outcomes[0].result.is_ok());
    assert_eq!(outcomes[1].track, TrackId::new(2));
    assert!(matches!(
        outcomes[1].result,
        Err(ResolveError::UnknownIdentifier(_))
    ));
    assert_eq!(
        outcomes[2].result.as_ref().unwrap().stream_locator,
        "c.mp3"
    );
}

#[test]
fn manifest_parses_and_resolves_with_and_without_scheme() {
    let manifest = ManifestResolver::parse(
        r#"
[tracks."soundcloud.com/newnavy/zimbabwe"]
title = "Can I Get Wit' Ya in Zimbabwe"
artist = "Notorious B.I.G. / New Navy"
stream = "songs/Zimbabwe.mp3"
"#,
    )
    .unwrap();
    assert_eq!(manifest.len(), 1);

    let direct = manifest.resolve("soundcloud.com/newnavy/zimbabwe").unwrap();
    assert_eq!(direct.title, "Can I Get Wit' Ya in Zimbabwe");
    assert_eq!(direct.stream_locator, "songs/Zimbabwe.mp3");

    let with_scheme = manifest
        .resolve("https://soundcloud.com/newnavy/zimbabwe")
        .unwrap();
    assert_eq!(with_scheme.artist, "Notorious B.I.G. / New Navy");
}

#[test]
fn manifest_reports_unknown_identifiers() {
    let manifest = ManifestResolver::empty();
    assert!(manifest.is_empty());
    assert!(matches!(
        manifest.resolve("soundcloud.com/nobody/nothing"),
        Err(ResolveError::UnknownIdentifier(_))
    ));
}

#[test]
fn manifest_rejects_malformed_toml() {
    assert!(matches!(
        ManifestResolver::parse("tracks = 3"),
        Err(ResolveError::Unavailable(_))
    ));
}
