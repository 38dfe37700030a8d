//! Asynchronous remote-track metadata resolution.
//!
//! Remote tracks are added `Pending`; a worker thread runs the actual
//! resolver and reports back over an `mpsc` channel the event loop drains,
//! so track state is only ever mutated on the jukebox's own thread.

mod manifest;
mod worker;

pub use manifest::*;
pub use worker::*;

use thiserror::Error;

use crate::track::TrackId;

/// What a successful resolution yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMeta {
    pub title: String,
    pub artist: String,
    /// Locator the audio output can open for this track's stream.
    pub stream_locator: String,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown identifier {0}")]
    UnknownIdentifier(String),
    #[error("resolver unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a provider identifier into metadata and a stream locator.
///
/// Implementations run on the resolver worker thread; `wurli` ships a
/// manifest-backed one and tests inject their own.
pub trait MetadataResolver: Send + 'static {
    fn resolve(&self, identifier: &str) -> Result<ResolvedMeta, ResolveError>;
}

/// One in-flight resolution request.
#[derive(Debug)]
pub struct ResolveRequest {
    pub track: TrackId,
    pub identifier: String,
}

/// A completed resolution, success or failure, ready to be applied.
#[derive(Debug)]
pub struct ResolveOutcome {
    pub track: TrackId,
    pub result: Result<ResolvedMeta, ResolveError>,
}

#[cfg(test)]
mod tests;
