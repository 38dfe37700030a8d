//! Track model types: `Track`, `TrackId`, `TrackMeta` and `Readiness`.

use std::time::Duration;

use thiserror::Error;

use crate::audio::{AudioError, PlaybackEngine};

use super::classify::TrackSource;

/// Opaque handle identifying one track for the lifetime of a session.
///
/// Ids are allocated by the jukebox and never reused, so a reference held
/// across a removal (or a late resolver completion) simply stops matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u64);

impl TrackId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Lifecycle stage gating whether playback commands are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Remote resolution is still in flight; no engine is bound.
    Pending,
    /// Metadata is known and a playback engine is bound.
    Ready,
    /// Resolution or engine creation failed; the track stays listed but
    /// rejects playback commands.
    Failed,
}

/// Display metadata for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMeta {
    pub title: String,
    pub artist: String,
    pub duration: Option<Duration>,
}

impl Default for TrackMeta {
    fn default() -> Self {
        Self {
            title: "Unknown title".to_string(),
            artist: "Unknown artist".to_string(),
            duration: None,
        }
    }
}

impl TrackMeta {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration: None,
        }
    }
}

/// Why a playback command on a track did nothing.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track is still resolving")]
    StillResolving,
    #[error("track is unavailable")]
    Unavailable,
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// One playable playlist entry.
///
/// The engine is private: the jukebox drives playback exclusively through
/// the capability methods below, never through the engine itself.
pub struct Track {
    pub id: TrackId,
    pub source: TrackSource,
    pub meta: TrackMeta,
    readiness: Readiness,
    engine: Option<PlaybackEngine>,
}

impl Track {
    /// A local track with a bound engine; ready immediately.
    pub fn local(id: TrackId, source: TrackSource, meta: TrackMeta, engine: PlaybackEngine) -> Self {
        Self {
            id,
            source,
            meta,
            readiness: Readiness::Ready,
            engine: Some(engine),
        }
    }

    /// A local track whose engine could not be created.
    pub fn local_failed(id: TrackId, source: TrackSource, meta: TrackMeta) -> Self {
        Self {
            id,
            source,
            meta,
            readiness: Readiness::Failed,
            engine: None,
        }
    }

    /// A remote track awaiting resolution.
    pub fn remote(id: TrackId, source: TrackSource) -> Self {
        Self {
            id,
            source,
            meta: TrackMeta::default(),
            readiness: Readiness::Pending,
            engine: None,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn display_meta(&self) -> &TrackMeta {
        &self.meta
    }

    /// Promote a pending track to ready with resolved metadata and a bound
    /// engine. Ignored unless the track is still `Pending`, which makes
    /// duplicate or out-of-order completions harmless.
    pub fn promote(&mut self, meta: TrackMeta, engine: PlaybackEngine) {
        if self.readiness != Readiness::Pending {
            return;
        }
        self.meta = meta;
        self.engine = Some(engine);
        self.readiness = Readiness::Ready;
    }

    /// Record a failed resolution. Ignored unless the track is still
    /// `Pending`, mirroring `promote`: a duplicate or late failure must not
    /// demote a ready track. The track stays listed with whatever metadata
    /// it has.
    pub fn mark_failed(&mut self) {
        if self.readiness != Readiness::Pending {
            return;
        }
        self.readiness = Readiness::Failed;
        self.engine = None;
    }

    /// Begin or resume playback.
    pub fn play(&mut self) -> Result<(), TrackError> {
        let engine = self.engine_mut()?;
        engine.start()?;
        Ok(())
    }

    /// Halt playback, keeping the position.
    pub fn pause(&mut self) -> Result<(), TrackError> {
        self.engine_mut()?.pause();
        Ok(())
    }

    /// Halt playback and rewind to the start.
    pub fn stop(&mut self) -> Result<(), TrackError> {
        self.engine_mut()?.reset_and_stop();
        Ok(())
    }

    /// Apply a volume in `0.0..=1.0` to the bound engine, if any.
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_volume(volume);
        }
    }

    fn engine_mut(&mut self) -> Result<&mut PlaybackEngine, TrackError> {
        match self.readiness {
            Readiness::Pending => Err(TrackError::StillResolving),
            Readiness::Failed => Err(TrackError::Unavailable),
            Readiness::Ready => self.engine.as_mut().ok_or(TrackError::Unavailable),
        }
    }
}
