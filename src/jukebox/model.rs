//! The `Jukebox` state machine.

use std::sync::mpsc::Sender;

use rand::rng;
use rand::seq::SliceRandom;

use crate::audio::{AudioError, AudioOutput, PlaybackEngine};
use crate::resolver::{ResolveOutcome, ResolveRequest};
use crate::track::{Readiness, Track, TrackError, TrackId, TrackMeta, TrackSource, classify};
use crate::view::{Presenter, TrackCard};

/// The playback state of the jukebox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Result of a `play` call. Everything short of `Started` left the play
/// state untouched; callers distinguish action-taken from no-op here.
#[derive(Debug)]
#[must_use]
pub enum PlayOutcome {
    /// Playback started (or resumed) on this track.
    Started(TrackId),
    /// Nothing to play: no active track was set.
    NoActiveTrack,
    /// The active track cannot play yet (pending) or at all (failed).
    NotReady(TrackId, Readiness),
    /// The audio primitive refused to start the active track.
    OutputFailed(TrackId, AudioError),
}

impl PlayOutcome {
    pub fn started(&self) -> bool {
        matches!(self, PlayOutcome::Started(_))
    }
}

/// Construction-time knobs, loaded from config by the runtime.
#[derive(Debug, Clone)]
pub struct JukeboxOptions {
    /// Starting volume, `0..=100`.
    pub initial_volume: u8,
    /// Whether selecting the already-active track restarts it (stop and
    /// rewind) instead of being a plain no-op.
    pub restart_on_reselect: bool,
    /// Streaming-provider domain namespaces fed to the classifier.
    pub providers: Vec<String>,
}

impl Default for JukeboxOptions {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            restart_on_reselect: true,
            providers: vec!["soundcloud.com".to_string()],
        }
    }
}

pub struct Jukebox {
    tracks: Vec<Track>,
    active: Option<TrackId>,
    play_state: PlayState,
    volume: u8,
    next_id: u64,
    output: Box<dyn AudioOutput>,
    presenter: Box<dyn Presenter>,
    resolve_tx: Option<Sender<ResolveRequest>>,
    providers: Vec<String>,
    restart_on_reselect: bool,
}

impl Jukebox {
    pub fn new(
        output: Box<dyn AudioOutput>,
        presenter: Box<dyn Presenter>,
        options: JukeboxOptions,
    ) -> Self {
        Self {
            tracks: Vec::new(),
            active: None,
            play_state: PlayState::Stopped,
            volume: options.initial_volume.min(100),
            next_id: 0,
            output,
            presenter,
            resolve_tx: None,
            providers: options.providers,
            restart_on_reselect: options.restart_on_reselect,
        }
    }

    /// Wire the resolver request channel. Remote tracks added without one
    /// are marked failed immediately.
    pub fn set_resolver(&mut self, tx: Sender<ResolveRequest>) {
        self.resolve_tx = Some(tx);
    }

    // --- read-only accessors -------------------------------------------

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn active(&self) -> Option<TrackId> {
        self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        let id = self.active?;
        self.position_of(id)
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    // --- operations -----------------------------------------------------

    /// Append a track built from `locator`. Total: a locator outside every
    /// provider namespace becomes a local track, never an error.
    pub fn add_track(&mut self, locator: &str, meta: Option<TrackMeta>) -> TrackId {
        let id = self.alloc_id();
        let source = classify(locator, &self.providers);

        let track = match &source {
            TrackSource::Local { locator } => {
                let meta = meta.unwrap_or_default();
                match self.output.create(locator) {
                    Ok(handle) => {
                        let mut engine = PlaybackEngine::new(handle);
                        engine.set_volume(self.volume_scale());
                        Track::local(id, source.clone(), meta, engine)
                    }
                    Err(err) => {
                        self.presenter.notice(&format!("cannot open {locator}: {err}"));
                        Track::local_failed(id, source.clone(), meta)
                    }
                }
            }
            TrackSource::Remote { identifier } => {
                let mut track = Track::remote(id, source.clone());
                match &self.resolve_tx {
                    Some(tx) => {
                        let request = ResolveRequest {
                            track: id,
                            identifier: identifier.clone(),
                        };
                        if tx.send(request).is_err() {
                            track.mark_failed();
                            self.presenter.notice("resolver is gone; track unavailable");
                        }
                    }
                    None => {
                        track.mark_failed();
                        self.presenter
                            .notice(&format!("no resolver configured for {identifier}"));
                    }
                }
                track
            }
        };

        self.tracks.push(track);
        self.notify_view();
        id
    }

    /// Make `id` the active track, stopping the previous one first.
    ///
    /// Re-selecting the current active track restarts it (stop + rewind)
    /// unless `restart_on_reselect` is off. Unknown ids are a `None` no-op.
    pub fn change_active(&mut self, id: TrackId) -> Option<TrackId> {
        self.position_of(id)?;

        if !self.restart_on_reselect && self.active == Some(id) {
            return Some(id);
        }

        if let Some(prev) = self.active {
            self.stop_track(prev);
        }
        self.active = Some(id);
        // Nothing is engaged after the switch until the next play.
        self.play_state = PlayState::Stopped;
        self.notify_view();
        Some(id)
    }

    /// Start playback, optionally switching the active track first.
    pub fn play(&mut self, track: Option<TrackId>) -> PlayOutcome {
        if let Some(id) = track {
            if self.change_active(id).is_none() {
                return PlayOutcome::NoActiveTrack;
            }
        }

        let Some(id) = self.active else {
            return PlayOutcome::NoActiveTrack;
        };

        let Some(position) = self.position_of(id) else {
            return PlayOutcome::NoActiveTrack;
        };
        let result = self.tracks[position].play();

        match result {
            Ok(()) => {
                self.play_state = PlayState::Playing;
                self.notify_view();
                PlayOutcome::Started(id)
            }
            Err(TrackError::StillResolving) => {
                self.presenter.notice("track is still resolving");
                PlayOutcome::NotReady(id, Readiness::Pending)
            }
            Err(TrackError::Unavailable) => {
                self.presenter.notice("track is unavailable");
                PlayOutcome::NotReady(id, Readiness::Failed)
            }
            Err(TrackError::Audio(err)) => {
                // Play state keeps its pre-attempt value; we never claim
                // Playing when the primitive refused to start.
                self.presenter.notice(&format!("playback failed: {err}"));
                PlayOutcome::OutputFailed(id, err)
            }
        }
    }

    /// Pause the active track; `None` when there is none.
    pub fn pause(&mut self) -> Option<TrackId> {
        let id = self.active?;
        let _ = self.track_mut(id)?.pause();
        self.play_state = PlayState::Paused;
        self.notify_view();
        Some(id)
    }

    /// Stop the active track and rewind it; `None` when there is none.
    /// Idempotent: a second stop leaves the state identical.
    pub fn stop(&mut self) -> Option<TrackId> {
        let id = self.active?;
        self.stop_track(id);
        self.play_state = PlayState::Stopped;
        self.notify_view();
        Some(id)
    }

    /// Move the active track `direction` steps through the playlist,
    /// wrapping both ways; `None` when there is no active track.
    pub fn skip(&mut self, direction: i64) -> Option<TrackId> {
        let id = self.active?;
        let position = self.position_of(id)? as i64;
        let len = self.tracks.len() as i64;
        let target = (position + direction).rem_euclid(len) as usize;
        let target_id = self.tracks[target].id;
        self.change_active(target_id)
    }

    /// Clamp `level` into `0..=100`, store it and apply it to every bound
    /// engine. A level of 0 is the mute affordance; playback state is
    /// untouched either way. Returns the stored level.
    pub fn set_volume(&mut self, level: i32) -> u8 {
        self.volume = level.clamp(0, 100) as u8;
        let scale = self.volume_scale();
        for track in &mut self.tracks {
            track.set_volume(scale);
        }
        self.notify_view();
        self.volume
    }

    /// Remove a track. Removing the active track stops it and clears the
    /// active reference; a later resolver completion for it is a no-op.
    pub fn remove_track(&mut self, id: TrackId) -> bool {
        let Some(position) = self.position_of(id) else {
            return false;
        };

        if self.active == Some(id) {
            self.stop_track(id);
            self.active = None;
            self.play_state = PlayState::Stopped;
        }
        self.tracks.remove(position);
        self.notify_view();
        true
    }

    /// Randomize the playlist order. The active reference is by id and
    /// survives the reordering.
    pub fn shuffle(&mut self) {
        self.tracks.shuffle(&mut rng());
        self.notify_view();
    }

    /// Apply a resolver completion. Unknown ids (the track was removed in
    /// the meantime) and non-pending tracks are tolerated silently.
    pub fn apply_resolution(&mut self, outcome: ResolveOutcome) {
        let Some(position) = self.position_of(outcome.track) else {
            return;
        };
        // Only a pending track has anything to apply; duplicate or late
        // completions for an already-settled track are dropped.
        if self.tracks[position].readiness() != Readiness::Pending {
            return;
        }

        match outcome.result {
            Ok(resolved) => match self.output.create(&resolved.stream_locator) {
                Ok(handle) => {
                    let mut engine = PlaybackEngine::new(handle);
                    engine.set_volume(self.volume_scale());
                    let meta = TrackMeta {
                        title: resolved.title,
                        artist: resolved.artist,
                        duration: None,
                    };
                    self.tracks[position].promote(meta, engine);
                }
                Err(err) => {
                    self.tracks[position].mark_failed();
                    self.presenter
                        .notice(&format!("cannot open resolved stream: {err}"));
                }
            },
            Err(err) => {
                self.tracks[position].mark_failed();
                self.presenter.notice(&format!("resolution failed: {err}"));
            }
        }

        self.notify_view();
    }

    // --- internals ------------------------------------------------------

    fn alloc_id(&mut self) -> TrackId {
        let id = TrackId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    fn track_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    /// Best-effort stop: not-ready tracks have nothing engaged to stop.
    fn stop_track(&mut self, id: TrackId) {
        if let Some(track) = self.track_mut(id) {
            let _ = track.stop();
        }
    }

    fn volume_scale(&self) -> f32 {
        f32::from(self.volume) / 100.0
    }

    fn notify_view(&mut self) {
        let cards: Vec<TrackCard> = self
            .tracks
            .iter()
            .map(|t| TrackCard::from_track(t, self.active == Some(t.id)))
            .collect();
        self.presenter.render_list(&cards);
        self.presenter.set_control_state(self.play_state);
    }
}
