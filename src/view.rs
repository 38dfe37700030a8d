//! The presentation seam consumed by the jukebox.
//!
//! The jukebox pushes a fresh view model through a [`Presenter`] after every
//! state-changing operation and after every resolution completion. The
//! terminal front end plugs in [`SignalPresenter`]; tests use recording
//! presenters; [`NullPresenter`] serves headless use.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::jukebox::PlayState;
use crate::track::{Readiness, Track, TrackId};

/// View model for one playlist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCard {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub duration: Option<Duration>,
    pub readiness: Readiness,
    pub active: bool,
}

impl TrackCard {
    pub fn from_track(track: &Track, active: bool) -> Self {
        let meta = track.display_meta();
        Self {
            id: track.id,
            title: meta.title.clone(),
            artist: meta.artist.clone(),
            duration: meta.duration,
            readiness: track.readiness(),
            active,
        }
    }
}

/// Consumer of jukebox state changes.
pub trait Presenter {
    /// The playlist changed: contents, ordering, metadata or active track.
    fn render_list(&mut self, cards: &[TrackCard]);

    /// The play/pause/stopped state changed (or was re-asserted).
    fn set_control_state(&mut self, state: PlayState);

    /// A non-fatal condition the user should see, e.g. a playback error or
    /// a failed resolution.
    fn notice(&mut self, message: &str);
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_list(&mut self, _cards: &[TrackCard]) {}
    fn set_control_state(&mut self, _state: PlayState) {}
    fn notice(&mut self, _message: &str) {}
}

/// Shared redraw signal between the jukebox and the terminal event loop.
#[derive(Default)]
pub struct ViewSignal {
    dirty: Cell<bool>,
    notice: RefCell<Option<String>>,
}

impl ViewSignal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// True once per change batch; cleared by the call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn take_notice(&self) -> Option<String> {
        self.notice.borrow_mut().take()
    }

    fn mark(&self) {
        self.dirty.set(true);
    }
}

/// Presenter for the immediate-mode terminal UI: the event loop re-reads
/// jukebox state when drawing, so all this records is "something changed"
/// plus the latest notice text.
pub struct SignalPresenter {
    signal: Rc<ViewSignal>,
}

impl SignalPresenter {
    pub fn new(signal: Rc<ViewSignal>) -> Self {
        Self { signal }
    }
}

impl Presenter for SignalPresenter {
    fn render_list(&mut self, _cards: &[TrackCard]) {
        self.signal.mark();
    }

    fn set_control_state(&mut self, _state: PlayState) {
        self.signal.mark();
    }

    fn notice(&mut self, message: &str) {
        *self.signal.notice.borrow_mut() = Some(message.to_string());
        self.signal.mark();
    }
}
