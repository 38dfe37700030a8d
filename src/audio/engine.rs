//! The per-track playback engine wrapper.

use super::output::{AudioError, AudioHandle};

/// Wraps one audio handle, bound 1:1 to a ready track.
///
/// Only the owning `Track` calls into this; the jukebox drives playback
/// through the track's capability methods.
pub struct PlaybackEngine {
    handle: Box<dyn AudioHandle>,
}

impl PlaybackEngine {
    pub fn new(handle: Box<dyn AudioHandle>) -> Self {
        Self { handle }
    }

    /// Begin playback or resume from the current position.
    pub fn start(&mut self) -> Result<(), AudioError> {
        self.handle.start()
    }

    /// Halt playback, retaining the position.
    pub fn pause(&mut self) {
        self.handle.pause();
    }

    /// Halt playback and reset the position to zero.
    pub fn reset_and_stop(&mut self) {
        self.handle.pause();
        self.handle.reset_position();
    }

    /// Set the playback volume, `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.handle.set_volume(volume);
    }
}
