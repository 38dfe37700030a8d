//! The audio-output seam: traits for the platform audio primitive.

use thiserror::Error;

/// Errors from the underlying audio primitive.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open {locator}: {reason}")]
    Open { locator: String, reason: String },
    #[error("failed to decode {locator}: {reason}")]
    Decode { locator: String, reason: String },
    #[error("no usable audio output device: {0}")]
    Device(String),
}

/// One bound audio source; created per track via [`AudioOutput::create`].
pub trait AudioHandle {
    /// Begin playback, or resume it from the current position.
    ///
    /// Opening and decoding the source may be deferred to the first start,
    /// so an unreachable or undecodable locator surfaces here.
    fn start(&mut self) -> Result<(), AudioError>;

    /// Halt playback, retaining the position.
    fn pause(&mut self);

    /// Rewind to position zero. Playback stays halted until the next start.
    fn reset_position(&mut self);

    /// Set the playback volume, `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
}

/// The platform audio primitive: hands out one handle per source locator.
pub trait AudioOutput {
    fn create(&self, locator: &str) -> Result<Box<dyn AudioHandle>, AudioError>;
}
