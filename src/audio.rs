//! Audio subsystem: the output seam and the per-track playback engine.
//!
//! The platform audio primitive sits behind the `AudioOutput`/`AudioHandle`
//! traits so the jukebox core never depends on `rodio` directly; the
//! production implementation lives in `audio::rodio_out`.

mod engine;
mod output;
mod rodio_out;

pub use engine::*;
pub use output::*;
pub use rodio_out::*;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;
