//! The playlist controller: track collection, active track, play state and
//! volume, exposed as a small state machine.
//!
//! All mutation goes through the `Jukebox` operations; the UI, MPRIS and the
//! resolver only ever reach the playlist through them.

mod model;

pub use model::*;
