//! Local source discovery: walk a directory and turn audio files into
//! `(locator, metadata)` pairs ready for `Jukebox::add_track`.

mod scan;

pub use scan::*;

#[cfg(test)]
mod tests;
