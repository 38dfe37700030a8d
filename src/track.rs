//! Track entities: the polymorphic playlist entry.
//!
//! A `Track` is backed either by a local audio source (ready immediately) or
//! by a streaming-provider identifier whose metadata resolves asynchronously.
//! The classifier that picks the variant lives in `track::classify`.

mod classify;
mod model;

pub use classify::*;
pub use model::*;

#[cfg(test)]
mod tests;
