//! The resolver worker thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{MetadataResolver, ResolveOutcome, ResolveRequest};

/// Spawn the resolver worker.
///
/// Requests are processed one at a time and completions are delivered in
/// processing order; the jukebox tolerates any arrival order regardless.
/// The thread exits when the request sender is dropped.
pub fn spawn_resolver<R: MetadataResolver>(
    resolver: R,
) -> (Sender<ResolveRequest>, Receiver<ResolveOutcome>) {
    let (request_tx, request_rx) = mpsc::channel::<ResolveRequest>();
    let (outcome_tx, outcome_rx) = mpsc::channel::<ResolveOutcome>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let result = resolver.resolve(&request.identifier);
            let outcome = ResolveOutcome {
                track: request.track,
                result,
            };
            if outcome_tx.send(outcome).is_err() {
                // Receiver gone: the session is shutting down.
                break;
            }
        }
    });

    (request_tx, outcome_rx)
}
