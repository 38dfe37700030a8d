use super::engine::PlaybackEngine;
use super::fake::FakeOutput;
use super::output::{AudioError, AudioOutput};

#[test]
fn engine_reset_and_stop_pauses_then_rewinds() {
    let output = FakeOutput::new();
    let log = output.log_handle();

    let mut engine = PlaybackEngine::new(output.create("song.mp3").unwrap());
    engine.start().unwrap();
    engine.reset_and_stop();

    assert_eq!(
        log.borrow().as_slice(),
        [
            "create song.mp3".to_string(),
            "start song.mp3".to_string(),
            "pause song.mp3".to_string(),
            "reset song.mp3".to_string(),
        ]
    );
}

#[test]
fn engine_propagates_start_failure() {
    let mut output = FakeOutput::new();
    output.fail_start_for.insert("broken.mp3".to_string());

    let mut engine = PlaybackEngine::new(output.create("broken.mp3").unwrap());
    let err = engine.start().unwrap_err();
    assert!(matches!(err, AudioError::Decode { .. }));
}

#[test]
fn engine_forwards_volume() {
    let output = FakeOutput::new();
    let log = output.log_handle();

    let mut engine = PlaybackEngine::new(output.create("song.mp3").unwrap());
    engine.set_volume(0.5);

    assert!(log.borrow().iter().any(|e| e == "volume song.mp3 0.50"));
}
