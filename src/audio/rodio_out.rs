//! `rodio`-backed implementation of the audio-output seam.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::output::{AudioError, AudioHandle, AudioOutput};

/// The process-wide audio device. Handles created from it share its mixer.
pub struct RodioOutput {
    stream: OutputStream,
}

impl RodioOutput {
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioOutput for RodioOutput {
    fn create(&self, locator: &str) -> Result<Box<dyn AudioHandle>, AudioError> {
        // Opening/decoding is deferred to the first start, so an unreachable
        // file surfaces there as a playback error instead of failing here.
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        Ok(Box::new(RodioHandle {
            locator: locator.to_string(),
            sink,
        }))
    }
}

struct RodioHandle {
    locator: String,
    sink: Sink,
}

impl RodioHandle {
    fn load(&mut self) -> Result<(), AudioError> {
        let file = File::open(&self.locator).map_err(|e| AudioError::Open {
            locator: self.locator.clone(),
            reason: e.to_string(),
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            locator: self.locator.clone(),
            reason: e.to_string(),
        })?;

        self.sink.append(source);
        Ok(())
    }
}

impl AudioHandle for RodioHandle {
    fn start(&mut self) -> Result<(), AudioError> {
        // Empty sink means first start, a reset, or a source that played to
        // the end; in all three cases a fresh decode starts from zero.
        if self.sink.empty() {
            self.load()?;
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn reset_position(&mut self) {
        // rodio sinks cannot rewind; dropping the queued source makes the
        // next start decode from the beginning.
        self.sink.stop();
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }
}
