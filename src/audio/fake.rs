//! In-memory audio output used by the unit tests.
//!
//! Every call on every handle is appended to a shared log so tests can
//! assert call ordering, most importantly stop-before-switch.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::output::{AudioError, AudioHandle, AudioOutput};

pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

#[derive(Default)]
pub(crate) struct FakeOutput {
    pub log: CallLog,
    /// Locators for which `create` fails outright.
    pub fail_create_for: HashSet<String>,
    /// Locators for which `start` fails with a decode error.
    pub fail_start_for: HashSet<String>,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_handle(&self) -> CallLog {
        self.log.clone()
    }
}

impl AudioOutput for FakeOutput {
    fn create(&self, locator: &str) -> Result<Box<dyn AudioHandle>, AudioError> {
        if self.fail_create_for.contains(locator) {
            return Err(AudioError::Open {
                locator: locator.to_string(),
                reason: "create refused by fake".to_string(),
            });
        }
        self.log.borrow_mut().push(format!("create {locator}"));
        Ok(Box::new(FakeHandle {
            locator: locator.to_string(),
            log: self.log.clone(),
            fail_start: self.fail_start_for.contains(locator),
        }))
    }
}

pub(crate) struct FakeHandle {
    locator: String,
    log: CallLog,
    fail_start: bool,
}

impl AudioHandle for FakeHandle {
    fn start(&mut self) -> Result<(), AudioError> {
        if self.fail_start {
            return Err(AudioError::Decode {
                locator: self.locator.clone(),
                reason: "start refused by fake".to_string(),
            });
        }
        self.log.borrow_mut().push(format!("start {}", self.locator));
        Ok(())
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(format!("pause {}", self.locator));
    }

    fn reset_position(&mut self) {
        self.log.borrow_mut().push(format!("reset {}", self.locator));
    }

    fn set_volume(&mut self, volume: f32) {
        self.log
            .borrow_mut()
            .push(format!("volume {} {volume:.2}", self.locator));
    }
}
