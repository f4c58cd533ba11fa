//! Scriptable in-memory provider for unit tests.
//!
//! Each fake session shares its state with the provider through an `Rc`, so
//! a test can keep inspecting volumes, mute flags, and recorded control
//! calls after an operation consumed the enumerated handles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::provider::{AudioSession, ControlError, ProviderError, SessionProvider};

#[derive(Debug, Default)]
pub struct SessionState {
    pub volume: f32,
    pub muted: bool,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub set_volume_calls: Vec<f32>,
    pub set_mute_calls: Vec<bool>,
}

pub struct FakeSession {
    name: Option<String>,
    state: Rc<RefCell<SessionState>>,
}

impl AudioSession for FakeSession {
    fn process_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn volume(&self) -> Result<f32, ControlError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(ControlError::new("volume read refused"));
        }
        Ok(state.volume)
    }

    fn set_volume(&self, level: f32) -> Result<(), ControlError> {
        let mut state = self.state.borrow_mut();
        state.set_volume_calls.push(level);
        if state.fail_writes {
            return Err(ControlError::new("volume write refused"));
        }
        state.volume = level;
        Ok(())
    }

    fn muted(&self) -> Result<bool, ControlError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(ControlError::new("mute read refused"));
        }
        Ok(state.muted)
    }

    fn set_muted(&self, muted: bool) -> Result<(), ControlError> {
        let mut state = self.state.borrow_mut();
        state.set_mute_calls.push(muted);
        if state.fail_writes {
            return Err(ControlError::new("mute write refused"));
        }
        state.muted = muted;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeProvider {
    entries: Vec<(Option<String>, Rc<RefCell<SessionState>>)>,
    fail_enumeration: bool,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose enumeration itself fails.
    pub fn failing() -> Self {
        Self {
            entries: Vec::new(),
            fail_enumeration: true,
        }
    }

    pub fn with_app(self, name: &str, volume: f32, muted: bool) -> Self {
        self.push(Some(name.to_string()), volume, muted, false, false)
    }

    /// The synthetic system-sounds session (no owning process).
    pub fn with_system(self, volume: f32, muted: bool) -> Self {
        self.push(None, volume, muted, false, false)
    }

    /// Session whose state reads fail.
    pub fn with_unreadable_app(self, name: &str) -> Self {
        self.push(Some(name.to_string()), 0.0, false, true, false)
    }

    /// Session whose control writes fail but whose reads succeed.
    pub fn with_unwritable_app(self, name: &str, volume: f32, muted: bool) -> Self {
        self.push(Some(name.to_string()), volume, muted, false, true)
    }

    fn push(
        mut self,
        name: Option<String>,
        volume: f32,
        muted: bool,
        fail_reads: bool,
        fail_writes: bool,
    ) -> Self {
        self.entries.push((
            name,
            Rc::new(RefCell::new(SessionState {
                volume,
                muted,
                fail_reads,
                fail_writes,
                ..SessionState::default()
            })),
        ));
        self
    }

    /// Shared state of the session at enumeration position `index`.
    pub fn state(&self, index: usize) -> Rc<RefCell<SessionState>> {
        Rc::clone(&self.entries[index].1)
    }
}

impl SessionProvider for FakeProvider {
    type Session = FakeSession;

    fn sessions(&self) -> Result<Vec<FakeSession>, ProviderError> {
        if self.fail_enumeration {
            return Err(ProviderError::Enumeration("fake enumeration failure".into()));
        }
        Ok(self
            .entries
            .iter()
            .map(|(name, state)| FakeSession {
                name: name.clone(),
                state: Rc::clone(state),
            })
            .collect())
    }
}
