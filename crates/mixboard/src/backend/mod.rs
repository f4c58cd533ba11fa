//! Platform implementations of the [`SessionProvider`] seam.

use crate::provider::{AudioSession, ControlError, ProviderError, SessionProvider};

#[cfg(windows)]
pub mod wasapi;

#[cfg(windows)]
pub use wasapi::WasapiProvider;

/// The provider for the running platform.
#[cfg(windows)]
pub fn default_provider() -> Result<WasapiProvider, ProviderError> {
    WasapiProvider::new()
}

/// The provider for the running platform. Constructs, but every enumeration
/// reports [`ProviderError::Unavailable`] - there is no session backend for
/// this platform.
#[cfg(not(windows))]
pub fn default_provider() -> Result<UnsupportedProvider, ProviderError> {
    Ok(UnsupportedProvider)
}

/// Stand-in for platforms without a session backend.
pub struct UnsupportedProvider;

impl SessionProvider for UnsupportedProvider {
    type Session = UnsupportedSession;

    fn sessions(&self) -> Result<Vec<UnsupportedSession>, ProviderError> {
        Err(ProviderError::Unavailable)
    }
}

/// Never constructed; only satisfies the associated session type.
pub enum UnsupportedSession {}

impl AudioSession for UnsupportedSession {
    fn process_name(&self) -> Option<&str> {
        match *self {}
    }

    fn volume(&self) -> Result<f32, ControlError> {
        match *self {}
    }

    fn set_volume(&self, _level: f32) -> Result<(), ControlError> {
        match *self {}
    }

    fn muted(&self) -> Result<bool, ControlError> {
        match *self {}
    }

    fn set_muted(&self, _muted: bool) -> Result<(), ControlError> {
        match *self {}
    }
}
