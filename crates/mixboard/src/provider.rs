//! The seam to the platform audio subsystem.
//!
//! Everything above this module is platform-agnostic: operations match and
//! aggregate over whatever a [`SessionProvider`] enumerates. The traits are
//! intentionally narrow - the platform owns the session set, this crate only
//! reads and writes per-session volume/mute through it.

use thiserror::Error;

/// A platform control call on one session failed.
///
/// Maps to [`crate::VolumeError::Failed`] for the affected entry; siblings
/// in the same matched set are still attempted.
#[derive(Debug, Error)]
#[error("audio control call failed: {0}")]
pub struct ControlError(String);

impl ControlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The session set could not be enumerated at all.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("audio session enumeration failed: {0}")]
    Enumeration(String),

    #[error("no audio session backend is available on this platform")]
    Unavailable,
}

/// One live audio session handle.
///
/// All control calls may fail independently with a [`ControlError`]; a
/// handle is only valid within the enumeration snapshot it came from.
pub trait AudioSession {
    /// Executable name of the owning process, e.g. `"firefox.exe"`.
    /// `None` for the synthetic system-sounds session.
    fn process_name(&self) -> Option<&str>;

    /// Current volume as a fraction in `[0.0, 1.0]`.
    fn volume(&self) -> Result<f32, ControlError>;

    fn set_volume(&self, level: f32) -> Result<(), ControlError>;

    fn muted(&self) -> Result<bool, ControlError>;

    fn set_muted(&self, muted: bool) -> Result<(), ControlError>;
}

/// Source of the current default-output session set.
///
/// `sessions` enumerates fresh on every call. Handles from different calls
/// must not be mixed: applications start and stop between operations, and
/// re-resolving is what keeps stale handles from surviving that.
pub trait SessionProvider {
    type Session: AudioSession;

    fn sessions(&self) -> Result<Vec<Self::Session>, ProviderError>;
}
