//! Per-application audio session volume and mute control.
//!
//! `mixboard` resolves running audio-producing processes by name and
//! gets, sets, or toggles their per-application output volume and mute
//! state. The platform session set is consumed through the
//! [`SessionProvider`] seam; [`backend`] supplies the WASAPI
//! implementation on Windows and a stub elsewhere.
//!
//! Sessions are enumerated fresh on every operation - applications open
//! and close between calls, so nothing is cached. Operations that take an
//! application name return one [`VolumeResult`] per matched session, in
//! enumeration order; a control-call failure on one session never aborts
//! its siblings.

pub mod backend;
pub mod interactive;
pub mod listing;
pub mod matcher;
pub mod ops;
pub mod provider;
pub mod types;
pub mod volume;

#[cfg(test)]
pub(crate) mod test_support;

pub use interactive::{interactive_set_volume, InteractiveError};
pub use listing::{list_sessions, list_sessions_verbose};
pub use matcher::SYSTEM_SOUNDS;
pub use ops::{get_volume_by_name, set_volume_by_name, toggle_volume};
pub use provider::{AudioSession, ControlError, ProviderError, SessionProvider};
pub use types::{SessionInfo, VolumeError, VolumeResult};
pub use volume::VolumeSpec;
