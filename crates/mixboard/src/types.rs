use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an operation (or one entry of it) did not produce a volume change.
///
/// The display strings are the exact lines the CLI prints for an affected
/// entry, so they live on the enum rather than in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeError {
    /// The query matched no live session.
    #[error("Application not found")]
    NotFound,

    /// Malformed name or volume argument.
    #[error("Invalid input")]
    InvalidInput,

    /// Interactive selector index outside the listed snapshot.
    #[error("Invalid device position")]
    InvalidPosition,

    /// A platform control call failed after a match was found.
    #[error("Failed to set volume")]
    Failed,
}

/// One live audio session as seen in a single enumeration snapshot.
///
/// `position` is the 0-based index within that snapshot only; the session
/// set changes between calls, so positions must never be held across them.
/// `volume`/`muted` are `None` when the per-session state query failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub position: usize,
    pub name: String,
    pub volume: Option<f32>,
    pub muted: Option<bool>,
}

/// Outcome for one matched session, or a single validation failure.
///
/// Exactly one of the two shapes is populated: a success payload (`volume`
/// and/or `muted`, no `error`) or an error payload (`error`, no state
/// fields). Multi-match operations return one of these per session so that
/// partial failure stays visible entry by entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VolumeError>,
}

impl VolumeResult {
    /// Successful state read: current volume and mute for one session.
    pub fn reading(name: impl Into<String>, volume: f32, muted: bool) -> Self {
        Self {
            volume: Some(volume),
            muted: Some(muted),
            name: Some(name.into()),
            error: None,
        }
    }

    /// Successful volume write.
    pub fn level(name: impl Into<String>, volume: f32) -> Self {
        Self {
            volume: Some(volume),
            muted: None,
            name: Some(name.into()),
            error: None,
        }
    }

    /// Successful mute write; `muted` is the state the session now has.
    pub fn mute_state(name: impl Into<String>, muted: bool) -> Self {
        Self {
            volume: None,
            muted: Some(muted),
            name: Some(name.into()),
            error: None,
        }
    }

    /// Failure attributed to a named session or query.
    pub fn failure(name: impl Into<String>, error: VolumeError) -> Self {
        Self {
            volume: None,
            muted: None,
            name: Some(name.into()),
            error: Some(error),
        }
    }

    /// Failure with no associated name (interactive selector validation).
    pub fn from_error(error: VolumeError) -> Self {
        Self {
            volume: None,
            muted: None,
            name: None,
            error: Some(error),
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}
