//! The get / set / toggle verbs.
//!
//! Every verb follows the same shape: validate, enumerate fresh, match,
//! then drive the control primitive once per matched session. Validation
//! failures short-circuit before any platform call; control failures are
//! confined to their own entry so the rest of a matched set still gets
//! attempted.

use tracing::{debug, warn};

use crate::matcher::{match_sessions, validate_query};
use crate::provider::{AudioSession, ProviderError, SessionProvider};
use crate::types::{VolumeError, VolumeResult};
use crate::volume::VolumeSpec;

/// Read volume and mute state for every session matching `app_name`.
///
/// No match yields a single [`VolumeError::NotFound`] entry carrying the
/// original query as its name.
pub fn get_volume_by_name<P: SessionProvider>(
    provider: &P,
    app_name: &str,
) -> Result<Vec<VolumeResult>, ProviderError> {
    let query = match validate_query(app_name) {
        Ok(query) => query,
        Err(error) => return Ok(vec![VolumeResult::failure(app_name, error)]),
    };

    let sessions = provider.sessions()?;
    let matched = match_sessions(&sessions, query, true);
    if matched.is_empty() {
        return Ok(vec![VolumeResult::failure(app_name, VolumeError::NotFound)]);
    }

    let mut results = Vec::with_capacity(matched.len());
    for (session, name) in matched {
        let state = session
            .volume()
            .and_then(|volume| session.muted().map(|muted| (volume, muted)));
        match state {
            Ok((volume, muted)) => results.push(VolumeResult::reading(name, volume, muted)),
            Err(err) => {
                warn!(name = %name, error = %err, "volume query failed");
                results.push(VolumeResult::failure(name, VolumeError::Failed));
            }
        }
    }
    Ok(results)
}

/// Set the volume of every session matching `app_name` (or only the first,
/// with `all_matches` false).
///
/// The volume is normalized before anything else; unusable input yields a
/// single [`VolumeError::InvalidInput`] entry without touching any session.
pub fn set_volume_by_name<P: SessionProvider>(
    provider: &P,
    app_name: &str,
    volume: impl Into<VolumeSpec>,
    all_matches: bool,
) -> Result<Vec<VolumeResult>, ProviderError> {
    let spec: VolumeSpec = volume.into();
    let Some(level) = spec.normalize() else {
        return Ok(vec![VolumeResult::failure(
            app_name,
            VolumeError::InvalidInput,
        )]);
    };

    let query = match validate_query(app_name) {
        Ok(query) => query,
        Err(error) => return Ok(vec![VolumeResult::failure(app_name, error)]),
    };

    let sessions = provider.sessions()?;
    let matched = match_sessions(&sessions, query, all_matches);
    if matched.is_empty() {
        return Ok(vec![VolumeResult::failure(app_name, VolumeError::NotFound)]);
    }

    debug!(query, level, matches = matched.len(), "setting volume");
    let mut results = Vec::with_capacity(matched.len());
    for (session, name) in matched {
        match session.set_volume(level) {
            Ok(()) => results.push(VolumeResult::level(name, level)),
            Err(err) => {
                warn!(name = %name, error = %err, "set volume failed");
                results.push(VolumeResult::failure(name, VolumeError::Failed));
            }
        }
    }
    Ok(results)
}

/// Toggle mute for every session matching `app_name`.
///
/// The matched set toggles as a unit: if any matched session is currently
/// unmuted the target is mute-all, only a fully muted set unmutes. A session
/// whose mute state cannot be read is reported as [`VolumeError::Failed`]
/// and does not vote; the remaining sessions still receive the target flag.
pub fn toggle_volume<P: SessionProvider>(
    provider: &P,
    app_name: &str,
) -> Result<Vec<VolumeResult>, ProviderError> {
    let query = match validate_query(app_name) {
        Ok(query) => query,
        Err(error) => return Ok(vec![VolumeResult::failure(app_name, error)]),
    };

    let sessions = provider.sessions()?;
    let matched = match_sessions(&sessions, query, true);
    if matched.is_empty() {
        return Ok(vec![VolumeResult::failure(app_name, VolumeError::NotFound)]);
    }

    let mut states = Vec::with_capacity(matched.len());
    for (session, name) in matched {
        match session.muted() {
            Ok(muted) => states.push((session, name, Some(muted))),
            Err(err) => {
                warn!(name = %name, error = %err, "mute query failed");
                states.push((session, name, None));
            }
        }
    }

    let any_unmuted = states
        .iter()
        .any(|(_, _, muted)| matches!(muted, Some(false)));
    let target = any_unmuted;
    debug!(query, target, "toggling mute");

    let mut results = Vec::with_capacity(states.len());
    for (session, name, muted) in states {
        if muted.is_none() {
            results.push(VolumeResult::failure(name, VolumeError::Failed));
            continue;
        }
        match session.set_muted(target) {
            Ok(()) => results.push(VolumeResult::mute_state(name, target)),
            Err(err) => {
                warn!(name = %name, error = %err, "set mute failed");
                results.push(VolumeResult::failure(name, VolumeError::Failed));
            }
        }
    }
    Ok(results)
}
