//! Query validation and session matching.

use crate::provider::AudioSession;
use crate::types::VolumeError;

/// Display name of the synthetic session carrying OS notification audio.
/// It has no owning process; queries equal to this name (case-insensitively)
/// resolve to exactly those sessions.
pub const SYSTEM_SOUNDS: &str = "System Sounds";

/// Trim a name query and reject empty or whitespace-only input.
pub fn validate_query(query: &str) -> Result<&str, VolumeError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(VolumeError::InvalidInput);
    }
    Ok(trimmed)
}

/// Resolve every session whose name equals `query`, case-insensitively.
///
/// Matching is exact, never substring: `"discord"` does not match
/// `"Discord.exe"`. Sessions without a process match only the reserved
/// [`SYSTEM_SOUNDS`] query and resolve to that canonical name. Results keep
/// enumeration order; with `all_matches` false the scan stops at the first
/// hit. Callers map an empty result to [`VolumeError::NotFound`].
pub fn match_sessions<'a, S: AudioSession>(
    sessions: &'a [S],
    query: &str,
    all_matches: bool,
) -> Vec<(&'a S, String)> {
    let folded = query.to_lowercase();
    let mut matched = Vec::new();

    for session in sessions {
        match session.process_name() {
            Some(name) if !name.is_empty() && name.to_lowercase() == folded => {
                matched.push((session, name.to_string()));
            }
            None if folded == SYSTEM_SOUNDS.to_lowercase() => {
                matched.push((session, SYSTEM_SOUNDS.to_string()));
            }
            _ => {}
        }

        if !all_matches && !matched.is_empty() {
            break;
        }
    }

    matched
}
