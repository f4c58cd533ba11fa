//! Session snapshot and display listing.

use tracing::{debug, warn};

use crate::matcher::SYSTEM_SOUNDS;
use crate::provider::{AudioSession, ProviderError, SessionProvider};
use crate::types::SessionInfo;

/// Enumerate the current session set into a typed snapshot.
///
/// Positions are assigned in enumeration order and are only meaningful
/// within this snapshot. A session whose state query fails is still listed,
/// with `volume`/`muted` absent - one broken session must not hide the rest.
pub fn list_sessions<P: SessionProvider>(provider: &P) -> Result<Vec<SessionInfo>, ProviderError> {
    let sessions = provider.sessions()?;
    debug!(count = sessions.len(), "enumerated audio sessions");

    let mut results = Vec::with_capacity(sessions.len());
    for (position, session) in sessions.iter().enumerate() {
        let name = match session.process_name() {
            Some(name) => name.to_string(),
            None => SYSTEM_SOUNDS.to_string(),
        };

        let volume = match session.volume() {
            Ok(volume) => Some(volume),
            Err(err) => {
                warn!(position, name = %name, error = %err, "session volume query failed");
                None
            }
        };
        let muted = session.muted().ok();

        results.push(SessionInfo {
            position,
            name,
            volume,
            muted,
        });
    }

    Ok(results)
}

/// Snapshot plus a display line per session.
///
/// Line shape: `"<pos> - "` (only with `include_position`), then the name or
/// `"N/A"` for an empty one, then `": "` and the volume to two decimals or
/// `"N/A"` when absent. The underlying [`SessionInfo`] keeps an empty name
/// as the empty string - only the display collapses it to `"N/A"`.
pub fn list_sessions_verbose<P: SessionProvider>(
    provider: &P,
    include_position: bool,
) -> Result<Vec<(String, SessionInfo)>, ProviderError> {
    let sessions = list_sessions(provider)?;
    Ok(sessions
        .into_iter()
        .map(|info| (format_session(&info, include_position), info))
        .collect())
}

fn format_session(info: &SessionInfo, include_position: bool) -> String {
    let prefix = if include_position {
        format!("{} - ", info.position)
    } else {
        String::new()
    };
    let name = if info.name.is_empty() {
        "N/A"
    } else {
        info.name.as_str()
    };
    let volume = match info.volume {
        Some(volume) => format!("{volume:.2}"),
        None => "N/A".to_string(),
    };
    format!("{prefix}{name}: {volume}")
}
