//! Interactive session selection.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::listing::list_sessions_verbose;
use crate::ops::set_volume_by_name;
use crate::provider::{ProviderError, SessionProvider};
use crate::types::{VolumeError, VolumeResult};
use crate::volume::VolumeSpec;

/// Failure outside the per-entry result taxonomy: the session set could not
/// be enumerated, or the console itself went away.
#[derive(Debug, Error)]
pub enum InteractiveError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Print the numbered session listing, read a position and a volume from
/// the operator, and delegate to [`set_volume_by_name`].
///
/// A position that does not parse as an integer yields a single
/// [`VolumeError::InvalidInput`]; an integer outside `[0, sessionCount)`
/// (negatives included) yields [`VolumeError::InvalidPosition`]. The volume
/// is passed through as raw text - set performs its own normalization.
pub fn interactive_set_volume<P, R, W>(
    provider: &P,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<VolumeResult>, InteractiveError>
where
    P: SessionProvider,
    R: BufRead,
    W: Write,
{
    let sessions = list_sessions_verbose(provider, true)?;
    if sessions.is_empty() {
        writeln!(output, "No audio sessions found.")?;
        return Ok(Vec::new());
    }
    for (line, _) in &sessions {
        writeln!(output, "{line}")?;
    }

    write!(output, "Select device by position: ")?;
    output.flush()?;
    let position = match read_trimmed_line(input)?.parse::<i64>() {
        Ok(position) => position,
        Err(_) => return Ok(vec![VolumeResult::from_error(VolumeError::InvalidInput)]),
    };

    write!(output, "Select desired volume 0-100: ")?;
    output.flush()?;
    let volume = read_trimmed_line(input)?;

    if position < 0 || position as usize >= sessions.len() {
        return Ok(vec![VolumeResult::from_error(VolumeError::InvalidPosition)]);
    }

    let (_, selected) = &sessions[position as usize];
    Ok(set_volume_by_name(
        provider,
        &selected.name,
        VolumeSpec::Text(volume),
        true,
    )?)
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
