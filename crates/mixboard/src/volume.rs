//! Volume input normalization.
//!
//! Callers hand volumes over in three shapes: a whole percentage (`50`), an
//! already-normalized fraction (`0.5`), or unparsed text from a prompt or
//! argv (`"50"`, `"0.5"`). [`VolumeSpec`] keeps those representations
//! distinct and [`VolumeSpec::normalize`] collapses them into the canonical
//! `[0.0, 1.0]` fraction every control call uses.
//!
//! There is deliberately no `From<bool>`: in the dynamically-typed ancestry
//! of this tool a boolean could silently become a near-zero percentage, and
//! the sum type is what makes that promotion impossible here.

/// A volume value as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeSpec {
    /// Whole percentage; out-of-range values clamp (150 is full, -5 silent).
    Percent(i64),
    /// Fraction in `[0.0, 1.0]`; out-of-range values clamp.
    Fraction(f32),
    /// Unparsed text: integer percentage is tried first, fraction second.
    Text(String),
}

impl VolumeSpec {
    /// Collapse to a fraction in `[0.0, 1.0]`, or `None` for input that has
    /// no usable numeric meaning. Total and side-effect free.
    pub fn normalize(&self) -> Option<f32> {
        match self {
            Self::Percent(n) => clamp_fraction(*n as f32 / 100.0),
            Self::Fraction(f) => clamp_fraction(*f),
            Self::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    clamp_fraction(n as f32 / 100.0)
                } else if let Ok(f) = trimmed.parse::<f32>() {
                    clamp_fraction(f)
                } else {
                    None
                }
            }
        }
    }
}

// NaN carries no volume at all, unlike an out-of-range value which still
// names a direction to clamp toward.
fn clamp_fraction(value: f32) -> Option<f32> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(0.0, 1.0))
}

impl From<i64> for VolumeSpec {
    fn from(n: i64) -> Self {
        Self::Percent(n)
    }
}

impl From<i32> for VolumeSpec {
    fn from(n: i32) -> Self {
        Self::Percent(n as i64)
    }
}

impl From<f32> for VolumeSpec {
    fn from(f: f32) -> Self {
        Self::Fraction(f)
    }
}

impl From<f64> for VolumeSpec {
    fn from(f: f64) -> Self {
        Self::Fraction(f as f32)
    }
}

impl From<&str> for VolumeSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for VolumeSpec {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
