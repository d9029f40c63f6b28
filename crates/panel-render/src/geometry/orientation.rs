//! Supported panel rotations.

use std::fmt;
use std::str::FromStr;

/// Rotation applied when mapping panel pixels to source image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Image rows run along panel rows.
    #[default]
    Deg0,
    /// Quarter turn: image rows run along panel columns.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three-quarter turn.
    Deg270,
}

impl Orientation {
    /// All orientations, in ascending degrees.
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Look up an orientation by its angle. Only exact multiples listed in
    /// [`Orientation::ALL`] are accepted; there is no wrapping (450 is not 90).
    pub fn from_degrees(degrees: i64) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Deg0),
            90 => Some(Orientation::Deg90),
            180 => Some(Orientation::Deg180),
            270 => Some(Orientation::Deg270),
            _ => None,
        }
    }

    /// The angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// True for 90° and 270°, where the panel's width and height swap.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Error returned when a value is not one of 0, 90, 180 or 270.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError {
    input: String,
}

impl ParseOrientationError {
    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "supported orientations are 0, 90, 180 and 270, got '{}'",
            self.input
        )
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parse an angle such as `"90"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(Orientation::from_degrees)
            .ok_or_else(|| ParseOrientationError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<i64> for Orientation {
    type Error = ParseOrientationError;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        Orientation::from_degrees(degrees).ok_or_else(|| ParseOrientationError {
            input: degrees.to_string(),
        })
    }
}
