//! Placement vocabulary for floating content.
//!
//! A placement names the side of an anchor that content attaches to, plus an
//! alignment along that side. The token grammar is the bare side name for
//! center alignment (`"top"`) or side and alignment joined by a dash
//! (`"top-start"`). The canonical set is closed: four sides, each bare or
//! with a `start`/`end` suffix, twelve tokens in total.

use std::fmt;
use std::str::FromStr;

/// The primary edge of the anchor that content is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// To the left of the anchor.
    Left,
    /// To the right of the anchor.
    Right,
}

impl Side {
    /// All four sides.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side across the anchor from this one.
    ///
    /// An involution: applying it twice returns the original side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The token for this side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Alignment along the secondary axis, relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Flush with the anchor's near edge.
    Start,
    /// Flush with the anchor's far edge.
    End,
    /// Centered on the anchor.
    Center,
}

impl Alignment {
    /// The token for this alignment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A side and alignment pair describing where content goes relative to its
/// anchor.
///
/// Parsed from and formatted to the canonical token grammar via [`FromStr`]
/// and [`fmt::Display`]; the two round-trip exactly over [`Placement::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The primary side.
    pub side: Side,
    /// The secondary-axis alignment.
    pub alignment: Alignment,
}

impl Placement {
    /// The canonical twelve-token set.
    pub const ALL: [Self; 12] = [
        Self::from_side(Side::Top),
        Self::from_side(Side::Bottom),
        Self::from_side(Side::Left),
        Self::from_side(Side::Right),
        Self::new(Side::Top, Alignment::Start),
        Self::new(Side::Top, Alignment::End),
        Self::new(Side::Bottom, Alignment::Start),
        Self::new(Side::Bottom, Alignment::End),
        Self::new(Side::Left, Alignment::Start),
        Self::new(Side::Left, Alignment::End),
        Self::new(Side::Right, Alignment::Start),
        Self::new(Side::Right, Alignment::End),
    ];

    /// Create a placement from a side and an alignment.
    #[must_use]
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    /// Create a center-aligned placement from a bare side.
    #[must_use]
    pub const fn from_side(side: Side) -> Self {
        Self::new(side, Alignment::Center)
    }

    /// This placement with its side swapped for the opposite one. The
    /// alignment is preserved.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(self.side.opposite(), self.alignment)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => formatter.write_str(self.side.as_str()),
            Alignment::Start | Alignment::End => {
                write!(formatter, "{}-{}", self.side, self.alignment)
            }
        }
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (side_token, alignment_token) = match token.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (token, None),
        };

        let side = match side_token {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            other => return Err(ParsePlacementError::UnknownSide(other.to_owned())),
        };

        let alignment = match alignment_token {
            None => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("end") => Alignment::End,
            Some(other) => return Err(ParsePlacementError::UnknownAlignment(other.to_owned())),
        };

        Ok(Self::new(side, alignment))
    }
}

/// Parse error for placement tokens.
///
/// The token set is closed and produced by callers, never by end users, so
/// hitting this is a programmer error and callers are expected to fail fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePlacementError {
    /// The segment before the dash is not one of the four side tokens.
    UnknownSide(String),
    /// The segment after the dash is not `start` or `end`.
    UnknownAlignment(String),
}

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSide(token) => write!(formatter, "unknown placement side: {token:?}"),
            Self::UnknownAlignment(token) => {
                write!(formatter, "unknown placement alignment: {token:?}")
            }
        }
    }
}

impl std::error::Error for ParsePlacementError {}
