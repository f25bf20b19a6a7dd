//! Scored player positions and position filters.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a position string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown position: {0}")]
pub struct UnknownPosition(pub String);

/// A player position.
///
/// Records with a tag outside the scored set load as [`Position::Other`]:
/// they have no replacement level or scarcity and only fit BENCH slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Def,
    Other,
}

impl Position {
    /// Every scored position, in display order. [`Position::Other`] is not scored.
    pub const ALL: [Position; 6] = [
        Position::Qb,
        Position::Rb,
        Position::Wr,
        Position::Te,
        Position::K,
        Position::Def,
    ];

    /// Positions whose scarcity is measured from the remaining pool.
    pub const DATA_DRIVEN_SCARCITY: [Position; 4] =
        [Position::Qb, Position::Rb, Position::Wr, Position::Te];

    /// Whether this position can fill a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::Rb | Position::Wr | Position::Te)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Def => "DEF",
            Position::Other => "OTHER",
        }
    }

    /// Map a data-file tag to a position; unrecognised tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Position::Other)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::Qb),
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "DST" | "D/ST" => Ok(Position::Def),
            "OTHER" => Ok(Position::Other),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Position::from_tag(&tag))
    }
}

/// Filter applied to ranked views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    pub fn matches(&self, position: Position) -> bool {
        match self {
            PositionFilter::All => true,
            PositionFilter::Only(p) => *p == position,
        }
    }
}

impl FromStr for PositionFilter {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") || s.trim().is_empty() {
            return Ok(PositionFilter::All);
        }
        s.parse().map(PositionFilter::Only)
    }
}

impl std::fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionFilter::All => write!(f, "ALL"),
            PositionFilter::Only(p) => write!(f, "{}", p),
        }
    }
}
