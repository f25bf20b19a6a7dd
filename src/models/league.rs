//! League configuration: size, scoring type and roster slots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Position;

/// A league configuration that cannot be used for valuation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid league configuration: {0}")]
pub struct InvalidLeague(pub String);

/// Scoring type. Informational only; it does not change the value model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringType {
    #[serde(rename = "standard")]
    Standard,
    #[default]
    #[serde(rename = "halfPPR")]
    HalfPpr,
    #[serde(rename = "PPR")]
    Ppr,
}

impl std::fmt::Display for ScoringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringType::Standard => write!(f, "standard"),
            ScoringType::HalfPpr => write!(f, "halfPPR"),
            ScoringType::Ppr => write!(f, "PPR"),
        }
    }
}

/// A roster slot on a team board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RosterSlot {
    Qb,
    Rb,
    Wr,
    Te,
    Flex,
    K,
    Def,
    Bench,
}

impl RosterSlot {
    pub const ALL: [RosterSlot; 8] = [
        RosterSlot::Qb,
        RosterSlot::Rb,
        RosterSlot::Wr,
        RosterSlot::Te,
        RosterSlot::Flex,
        RosterSlot::K,
        RosterSlot::Def,
        RosterSlot::Bench,
    ];

    /// Whether a player at `position` may be placed in this slot.
    pub fn accepts(&self, position: Position) -> bool {
        match self {
            RosterSlot::Bench => true,
            RosterSlot::Flex => position.is_flex_eligible(),
            RosterSlot::Qb => position == Position::Qb,
            RosterSlot::Rb => position == Position::Rb,
            RosterSlot::Wr => position == Position::Wr,
            RosterSlot::Te => position == Position::Te,
            RosterSlot::K => position == Position::K,
            RosterSlot::Def => position == Position::Def,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RosterSlot::Qb => "QB",
            RosterSlot::Rb => "RB",
            RosterSlot::Wr => "WR",
            RosterSlot::Te => "TE",
            RosterSlot::Flex => "FLEX",
            RosterSlot::K => "K",
            RosterSlot::Def => "DEF",
            RosterSlot::Bench => "BENCH",
        }
    }
}

impl std::fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Required count per roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RosterPositions {
    pub qb: u32,
    pub rb: u32,
    pub wr: u32,
    pub te: u32,
    pub flex: u32,
    pub k: u32,
    pub def: u32,
    pub bench: u32,
}

impl Default for RosterPositions {
    fn default() -> Self {
        Self {
            qb: 1,
            rb: 2,
            wr: 2,
            te: 1,
            flex: 1,
            k: 1,
            def: 1,
            bench: 6,
        }
    }
}

impl RosterPositions {
    /// Configured count for a roster slot.
    pub fn count(&self, slot: RosterSlot) -> u32 {
        match slot {
            RosterSlot::Qb => self.qb,
            RosterSlot::Rb => self.rb,
            RosterSlot::Wr => self.wr,
            RosterSlot::Te => self.te,
            RosterSlot::Flex => self.flex,
            RosterSlot::K => self.k,
            RosterSlot::Def => self.def,
            RosterSlot::Bench => self.bench,
        }
    }

    /// Starting slots dedicated to a position (FLEX and BENCH excluded).
    pub fn starters(&self, position: Position) -> u32 {
        match position {
            Position::Qb => self.qb,
            Position::Rb => self.rb,
            Position::Wr => self.wr,
            Position::Te => self.te,
            Position::K => self.k,
            Position::Def => self.def,
            Position::Other => 0,
        }
    }

    /// Bench depth unit used by the replacement model: one unit per five bench slots.
    pub fn bench_depth(&self) -> u32 {
        self.bench.div_ceil(5)
    }

    /// Total roster size per team.
    pub fn total(&self) -> u32 {
        RosterSlot::ALL.iter().map(|s| self.count(*s)).sum()
    }
}

/// League settings that parameterize the value model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueConfig {
    #[serde(default = "default_league_size")]
    pub size: u32,

    #[serde(default)]
    pub scoring_type: ScoringType,

    #[serde(default)]
    pub roster_positions: RosterPositions,
}

fn default_league_size() -> u32 {
    12
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            size: default_league_size(),
            scoring_type: ScoringType::default(),
            roster_positions: RosterPositions::default(),
        }
    }
}

impl LeagueConfig {
    pub fn validate(&self) -> Result<(), InvalidLeague> {
        if self.size == 0 {
            return Err(InvalidLeague(
                "league size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
