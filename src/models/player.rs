//! Player records and their derived valuation bundle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PlayerId, Position};

/// Injury risk above which a player is flagged in ranked views.
pub const HIGH_INJURY_RISK: f64 = 0.4;

/// Reasons a player record is rejected at the load boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    #[error("player {id}: {field} must be a finite number, got {value}")]
    NotFinite {
        id: PlayerId,
        field: &'static str,
        value: f64,
    },

    #[error("player {id}: {field} must be non-negative, got {value}")]
    Negative {
        id: PlayerId,
        field: &'static str,
        value: f64,
    },

    #[error("player {id}: {field} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        id: PlayerId,
        field: &'static str,
        value: f64,
    },

    #[error("player {id}: name is empty")]
    EmptyName { id: PlayerId },
}

/// Season production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub games_played: u32,
    pub total_points: f64,
    pub average_points: f64,
    /// Week-to-week stability, 1.0 = perfectly steady
    pub consistency: f64,
}

/// Injury profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryProfile {
    #[serde(default)]
    pub games_injured: u32,
    #[serde(default)]
    pub injury_history: Vec<String>,
    pub risk_score: f64,
}

/// Valuation bundle attached to a player by each ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
    /// Raw value over replacement
    pub vorp: f64,
    pub risk_adjusted_vorp: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub volatility: f64,
    pub adjusted_projection: f64,
    /// Multiplier applied for positional scarcity (1.0 to 1.3)
    pub scarcity_factor: f64,
    pub final_score: f64,
}

/// A draftable player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team: String,
    pub stats: SeasonStats,
    pub injury: InjuryProfile,

    /// Derived by the scoring engine; ignored on input
    #[serde(default, skip_deserializing)]
    pub advanced_stats: Option<AdvancedStats>,

    /// Derived by the scoring engine; -1 once drafted
    #[serde(default, skip_deserializing)]
    pub score: f64,
}

impl Player {
    /// Create a player with empty derived fields.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        position: Position,
        team: impl Into<String>,
        stats: SeasonStats,
        injury: InjuryProfile,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            team: team.into(),
            stats,
            injury,
            advanced_stats: None,
            score: 0.0,
        }
    }

    /// Check the numeric invariants the engine relies on.
    pub fn validate(&self) -> Result<(), PlayerError> {
        if self.name.trim().is_empty() {
            return Err(PlayerError::EmptyName { id: self.id });
        }

        let non_negative = [
            ("totalPoints", self.stats.total_points),
            ("averagePoints", self.stats.average_points),
        ];
        for (field, value) in non_negative {
            self.check_finite(field, value)?;
            if value < 0.0 {
                return Err(PlayerError::Negative {
                    id: self.id,
                    field,
                    value,
                });
            }
        }

        let unit = [
            ("consistency", self.stats.consistency),
            ("riskScore", self.injury.risk_score),
        ];
        for (field, value) in unit {
            self.check_finite(field, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(PlayerError::OutOfUnitRange {
                    id: self.id,
                    field,
                    value,
                });
            }
        }

        Ok(())
    }

    fn check_finite(&self, field: &'static str, value: f64) -> Result<(), PlayerError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(PlayerError::NotFinite {
                id: self.id,
                field,
                value,
            })
        }
    }

    pub fn is_high_injury_risk(&self) -> bool {
        self.injury.risk_score > HIGH_INJURY_RISK
    }
}
