//! Floor/ceiling projections and value over replacement.

use serde::Serialize;

use crate::models::Player;

use super::PositionTable;

/// Games in a season; projects per-game output to a season total.
pub const SEASON_GAMES: f64 = 17.0;

/// Half the volatility-scaled average stands in for the per-game standard deviation.
const STD_DEV_SCALE: f64 = 0.5;

/// Standard deviations between the average and the floor/ceiling.
const SPREAD_SIGMAS: f64 = 1.5;

/// Injury-adjusted projection range for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub floor: f64,
    pub ceiling: f64,
    pub volatility: f64,
    pub adjusted_projection: f64,
}

/// Value over replacement plus the projection it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VorpStats {
    pub raw_vorp: f64,
    pub risk_adjusted_vorp: f64,
    pub risk_adjusted_projection: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub volatility: f64,
    pub adjusted_projection: f64,
}

/// Derive floor, ceiling and injury-adjusted projection.
///
/// The standard deviation is a closed-form proxy (`avg * volatility * 0.5`),
/// not a statistic fitted to weekly scores. The injury multiplier
/// `1 - risk * injury_weight` is not clamped and goes negative once
/// `risk * injury_weight > 1`.
pub fn compute_projection(player: &Player, injury_weight: f64) -> Projection {
    let average = player.stats.average_points;
    let volatility = 1.0 - player.stats.consistency;
    let std_dev = average * volatility * STD_DEV_SCALE;

    let floor = (average - SPREAD_SIGMAS * std_dev).max(0.0) * SEASON_GAMES;
    let ceiling = (average + SPREAD_SIGMAS * std_dev) * SEASON_GAMES;

    let injury_adjustment = 1.0 - player.injury.risk_score * injury_weight;

    Projection {
        floor: floor * injury_adjustment,
        ceiling: ceiling * injury_adjustment,
        volatility,
        adjusted_projection: player.stats.total_points * injury_adjustment,
    }
}

/// Linear interpolation between floor (tolerance 0) and ceiling (tolerance 1).
pub fn risk_adjusted_projection(projection: &Projection, risk_tolerance: f64) -> f64 {
    projection.floor + (projection.ceiling - projection.floor) * risk_tolerance
}

/// Value over the player's positional replacement level, clamped at zero.
/// A position missing from `replacement_levels` has a baseline of 0.
pub fn compute_vorp(
    player: &Player,
    replacement_levels: &PositionTable,
    risk_tolerance: f64,
    injury_weight: f64,
) -> VorpStats {
    let projection = compute_projection(player, injury_weight);
    let baseline = replacement_levels
        .get(&player.position)
        .copied()
        .unwrap_or(0.0);

    let risk_adjusted = risk_adjusted_projection(&projection, risk_tolerance);

    VorpStats {
        raw_vorp: (projection.adjusted_projection - baseline).max(0.0),
        risk_adjusted_vorp: (risk_adjusted - baseline).max(0.0),
        risk_adjusted_projection: risk_adjusted,
        floor: projection.floor,
        ceiling: projection.ceiling,
        volatility: projection.volatility,
        adjusted_projection: projection.adjusted_projection,
    }
}
