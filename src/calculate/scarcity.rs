//! Positional scarcity from top-tier drop-off.

use crate::models::{DraftState, Player, Position};

use super::{undrafted_points, PositionTable};

/// Number of undrafted players per position forming the top tier.
pub const TOP_TIER_SIZE: usize = 20;

/// Fixed scarcity for kickers; their value is flat across the pool.
pub const KICKER_SCARCITY: f64 = 0.1;

/// Fixed scarcity for team defenses.
pub const DEFENSE_SCARCITY: f64 = 0.2;

/// Mean consecutive point drop-off across the top tier, best first.
/// Fewer than two players means no drop-off to measure.
pub fn tier_dropoff(points: &[f64]) -> f64 {
    let tier = &points[..points.len().min(TOP_TIER_SIZE)];
    if tier.len() < 2 {
        return 0.0;
    }

    let total: f64 = tier.windows(2).map(|w| w[0] - w[1]).sum();
    total / (tier.len() - 1) as f64
}

/// Scarcity per position in [0, 1].
///
/// QB/RB/WR/TE drop-offs are normalized by the largest of the four. When
/// every drop-off is zero (flat or exhausted pools) all four are 0 rather
/// than NaN. K and DEF are fixed constants.
pub fn compute_scarcity(pool: &[Player], draft: &DraftState) -> PositionTable {
    let raw: Vec<(Position, f64)> = Position::DATA_DRIVEN_SCARCITY
        .iter()
        .map(|&position| {
            let points = undrafted_points(pool, draft, position);
            (position, tier_dropoff(&points))
        })
        .collect();

    let max = raw.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut scarcity: PositionTable = raw
        .into_iter()
        .map(|(position, value)| {
            let normalized = if max > 0.0 { value / max } else { 0.0 };
            (position, normalized)
        })
        .collect();

    scarcity.insert(Position::K, KICKER_SCARCITY);
    scarcity.insert(Position::Def, DEFENSE_SCARCITY);
    scarcity
}
