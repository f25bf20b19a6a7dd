//! Valuation and ranking engine.
//!
//! Turns raw player statistics, league configuration and draft progress into
//! one comparable score per player:
//! - Replacement levels per position (rank-based baseline)
//! - Floor/ceiling projections and value over replacement
//! - Positional scarcity from tier drop-off
//! - Weighted final score and the ranking pass
//!
//! Replacement levels and scarcity are derived from scratch on every pass,
//! so they always agree with the current draft state.

mod replacement;
mod scarcity;
mod scoring;
mod vorp;

pub use replacement::*;
pub use scarcity::*;
pub use scoring::*;
pub use vorp::*;

use std::collections::BTreeMap;

use crate::models::{DraftState, Player, Position};

/// A value per scored position.
pub type PositionTable = BTreeMap<Position, f64>;

/// Season totals of undrafted players at `position`, best first.
pub(crate) fn undrafted_points(pool: &[Player], draft: &DraftState, position: Position) -> Vec<f64> {
    let mut points: Vec<f64> = pool
        .iter()
        .filter(|p| p.position == position && !draft.is_drafted(p.id))
        .map(|p| p.stats.total_points)
        .collect();
    points.sort_by(|a, b| b.total_cmp(a));
    points
}
