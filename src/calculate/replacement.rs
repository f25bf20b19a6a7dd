//! Replacement-level baselines.

use crate::models::{DraftState, LeagueConfig, Player, Position};

use super::{undrafted_points, PositionTable};

/// League-wide draft rank at which a replacement-level player at `position`
/// would be taken.
///
/// Starters count fully; RB/WR take 40% of FLEX and TE 20%. Bench depth is
/// one unit per five bench slots: RB/WR take 1.5 units, TE 0.5, QB half a
/// unit rounded up, K/DEF none.
pub fn replacement_rank(position: Position, league: &LeagueConfig) -> f64 {
    let roster = &league.roster_positions;
    let starters = roster.starters(position) as f64;
    let flex = roster.flex as f64;
    let bench_depth = roster.bench_depth() as f64;

    let per_team = match position {
        Position::Qb => starters + (bench_depth * 0.5).ceil(),
        Position::Rb | Position::Wr => starters + flex * 0.4 + bench_depth * 1.5,
        Position::Te => starters + flex * 0.2 + bench_depth * 0.5,
        Position::K | Position::Def | Position::Other => starters,
    };

    league.size as f64 * per_team
}

/// Season points of the replacement-level player still available at `position`.
///
/// Fractional ranks are truncated. Ranks past the end of the pool clamp to
/// the last available player; an empty pool or a rank below 1 yields 0.
pub fn replacement_level(
    pool: &[Player],
    draft: &DraftState,
    league: &LeagueConfig,
    position: Position,
) -> f64 {
    let points = undrafted_points(pool, draft, position);
    let rank = replacement_rank(position, league).floor();

    if points.is_empty() || rank < 1.0 {
        return 0.0;
    }

    let index = (rank as usize - 1).min(points.len() - 1);
    points[index]
}

/// Replacement levels for every scored position.
pub fn compute_replacement_levels(
    pool: &[Player],
    draft: &DraftState,
    league: &LeagueConfig,
) -> PositionTable {
    Position::ALL
        .iter()
        .map(|&position| (position, replacement_level(pool, draft, league, position)))
        .collect()
}
