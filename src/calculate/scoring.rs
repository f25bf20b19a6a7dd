//! Final player score and the ranking pass.

use tracing::debug;

use crate::models::{
    AdvancedStats, DraftState, LeagueConfig, ModelSettings, Player, Position, PositionPriority,
};

use super::{compute_replacement_levels, compute_scarcity, compute_vorp, PositionTable};

/// Score assigned to drafted players so they sort below every undrafted one.
pub const DRAFTED_SCORE: f64 = -1.0;

/// Raw VORP a QB must exceed to receive the elite-QB bonus.
pub const ELITE_QB_VORP: f64 = 50.0;

/// Largest boost scarcity can add (scarcity 1.0 -> x1.3).
const SCARCITY_BOOST: f64 = 0.3;

const CONSISTENCY_SCALE: f64 = 0.1;

const SKILL_PRIORITY_BONUS: f64 = 1.15;

const ELITE_QB_BONUS: f64 = 1.2;

/// Multiplier from the configured position priority. At most one bonus applies.
pub fn position_priority_multiplier(
    priority: PositionPriority,
    position: Position,
    raw_vorp: f64,
) -> f64 {
    match (priority, position) {
        (PositionPriority::RbHeavy, Position::Rb) => SKILL_PRIORITY_BONUS,
        (PositionPriority::WrHeavy, Position::Wr) => SKILL_PRIORITY_BONUS,
        (PositionPriority::EliteQb, Position::Qb) if raw_vorp > ELITE_QB_VORP => ELITE_QB_BONUS,
        _ => 1.0,
    }
}

/// Score one undrafted player and attach the valuation bundle to it.
pub fn score_player(
    player: &mut Player,
    replacement_levels: &PositionTable,
    scarcity: &PositionTable,
    settings: &ModelSettings,
) -> f64 {
    let vorp = compute_vorp(
        player,
        replacement_levels,
        settings.risk_tolerance,
        settings.injury_weight,
    );

    let mut score = vorp.risk_adjusted_vorp * settings.vorp_weight;

    let consistency_factor = player.stats.consistency * settings.consistency_weight;
    score += vorp.adjusted_projection * consistency_factor * CONSISTENCY_SCALE;

    let scarcity_factor =
        1.0 + scarcity.get(&player.position).copied().unwrap_or(0.0) * SCARCITY_BOOST;
    score *= scarcity_factor;

    score *= position_priority_multiplier(
        settings.position_priority,
        player.position,
        vorp.raw_vorp,
    );

    player.advanced_stats = Some(AdvancedStats {
        vorp: vorp.raw_vorp,
        risk_adjusted_vorp: vorp.risk_adjusted_vorp,
        floor: vorp.floor,
        ceiling: vorp.ceiling,
        volatility: vorp.volatility,
        adjusted_projection: vorp.adjusted_projection,
        scarcity_factor,
        final_score: score,
    });

    score
}

/// Baselines used by one ranking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingContext {
    pub replacement_levels: PositionTable,
    pub scarcity: PositionTable,
}

/// Rescore every player and sort the pool best first.
///
/// Drafted players get [`DRAFTED_SCORE`] and sink to the end; the sort is
/// stable so ties keep their previous relative order.
pub fn rank_players(
    players: &mut [Player],
    draft: &DraftState,
    league: &LeagueConfig,
    settings: &ModelSettings,
) -> RankingContext {
    let replacement_levels = compute_replacement_levels(players, draft, league);
    let scarcity = compute_scarcity(players, draft);

    for player in players.iter_mut() {
        player.score = if draft.is_drafted(player.id) {
            DRAFTED_SCORE
        } else {
            score_player(player, &replacement_levels, &scarcity, settings)
        };
    }

    players.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        players = players.len(),
        drafted = draft.drafted_count(),
        "Ranking pass complete"
    );

    RankingContext {
        replacement_levels,
        scarcity,
    }
}
