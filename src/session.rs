//! Draft session: the single owner of mutable draft state.
//!
//! Holds the player pool, draft progress, league configuration, model
//! settings and draft board. Every mutating call finishes with a full
//! ranking pass before it returns, so readers never observe a pick without
//! the rescore it triggers.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::calculate::{rank_players, PositionTable, RankingContext};
use crate::models::{
    BoardPlacement, DraftBoard, DraftState, InvalidLeague, LeagueConfig, ModelSettings, Pick,
    PlacementError, Player, PlayerId, PositionFilter, RiskProfile, RosterSlot, ScoringType,
};

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Session operation errors. State is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Player already drafted: {0}")]
    AlreadyDrafted(PlayerId),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    InvalidLeague(#[from] InvalidLeague),
}

/// A player in a ranked view with its overall rank among undrafted players.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer<'a> {
    pub rank: usize,
    pub high_injury_risk: bool,
    #[serde(flatten)]
    pub player: &'a Player,
}

/// Summary of the model configuration for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub league_size: u32,
    pub scoring_type: ScoringType,
    pub risk_profile: RiskProfile,
    pub risk_profile_label: String,
    pub replacement_levels: PositionTable,
}

/// Draft progress for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub drafted_count: u32,
    pub current_pick: u32,
    pub recent_picks: Vec<Pick>,
}

pub struct DraftSession {
    /// Kept in ranking order
    players: Vec<Player>,
    draft: DraftState,
    league: LeagueConfig,
    settings: ModelSettings,
    board: DraftBoard,
    context: RankingContext,
}

impl DraftSession {
    /// Start a session over a validated player pool and rank it.
    pub fn new(
        players: Vec<Player>,
        league: LeagueConfig,
        settings: ModelSettings,
    ) -> Result<Self, DraftError> {
        league.validate()?;

        let mut session = Self {
            players,
            draft: DraftState::new(),
            board: DraftBoard::new(&league),
            league,
            settings,
            context: RankingContext::default(),
        };
        session.rerank();

        info!(players = session.players.len(), "Draft session started");
        Ok(session)
    }

    fn rerank(&mut self) {
        self.context = rank_players(&mut self.players, &self.draft, &self.league, &self.settings);
    }

    pub fn league(&self) -> &LeagueConfig {
        &self.league
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn draft_state(&self) -> &DraftState {
        &self.draft
    }

    pub fn board(&self) -> &DraftBoard {
        &self.board
    }

    /// Every player in ranking order, drafted ones last.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn replacement_levels(&self) -> &PositionTable {
        &self.context.replacement_levels
    }

    pub fn scarcity(&self) -> &PositionTable {
        &self.context.scarcity
    }

    /// Replace the league configuration and rescore.
    ///
    /// The draft board is rebuilt for the new league shape; drafted players
    /// stay drafted.
    pub fn set_league_config(&mut self, league: LeagueConfig) -> Result<(), DraftError> {
        if let Err(e) = league.validate() {
            warn!("Rejected league configuration: {}", e);
            return Err(e.into());
        }

        self.board = DraftBoard::new(&league);
        self.league = league;
        self.rerank();
        Ok(())
    }

    /// Replace the model settings and rescore.
    pub fn set_model_settings(&mut self, settings: ModelSettings) {
        self.settings = settings;
        self.rerank();
    }

    /// Mark a player drafted without placing them on the board.
    pub fn mark_drafted(&mut self, id: PlayerId) -> Result<Pick, DraftError> {
        self.record_pick(id, None)
    }

    /// Place a player in a team's roster slot and mark them drafted.
    pub fn draft_to_team(
        &mut self,
        id: PlayerId,
        team_id: &str,
        slot: RosterSlot,
    ) -> Result<Pick, DraftError> {
        let position = self.player(id).ok_or(DraftError::UnknownPlayer(id))?.position;
        if self.draft.is_drafted(id) {
            return Err(DraftError::AlreadyDrafted(id));
        }

        self.board.place(team_id, id, position, slot)?;

        self.record_pick(
            id,
            Some(BoardPlacement {
                team_id: team_id.to_string(),
                slot,
            }),
        )
    }

    fn record_pick(
        &mut self,
        id: PlayerId,
        placement: Option<BoardPlacement>,
    ) -> Result<Pick, DraftError> {
        let player = self
            .players
            .iter()
            .find(|p| p.id == id)
            .ok_or(DraftError::UnknownPlayer(id))?;

        let pick = self
            .draft
            .record(player, placement)
            .cloned()
            .ok_or(DraftError::AlreadyDrafted(id))?;

        info!(
            pick = pick.pick,
            player = %pick.player_name,
            position = %pick.position,
            "Player drafted"
        );

        self.rerank();
        Ok(pick)
    }

    fn available(&self) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(|p| !self.draft.is_drafted(p.id))
    }

    /// Undrafted players in ranking order, optionally limited to one position.
    pub fn ranked_players(&self, filter: PositionFilter) -> Vec<RankedPlayer<'_>> {
        self.available()
            .enumerate()
            .filter(|(_, p)| filter.matches(p.position))
            .map(|(i, p)| RankedPlayer {
                rank: i + 1,
                high_injury_risk: p.is_high_injury_risk(),
                player: p,
            })
            .collect()
    }

    /// Case-insensitive name search over undrafted players.
    ///
    /// The term is matched as typed, surrounding whitespace included. Names
    /// starting with the term come first, then higher scores.
    pub fn search(&self, term: &str, limit: usize) -> Vec<&Player> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, &Player)> = self
            .available()
            .filter_map(|p| {
                p.name
                    .to_lowercase()
                    .find(&needle)
                    .map(|idx| (idx == 0, p))
            })
            .collect();

        matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.score.total_cmp(&a.1.score)));
        matches.into_iter().take(limit).map(|(_, p)| p).collect()
    }

    pub fn model_info(&self) -> ModelInfo {
        let risk_profile = self.settings.risk_profile();
        ModelInfo {
            league_size: self.league.size,
            scoring_type: self.league.scoring_type,
            risk_profile,
            risk_profile_label: risk_profile.to_string(),
            replacement_levels: self.context.replacement_levels.clone(),
        }
    }

    pub fn draft_summary(&self) -> DraftSummary {
        DraftSummary {
            drafted_count: self.draft.drafted_count(),
            current_pick: self.draft.current_pick(),
            recent_picks: self.draft.recent_picks().cloned().collect(),
        }
    }
}
