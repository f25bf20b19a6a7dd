//! Draft progress: which players are gone and the recent pick log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use super::{Player, PlayerId, Position, RosterSlot};

/// Number of picks kept in the recent-picks log.
pub const RECENT_PICKS_WINDOW: usize = 20;

/// Where a pick landed on the draft board, if it was placed on one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPlacement {
    pub team_id: String,
    pub slot: RosterSlot,
}

/// A single draft pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    /// 1-based overall pick number
    pub pick: u32,
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Position,
    pub team: String,
    pub placement: Option<BoardPlacement>,
    pub drafted_at: DateTime<Utc>,
}

/// Drafted players and pick history. Grows monotonically; there is no undo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    drafted: HashSet<PlayerId>,
    /// Most recent first, capped at [`RECENT_PICKS_WINDOW`]
    recent_picks: VecDeque<Pick>,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drafted(&self, id: PlayerId) -> bool {
        self.drafted.contains(&id)
    }

    /// Number of players drafted so far.
    pub fn drafted_count(&self) -> u32 {
        self.drafted.len() as u32
    }

    /// The pick number the next selection will receive.
    pub fn current_pick(&self) -> u32 {
        self.drafted_count() + 1
    }

    pub fn recent_picks(&self) -> impl Iterator<Item = &Pick> {
        self.recent_picks.iter()
    }

    /// Record a pick. Returns `None` if the player was already drafted.
    pub fn record(&mut self, player: &Player, placement: Option<BoardPlacement>) -> Option<&Pick> {
        if !self.drafted.insert(player.id) {
            return None;
        }

        let pick = Pick {
            pick: self.drafted_count(),
            player_id: player.id,
            player_name: player.name.clone(),
            position: player.position,
            team: player.team.clone(),
            placement,
            drafted_at: Utc::now(),
        };

        self.recent_picks.push_front(pick);
        self.recent_picks.truncate(RECENT_PICKS_WINDOW);
        self.recent_picks.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::fixtures::player;

    #[test]
    fn test_draft_state_empty() {
        let state = DraftState::new();
        assert_eq!(state.drafted_count(), 0);
        assert_eq!(state.current_pick(), 1);
        assert_eq!(state.recent_picks().count(), 0);
    }

    #[test]
    fn test_record_pick() {
        let mut state = DraftState::new();
        let p = player(10, Position::Rb, 250.0);

        let pick = state.record(&p, None).unwrap();
        assert_eq!(pick.pick, 1);
        assert_eq!(pick.player_id, PlayerId::new(10));
        assert_eq!(pick.position, Position::Rb);

        assert!(state.is_drafted(PlayerId::new(10)));
        assert_eq!(state.current_pick(), 2);
    }

    #[test]
    fn test_record_pick_twice_is_rejected() {
        let mut state = DraftState::new();
        let p = player(10, Position::Rb, 250.0);

        assert!(state.record(&p, None).is_some());
        assert!(state.record(&p, None).is_none());
        assert_eq!(state.drafted_count(), 1);
        assert_eq!(state.recent_picks().count(), 1);
    }

    #[test]
    fn test_recent_picks_most_recent_first_and_capped() {
        let mut state = DraftState::new();
        for id in 1..=25 {
            state.record(&player(id, Position::Wr, 100.0), None);
        }

        let picks: Vec<_> = state.recent_picks().collect();
        assert_eq!(picks.len(), RECENT_PICKS_WINDOW);
        assert_eq!(picks[0].pick, 25);
        assert_eq!(picks[0].player_id, PlayerId::new(25));
        assert_eq!(picks[19].pick, 6);

        // Capping the log never forgets who was drafted
        assert!(state.is_drafted(PlayerId::new(1)));
        assert_eq!(state.drafted_count(), 25);
    }

    #[test]
    fn test_record_with_placement() {
        let mut state = DraftState::new();
        let placement = BoardPlacement {
            team_id: "team-3".to_string(),
            slot: RosterSlot::Flex,
        };
        let pick = state
            .record(&player(4, Position::Te, 120.0), Some(placement.clone()))
            .unwrap();
        assert_eq!(pick.placement, Some(placement));
    }
}
