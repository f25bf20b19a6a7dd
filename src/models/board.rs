//! Draft board: one roster per team with position-limited slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::{LeagueConfig, PlayerId, Position, RosterPositions, RosterSlot};

/// Reasons a player cannot be placed on a team board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("{position} cannot be placed in {slot} slot")]
    Ineligible { position: Position, slot: RosterSlot },

    #[error("{team_id} has no open {slot} slot")]
    SlotFull { team_id: String, slot: RosterSlot },
}

/// A single team's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBoard {
    pub id: String,
    pub name: String,
    pub roster: BTreeMap<RosterSlot, Vec<PlayerId>>,
}

impl TeamBoard {
    fn new(number: u32) -> Self {
        Self {
            id: format!("team-{}", number),
            name: format!("Team {}", number),
            roster: RosterSlot::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    /// Players placed in a slot.
    pub fn filled(&self, slot: RosterSlot) -> &[PlayerId] {
        self.roster.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// All team boards for the league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBoard {
    pub roster_positions: RosterPositions,
    pub teams: Vec<TeamBoard>,
}

impl DraftBoard {
    /// Build empty boards for every team in the league.
    pub fn new(league: &LeagueConfig) -> Self {
        Self {
            roster_positions: league.roster_positions,
            teams: (1..=league.size).map(TeamBoard::new).collect(),
        }
    }

    pub fn team(&self, team_id: &str) -> Option<&TeamBoard> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Whether `slot` on `team_id` can take a player at `position`.
    pub fn check_placement(
        &self,
        team_id: &str,
        position: Position,
        slot: RosterSlot,
    ) -> Result<(), PlacementError> {
        let team = self
            .team(team_id)
            .ok_or_else(|| PlacementError::UnknownTeam(team_id.to_string()))?;

        if !slot.accepts(position) {
            return Err(PlacementError::Ineligible { position, slot });
        }

        let limit = self.roster_positions.count(slot) as usize;
        if team.filled(slot).len() >= limit {
            return Err(PlacementError::SlotFull {
                team_id: team_id.to_string(),
                slot,
            });
        }

        Ok(())
    }

    /// Place a player after a successful [`check_placement`](Self::check_placement).
    pub fn place(
        &mut self,
        team_id: &str,
        player_id: PlayerId,
        position: Position,
        slot: RosterSlot,
    ) -> Result<(), PlacementError> {
        self.check_placement(team_id, position, slot)?;

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| PlacementError::UnknownTeam(team_id.to_string()))?;
        team.roster.entry(slot).or_default().push(player_id);
        Ok(())
    }
}
