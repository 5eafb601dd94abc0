//! Group (bracket) model with its standings table.

use serde::{Deserialize, Serialize};

use super::{Outcome, TeamId};

/// A named partition of teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Owning tournament.
    pub tournament_id: String,
    /// Display name ("Group A", ...).
    pub name: String,
    /// Member teams in seeding order.
    pub team_ids: Vec<TeamId>,
    /// One row per member team.
    pub standings: Vec<Standing>,
}

/// One row of a group table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl Group {
    /// Creates a group with a zeroed standings row for every member.
    pub fn new(
        id: impl Into<String>,
        tournament_id: impl Into<String>,
        name: impl Into<String>,
        team_ids: Vec<TeamId>,
    ) -> Self {
        let standings = team_ids.iter().map(Standing::new).collect();
        Self {
            id: id.into(),
            tournament_id: tournament_id.into(),
            name: name.into(),
            team_ids,
            standings,
        }
    }

    /// Replaces the standings table.
    pub fn with_standings(mut self, standings: Vec<Standing>) -> Self {
        self.standings = standings;
        self
    }

    /// Number of member teams.
    pub fn size(&self) -> usize {
        self.team_ids.len()
    }

    /// Whether the team is a member.
    pub fn contains(&self, team_id: &str) -> bool {
        self.team_ids.iter().any(|id| id == team_id)
    }

    /// The standings row for a team.
    pub fn standing_for(&self, team_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.team_id == team_id)
    }
}

impl Standing {
    /// Creates a row with every counter at zero.
    pub fn new(team_id: impl Into<TeamId>) -> Self {
        Self {
            team_id: team_id.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Returns the row after one more match with the given score.
    pub fn with_result(mut self, goals_for: u32, goals_against: u32) -> Self {
        let outcome = Outcome::from_goals(goals_for, goals_against);
        self.played = self.played.saturating_add(1);
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::Loss => self.losses = self.losses.saturating_add(1),
        }
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = self.points.saturating_add(outcome.points());
        self
    }

    /// Whether every counter is still zero.
    pub fn is_zeroed(&self) -> bool {
        self.played == 0
            && self.wins == 0
            && self.draws == 0
            && self.losses == 0
            && self.goals_for == 0
            && self.goals_against == 0
            && self.goal_difference == 0
            && self.points == 0
    }
}
