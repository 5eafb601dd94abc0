//! Team model.
//!
//! Teams belong to the caller. The scheduler only reads `id`; the running
//! statistics are maintained by [`crate::standings`].

use serde::{Deserialize, Serialize};

use super::{Outcome, TeamId};

/// A team taking part in a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Optional logo reference (URL or asset key).
    pub logo: Option<String>,
    /// Running statistics. `None` until the caller starts tracking them.
    pub stats: Option<TeamStats>,
}

/// Cumulative results for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl Team {
    /// Creates a team with zeroed statistics.
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: None,
            stats: Some(TeamStats::default()),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the logo reference.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Returns this team with one more result folded into its statistics.
    ///
    /// Teams without statistics start from zero.
    pub fn with_result_applied(mut self, goals_for: u32, goals_against: u32) -> Self {
        let stats = self.stats.unwrap_or_default();
        self.stats = Some(stats.with_result(goals_for, goals_against));
        self
    }
}

impl AsRef<str> for Team {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl TeamStats {
    /// Returns the statistics after one more match with the given score.
    pub fn with_result(mut self, goals_for: u32, goals_against: u32) -> Self {
        let outcome = Outcome::from_goals(goals_for, goals_against);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::Loss => self.losses = self.losses.saturating_add(1),
        }
        self.points = self.points.saturating_add(outcome.points());
        self
    }

    /// Matches played.
    pub fn played(&self) -> u32 {
        self.wins.saturating_add(self.draws).saturating_add(self.losses)
    }

    /// Goals scored minus goals conceded.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}
