//! Match (fixture) model.
//!
//! A match belongs to exactly one round and pairs a home team with an away
//! team. Either side may be `None` to represent a bye, although the
//! scheduler drops bye pairings before materializing matches.
//!
//! Updates go through the `with_*` functions, which consume the record
//! and return the changed copy.

use serde::{Deserialize, Serialize};

use super::{TeamId, Timestamp};

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded to each side for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// A scheduled match between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique match identifier.
    pub id: String,
    /// Owning round.
    pub round_id: String,
    /// Owning group, for group-stage fixtures.
    pub group_id: Option<String>,
    /// Home side. `None` = bye.
    pub home_team_id: Option<TeamId>,
    /// Away side. `None` = bye.
    pub away_team_id: Option<TeamId>,
    /// Kick-off time.
    pub scheduled_date: Option<Timestamp>,
    /// Venue.
    pub location: Option<String>,
    /// Lifecycle status.
    pub status: MatchStatus,
    /// Final score, once played.
    pub result: Option<MatchResult>,
    /// Absolute round number (1-based, across all cycles).
    pub round_number: u32,
}

/// Match lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Not started yet.
    #[default]
    Scheduled,
    /// Currently being played.
    InProgress,
    /// Finished with a result.
    Completed,
    /// Will not be played.
    Cancelled,
}

/// Final score of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_score: u32,
    pub away_score: u32,
    /// When the result was recorded.
    pub completed_at: Timestamp,
    /// Free-form remarks (forfeit, extra time, ...).
    pub notes: Option<String>,
}

/// Result of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Classifies a score from the perspective of the team scoring `goals_for`.
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    /// League points for this outcome.
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => POINTS_FOR_WIN,
            Outcome::Draw => POINTS_FOR_DRAW,
            Outcome::Loss => 0,
        }
    }
}

impl MatchResult {
    /// Creates a result without notes.
    pub fn new(home_score: u32, away_score: u32, completed_at: Timestamp) -> Self {
        Self {
            home_score,
            away_score,
            completed_at,
            notes: None,
        }
    }

    /// Attaches notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Match {
    /// Creates a scheduled match with no teams, date, or location yet.
    pub fn new(id: impl Into<String>, round_id: impl Into<String>, round_number: u32) -> Self {
        Self {
            id: id.into(),
            round_id: round_id.into(),
            group_id: None,
            home_team_id: None,
            away_team_id: None,
            scheduled_date: None,
            location: None,
            status: MatchStatus::Scheduled,
            result: None,
            round_number,
        }
    }

    /// Sets both sides.
    pub fn with_teams(mut self, home: impl Into<TeamId>, away: impl Into<TeamId>) -> Self {
        self.home_team_id = Some(home.into());
        self.away_team_id = Some(away.into());
        self
    }

    /// Sets the owning group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the kick-off time.
    pub fn with_schedule(mut self, scheduled_date: Timestamp) -> Self {
        self.scheduled_date = Some(scheduled_date);
        self
    }

    /// Sets the venue.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Records the final score and marks the match completed.
    pub fn with_result(mut self, result: MatchResult) -> Self {
        self.result = Some(result);
        self.status = MatchStatus::Completed;
        self
    }

    /// Whether either side is missing.
    pub fn is_bye(&self) -> bool {
        self.home_team_id.is_none() || self.away_team_id.is_none()
    }

    /// Whether a result has been recorded and the match is completed.
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed && self.result.is_some()
    }

    /// Whether the given team plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id.as_deref() == Some(team_id)
            || self.away_team_id.as_deref() == Some(team_id)
    }

    /// Order-independent key for the pairing, `None` for byes.
    ///
    /// The two ids are sorted so that A-vs-B and B-vs-A share a key.
    pub fn pairing_key(&self) -> Option<(&str, &str)> {
        let home = self.home_team_id.as_deref()?;
        let away = self.away_team_id.as_deref()?;
        if home <= away {
            Some((home, away))
        } else {
            Some((away, home))
        }
    }
}
