//! Round model.
//!
//! A round is one time slot of a tournament: a numbered set of matches in
//! which no team plays twice. Its start and end dates are derived from the
//! first and last match.

use serde::{Deserialize, Serialize};

use super::{Match, Timestamp};

/// A numbered collection of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Unique round identifier.
    pub id: String,
    /// Owning tournament.
    pub tournament_id: String,
    /// Absolute round number (1-based).
    pub round_number: u32,
    /// Display name ("Round N" by default).
    pub name: String,
    /// Matches in kick-off order.
    pub matches: Vec<Match>,
    /// Scheduled date of the first match.
    pub start_date: Timestamp,
    /// Scheduled date of the last match.
    pub end_date: Timestamp,
}

impl Round {
    /// Creates a round, deriving its dates from `matches`.
    ///
    /// `fallback` is used for either bound when the round has no dated
    /// match to take it from.
    pub fn new(
        id: impl Into<String>,
        tournament_id: impl Into<String>,
        round_number: u32,
        matches: Vec<Match>,
        fallback: Timestamp,
    ) -> Self {
        let (start_date, end_date) = date_span(&matches, fallback);
        Self {
            id: id.into(),
            tournament_id: tournament_id.into(),
            round_number,
            name: format!("Round {round_number}"),
            matches,
            start_date,
            end_date,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the matches and re-derives the dates.
    pub fn with_matches(mut self, matches: Vec<Match>, fallback: Timestamp) -> Self {
        let (start_date, end_date) = date_span(&matches, fallback);
        self.matches = matches;
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Finds a match by ID.
    pub fn find_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Whether the given team plays in this round.
    pub fn involves(&self, team_id: &str) -> bool {
        self.matches.iter().any(|m| m.involves(team_id))
    }

    /// Whether every match in the round has a recorded result.
    pub fn is_completed(&self) -> bool {
        self.matches.iter().all(Match::is_completed)
    }
}

fn date_span(matches: &[Match], fallback: Timestamp) -> (Timestamp, Timestamp) {
    let start = matches
        .first()
        .and_then(|m| m.scheduled_date)
        .unwrap_or(fallback);
    let end = matches
        .last()
        .and_then(|m| m.scheduled_date)
        .unwrap_or(fallback);
    (start, end)
}
