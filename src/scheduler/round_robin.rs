//! Round-robin schedule assembler.
//!
//! # Algorithm
//!
//! 1. Check the configuration preconditions.
//! 2. Pad an odd team list with a bye slot.
//! 3. For each cycle, walk the circle-method rounds; swap home and away on
//!    odd cycles so that double round-robins alternate fixtures.
//! 4. Drop pairings against the bye slot.
//! 5. Stamp each match with the next kick-off time, then leave a fixed gap
//!    before the next round.
//!
//! # Complexity
//! O(c * n²) where c = cycles, n = teams.

use chrono::Utc;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::clock::MatchClock;
use super::pairing::round_pairings;
use crate::error::{Result, ScheduleError};
use crate::grouping::assign_teams_to_groups;
use crate::models::{Group, Match, Round, TeamId, Timestamp};
use crate::validation::validate_config;

/// Default spacing between consecutive kick-offs.
pub const DEFAULT_MATCH_DURATION_MINUTES: u32 = 90;

/// Default venue for generated matches.
pub const DEFAULT_LOCATION: &str = "TBD";

/// Extra break inserted after every round during generation.
pub const ROUND_GAP_MINUTES: i64 = 60;

/// Upper bound on the up-front round allocation.
const MAX_PREALLOCATED_ROUNDS: usize = 1024;

/// Input container for schedule generation.
///
/// # Example
///
/// ```
/// use u_tournament::scheduler::{generate_round_robin_schedule, ScheduleConfig};
///
/// let config = ScheduleConfig::new("cup", ["a", "b", "c", "d"])
///     .with_number_of_rounds(2)
///     .with_location("Main Stadium");
///
/// let schedule = generate_round_robin_schedule(&config).unwrap();
/// assert_eq!(schedule.rounds.len(), 6);
/// assert_eq!(schedule.match_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Owning tournament.
    pub tournament_id: String,
    /// Participating teams, in seeding order.
    pub teams: Vec<TeamId>,
    /// Number of full round-robin cycles (1 = single, 2 = double, ...).
    #[serde(default = "default_number_of_rounds")]
    pub number_of_rounds: u32,
    /// First kick-off. `None` = the time of generation.
    #[serde(default)]
    pub start_date: Option<Timestamp>,
    /// Spacing between consecutive kick-offs.
    #[serde(default = "default_match_duration")]
    pub match_duration_minutes: u32,
    /// Venue stamped on every match.
    #[serde(default = "default_location")]
    pub default_location: String,
    /// When set, teams are also partitioned into this many groups.
    #[serde(default)]
    pub group_count: Option<usize>,
}

fn default_number_of_rounds() -> u32 {
    1
}

fn default_match_duration() -> u32 {
    DEFAULT_MATCH_DURATION_MINUTES
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl ScheduleConfig {
    /// Creates a single round-robin configuration with default timing.
    ///
    /// Accepts anything that exposes a team id, including [`crate::models::Team`].
    pub fn new<I, S>(tournament_id: impl Into<String>, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tournament_id: tournament_id.into(),
            teams: teams.into_iter().map(|t| t.as_ref().to_string()).collect(),
            number_of_rounds: default_number_of_rounds(),
            start_date: None,
            match_duration_minutes: DEFAULT_MATCH_DURATION_MINUTES,
            default_location: default_location(),
            group_count: None,
        }
    }

    /// Sets the number of cycles.
    pub fn with_number_of_rounds(mut self, number_of_rounds: u32) -> Self {
        self.number_of_rounds = number_of_rounds;
        self
    }

    /// Sets the first kick-off.
    pub fn with_start_date(mut self, start_date: Timestamp) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the spacing between kick-offs.
    pub fn with_match_duration(mut self, minutes: u32) -> Self {
        self.match_duration_minutes = minutes;
        self
    }

    /// Sets the venue.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// Also partition the teams into `group_count` groups.
    pub fn with_groups(mut self, group_count: usize) -> Self {
        self.group_count = Some(group_count);
        self
    }

    /// Rounds a full schedule will contain: `n - 1` per cycle for even `n`,
    /// `n` per cycle for odd `n`, none below two teams.
    pub fn expected_round_count(&self) -> usize {
        let n = self.teams.len();
        if n < 2 {
            return 0;
        }
        let padded = n + n % 2;
        (padded - 1).saturating_mul(self.number_of_rounds as usize)
    }
}

/// Generated schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutput {
    /// Rounds in play order.
    pub rounds: Vec<Round>,
    /// Groups, when the configuration asked for them.
    pub groups: Vec<Group>,
}

impl ScheduleOutput {
    /// Total number of matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(Round::match_count).sum()
    }

    /// All matches in play order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    /// All matches featuring the given team, in play order.
    pub fn matches_for_team<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a Match> {
        self.matches().filter(move |m| m.involves(team_id))
    }

    /// Latest scheduled kick-off.
    pub fn last_kickoff(&self) -> Option<Timestamp> {
        self.matches().filter_map(|m| m.scheduled_date).max()
    }
}

/// Generates a round-robin schedule.
///
/// Fewer than two teams yields an empty schedule rather than an error.
///
/// # Errors
/// - [`ScheduleError::InvalidConfig`] when team ids are empty or repeated,
///   the match duration is zero, or the round numbers would overflow.
/// - [`ScheduleError::TimestampOverflow`] when kick-offs run past the
///   representable date range.
pub fn generate_round_robin_schedule(config: &ScheduleConfig) -> Result<ScheduleOutput> {
    if let Err(errors) = validate_config(config) {
        warn!(
            "Rejected schedule configuration for tournament {}: {} issue(s)",
            config.tournament_id,
            errors.len()
        );
        return Err(ScheduleError::InvalidConfig(errors));
    }

    let groups = config
        .group_count
        .map(|count| assign_teams_to_groups(&config.teams, count, &config.tournament_id))
        .unwrap_or_default();

    if config.teams.len() < 2 {
        debug!(
            "Tournament {} has {} team(s), nothing to schedule",
            config.tournament_id,
            config.teams.len()
        );
        return Ok(ScheduleOutput {
            rounds: Vec::new(),
            groups,
        });
    }

    let slots = padded_slots(&config.teams);
    let num_slots = slots.len();
    let rounds_per_cycle = num_slots - 1;
    let match_minutes = i64::from(config.match_duration_minutes);
    let mut clock = MatchClock::new(config.start_date.unwrap_or_else(Utc::now));
    let capacity = config.expected_round_count().min(MAX_PREALLOCATED_ROUNDS);
    let mut rounds = Vec::with_capacity(capacity);

    for cycle in 0..config.number_of_rounds {
        let reverse_fixtures = cycle % 2 == 1;

        for round_index in 0..rounds_per_cycle {
            let round_number = cycle * rounds_per_cycle as u32 + round_index as u32 + 1;
            let round_id = format!("{}-round-{round_number}", config.tournament_id);
            let mut matches = Vec::with_capacity(num_slots / 2);

            for (home_index, away_index) in round_pairings(num_slots, round_index) {
                let (Some(home), Some(away)) = (slots[home_index], slots[away_index]) else {
                    continue;
                };
                let (home, away) = if reverse_fixtures {
                    (away, home)
                } else {
                    (home, away)
                };

                let kickoff = clock.tick(match_minutes)?;
                let match_id = format!("{round_id}-match-{}", matches.len() + 1);
                matches.push(
                    Match::new(match_id, &round_id, round_number)
                        .with_teams(home, away)
                        .with_schedule(kickoff)
                        .with_location(&config.default_location),
                );
            }

            trace!(
                "Round {round_number} of tournament {}: {} match(es)",
                config.tournament_id,
                matches.len()
            );
            rounds.push(Round::new(
                round_id,
                &config.tournament_id,
                round_number,
                matches,
                clock.now(),
            ));

            clock.advance(ROUND_GAP_MINUTES)?;
        }
    }

    let output = ScheduleOutput { rounds, groups };
    debug!(
        "Generated {} round(s) with {} match(es) for tournament {} ({} cycle(s), {} team(s))",
        output.rounds.len(),
        output.match_count(),
        config.tournament_id,
        config.number_of_rounds,
        config.teams.len()
    );
    Ok(output)
}

/// Team slots for the circle method, padded to an even count with a bye (`None`).
fn padded_slots(teams: &[TeamId]) -> Vec<Option<&str>> {
    let mut slots: Vec<Option<&str>> = teams.iter().map(|t| Some(t.as_str())).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }
    slots
}
