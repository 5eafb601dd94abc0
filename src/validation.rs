//! Validation for schedule configurations and generated schedules.
//!
//! Checks structural integrity before and after scheduling. Detects:
//! - Duplicate or empty team IDs, zero match durations and cycle counts
//!   whose round numbers would not fit (configuration)
//! - The same pairing twice in one round
//! - A team booked into two matches of one round
//! - A team paired against itself
//! - Matches whose round number disagrees with their round
//!
//! [`validate_schedule`] is the fast yes/no check; [`audit_schedule`]
//! collects every issue.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::models::Round;
use crate::scheduler::ScheduleConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teams share the same ID.
    DuplicateTeamId,
    /// A team ID is the empty string.
    EmptyTeamId,
    /// Match duration is zero, so kick-offs would collide.
    InvalidMatchDuration,
    /// The total number of rounds exceeds the `u32` round-number range.
    RoundCountOverflow,
    /// The same unordered pairing appears twice in one round.
    DuplicatePairing,
    /// A team plays more than one match in a round.
    TeamDoubleBooked,
    /// A match pairs a team with itself.
    SelfPairing,
    /// A match's round number differs from its round's.
    RoundNumberMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a schedule configuration.
///
/// Checks:
/// 1. No team ID is empty
/// 2. No duplicate team IDs
/// 3. Match duration is positive
/// 4. Every round number fits in a `u32`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &ScheduleConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut team_ids = HashSet::new();
    for (position, id) in config.teams.iter().enumerate() {
        if id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeamId,
                format!("Team at position {position} has an empty ID"),
            ));
        } else if !team_ids.insert(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeamId,
                format!("Duplicate team ID: {id}"),
            ));
        }
    }

    if config.match_duration_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMatchDuration,
            "Match duration must be at least one minute",
        ));
    }

    if config.teams.len() >= 2 {
        let padded = config.teams.len() + config.teams.len() % 2;
        let total = u32::try_from(padded - 1)
            .ok()
            .and_then(|per_cycle| per_cycle.checked_mul(config.number_of_rounds));
        if total.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoundCountOverflow,
                format!(
                    "{} cycles of {} teams exceed the maximum round number",
                    config.number_of_rounds,
                    config.teams.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether no round contains the same pairing twice.
///
/// Pairings are order-independent (A-B equals B-A) and only compared
/// within a round. Matches with a missing side are skipped. Stops at the
/// first duplicate.
pub fn validate_schedule(rounds: &[Round]) -> bool {
    for round in rounds {
        let mut pairings = HashSet::new();
        for m in &round.matches {
            let Some(key) = m.pairing_key() else {
                continue;
            };
            if !pairings.insert(key) {
                debug!(
                    "Duplicate pairing {}-{} in round {}",
                    key.0, key.1, round.round_number
                );
                return false;
            }
        }
    }
    true
}

/// Audits a schedule and reports every integrity issue.
///
/// Checks, per round:
/// 1. No duplicate pairings
/// 2. No team in more than one match
/// 3. No team paired against itself
/// 4. Every match carries the round's number
pub fn audit_schedule(rounds: &[Round]) -> ValidationResult {
    let mut errors = Vec::new();

    for round in rounds {
        let mut pairings = HashSet::new();
        let mut booked = HashSet::new();

        for m in &round.matches {
            if m.round_number != round.round_number {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoundNumberMismatch,
                    format!(
                        "Match '{}' has round number {} but belongs to round {}",
                        m.id, m.round_number, round.round_number
                    ),
                ));
            }

            let Some(key) = m.pairing_key() else {
                continue;
            };

            if key.0 == key.1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPairing,
                    format!("Match '{}' pairs team '{}' with itself", m.id, key.0),
                ));
                continue;
            }

            if !pairings.insert(key) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicatePairing,
                    format!(
                        "Pairing {}-{} appears more than once in round {}",
                        key.0, key.1, round.round_number
                    ),
                ));
                continue;
            }

            for team in [key.0, key.1] {
                if !booked.insert(team) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::TeamDoubleBooked,
                        format!(
                            "Team '{team}' plays more than once in round {}",
                            round.round_number
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
