//! Non-destructive rescheduling.
//!
//! Re-stamps every match with sequential kick-off times from a new anchor
//! date. Rounds, matches, pairings and order are carried over unchanged;
//! unlike generation, no break is inserted between rounds.

use log::debug;

use super::clock::MatchClock;
use crate::error::Result;
use crate::models::{Round, Timestamp};

/// Returns a copy of `rounds` with kick-offs recomputed from `new_start_date`.
///
/// Matches are spaced `match_duration_minutes` apart, continuing across
/// round boundaries. Each round's start and end dates are re-derived from
/// its own matches. The input is left untouched.
///
/// # Errors
/// [`crate::error::ScheduleError::TimestampOverflow`] when kick-offs run
/// past the representable date range.
pub fn reschedule_matches(
    rounds: &[Round],
    new_start_date: Timestamp,
    match_duration_minutes: u32,
) -> Result<Vec<Round>> {
    let step = i64::from(match_duration_minutes);
    let mut clock = MatchClock::new(new_start_date);
    let mut rescheduled = Vec::with_capacity(rounds.len());

    for round in rounds {
        let mut matches = Vec::with_capacity(round.matches.len());
        for m in &round.matches {
            matches.push(m.clone().with_schedule(clock.tick(step)?));
        }
        rescheduled.push(round.clone().with_matches(matches, clock.now()));
    }

    debug!(
        "Rescheduled {} round(s) from {} at {} minute spacing",
        rescheduled.len(),
        new_start_date,
        match_duration_minutes
    );
    Ok(rescheduled)
}
