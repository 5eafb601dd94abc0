//! Sequential kick-off clock shared by generation and rescheduling.

use chrono::Duration;

use crate::error::{Result, ScheduleError};
use crate::models::Timestamp;

/// Monotonic clock handing out kick-off times.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MatchClock {
    now: Timestamp,
}

impl MatchClock {
    pub(crate) fn new(start: Timestamp) -> Self {
        Self { now: start }
    }

    /// Current position of the clock.
    pub(crate) fn now(&self) -> Timestamp {
        self.now
    }

    /// Moves the clock forward by `minutes`.
    pub(crate) fn advance(&mut self, minutes: i64) -> Result<()> {
        self.now = self
            .now
            .checked_add_signed(Duration::minutes(minutes))
            .ok_or(ScheduleError::TimestampOverflow { minutes })?;
        Ok(())
    }

    /// Returns the current time and moves past it by `minutes`.
    pub(crate) fn tick(&mut self, minutes: i64) -> Result<Timestamp> {
        let at = self.now;
        self.advance(minutes)?;
        Ok(at)
    }
}
