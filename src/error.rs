//! Error types.
//!
//! Ordinary edge cases (fewer than two teams, zero groups) are encoded as
//! empty return values. `ScheduleError` is reserved for caller mistakes
//! that would otherwise corrupt a schedule silently.

use thiserror::Error;

use crate::validation::ValidationError;

/// Scheduling errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The configuration failed its precondition checks.
    #[error("Invalid schedule configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Advancing the clock left the representable date range.
    #[error("Timestamp overflow after advancing {minutes} minutes")]
    TimestampOverflow { minutes: i64 },
}

impl ScheduleError {
    /// Validation errors carried by an `InvalidConfig`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidConfig(errors) => errors,
            ScheduleError::TimestampOverflow { .. } => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
