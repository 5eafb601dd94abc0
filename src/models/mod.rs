//! Tournament domain models.
//!
//! Plain data records produced and consumed by the scheduler. Every record
//! is a value: operations return new records instead of mutating the ones
//! a caller holds, so a persistence layer can store them as-is.
//!
//! # Domain Mappings
//!
//! | u-tournament | Football | Chess | Esports |
//! |--------------|----------|-------|---------|
//! | Team | Club | Player | Roster |
//! | Match | Fixture | Game | Series |
//! | Round | Matchday | Round | Week |
//! | Group | Group | Section | Division |

mod fixture;
mod group;
mod round;
mod team;

use chrono::{DateTime, Utc};

pub use fixture::{Match, MatchResult, MatchStatus, Outcome, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use group::{Group, Standing};
pub use round::Round;
pub use team::{Team, TeamStats};

/// Opaque team identifier.
pub type TeamId = String;

/// Point in time used for every scheduled date.
///
/// Serialized as RFC 3339 so persisted schedules round-trip unambiguously.
pub type Timestamp = DateTime<Utc>;
