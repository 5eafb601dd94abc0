//! Round-robin tournament scheduling.
//!
//! Produces conflict-free match schedules for a set of teams, partitions
//! teams into balanced groups, validates schedules and shifts them in time
//! without touching their structure. Everything here is pure computation
//! over in-memory records: no I/O, no shared state.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Team`, `Match`, `Round`, `Group`, `Standing`
//! - **`scheduler`**: Circle-method pairings, schedule assembly, rescheduling
//! - **`grouping`**: Contiguous, evenly sized group partitioning
//! - **`validation`**: Configuration preconditions and schedule integrity checks
//! - **`standings`**: Result recording and league tables
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use u_tournament::scheduler::{generate_round_robin_schedule, reschedule_matches, ScheduleConfig};
//! use u_tournament::validation::validate_schedule;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//! let config = ScheduleConfig::new("league", ["lions", "tigers", "bears"])
//!     .with_start_date(start);
//!
//! let schedule = generate_round_robin_schedule(&config).unwrap();
//! assert_eq!(schedule.rounds.len(), 3);
//! assert!(validate_schedule(&schedule.rounds));
//!
//! let later = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
//! let moved = reschedule_matches(&schedule.rounds, later, 90).unwrap();
//! assert_eq!(moved[0].start_date, later);
//! ```
//!
//! # Logging
//!
//! Emits through the `log` facade (`debug` summaries, `trace` per round,
//! `warn` on rejected configurations). Installing a logger is up to the
//! host.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - de Werra (1981), "Scheduling in Sports"

pub mod error;
pub mod grouping;
pub mod models;
pub mod scheduler;
pub mod standings;
pub mod validation;

pub use error::{Result, ScheduleError};
