//! Round-robin schedule generation and rescheduling.
//!
//! # Algorithm
//!
//! Pairings come from the circle method: one team is anchored while the
//! others rotate around it, so that over `n - 1` rounds every pair of
//! teams meets exactly once and nobody plays twice in a round. An odd
//! field is padded with a bye slot whose pairings are dropped.
//!
//! The assembler repeats the cycle `number_of_rounds` times, swapping
//! home and away on every odd cycle, and stamps matches with sequential
//! kick-off times.
//!
//! # References
//!
//! - Kirkman (1847), "On a Problem in Combinations"
//! - Berger (1899), "Schachjahrbuch", pairing tables
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

mod clock;
mod pairing;
mod reschedule;
mod round_robin;

pub use pairing::{cycle_pairings, round_pairings, Pairing};
pub use reschedule::reschedule_matches;
pub use round_robin::{
    generate_round_robin_schedule, ScheduleConfig, ScheduleOutput, DEFAULT_LOCATION,
    DEFAULT_MATCH_DURATION_MINUTES, ROUND_GAP_MINUTES,
};
