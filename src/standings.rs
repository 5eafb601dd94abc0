//! Result recording and league tables.
//!
//! Results are recorded on matches by returning updated schedules, and
//! tables are recomputed from scratch from the completed matches, so a
//! corrected score never leaves stale counters behind.
//!
//! # Ranking
//!
//! Points (win 3, draw 1), then goal difference, then goals scored, all
//! descending; remaining ties are broken by team ID for a stable order.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Group, Match, MatchResult, MatchStatus, Round, Standing, Team, Timestamp};

/// Completion summary over a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleProgress {
    pub total_matches: usize,
    /// Matches whose status is completed.
    pub completed_matches: usize,
    pub upcoming_matches: usize,
    /// Completed share in percent, `0.0` for an empty schedule.
    pub progress_percent: f64,
}

/// Returns a copy of `rounds` with the result recorded on the given match.
///
/// The match is marked completed. Returns `None` if no match has that ID.
pub fn record_match_result(
    rounds: &[Round],
    match_id: &str,
    result: MatchResult,
) -> Option<Vec<Round>> {
    let position = rounds.iter().enumerate().find_map(|(r, round)| {
        round
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .map(|k| (r, k))
    })?;

    let mut updated = rounds.to_vec();
    let (r, k) = position;
    let played = updated[r].matches[k].clone().with_result(result);
    updated[r].matches[k] = played;
    debug!("Recorded result for match {match_id}");
    Some(updated)
}

/// Returns a copy of `rounds` with the given match moved and/or relocated.
///
/// `None` leaves the corresponding field untouched. The owning round's start
/// and end dates are re-derived from its matches afterwards. Returns `None`
/// if no match has that ID.
pub fn update_match(
    rounds: &[Round],
    match_id: &str,
    scheduled_date: Option<Timestamp>,
    location: Option<String>,
) -> Option<Vec<Round>> {
    let position = rounds.iter().enumerate().find_map(|(r, round)| {
        round
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .map(|k| (r, k))
    })?;

    let mut updated = rounds.to_vec();
    let (r, k) = position;
    let mut matches = updated[r].matches.clone();
    let mut target = matches[k].clone();
    if let Some(date) = scheduled_date {
        target = target.with_schedule(date);
    }
    if let Some(location) = location {
        target = target.with_location(location);
    }
    matches[k] = target;

    let fallback = updated[r].start_date;
    updated[r] = updated[r].clone().with_matches(matches, fallback);
    debug!("Updated match {match_id}");
    Some(updated)
}

/// Counts total, completed and upcoming matches across `rounds`.
pub fn schedule_progress(rounds: &[Round]) -> ScheduleProgress {
    let total_matches: usize = rounds.iter().map(Round::match_count).sum();
    let completed_matches = rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .filter(|m| m.status == MatchStatus::Completed)
        .count();
    let progress_percent = if total_matches > 0 {
        completed_matches as f64 / total_matches as f64 * 100.0
    } else {
        0.0
    };

    ScheduleProgress {
        total_matches,
        completed_matches,
        upcoming_matches: total_matches - completed_matches,
        progress_percent,
    }
}

/// Scores of a completed, non-bye match as `(home, away, home_score, away_score)`.
///
/// A team paired against itself never counts.
fn completed_score(m: &Match) -> Option<(&str, &str, u32, u32)> {
    if !m.is_completed() {
        return None;
    }
    let result = m.result.as_ref()?;
    let home = m.home_team_id.as_deref()?;
    let away = m.away_team_id.as_deref()?;
    if home == away {
        return None;
    }
    Some((home, away, result.home_score, result.away_score))
}

/// Computes the ranked table for a group from the completed matches in `rounds`.
///
/// Only matches between two members of the group count. Every member gets a
/// row, played or not.
pub fn compute_standings(group: &Group, rounds: &[Round]) -> Vec<Standing> {
    let mut rows: HashMap<&str, Standing> = group
        .team_ids
        .iter()
        .map(|id| (id.as_str(), Standing::new(id.as_str())))
        .collect();

    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        let Some((home, away, home_score, away_score)) = completed_score(m) else {
            continue;
        };
        if !rows.contains_key(home) || !rows.contains_key(away) {
            continue;
        }
        if let Some(row) = rows.remove(home) {
            rows.insert(home, row.with_result(home_score, away_score));
        }
        if let Some(row) = rows.remove(away) {
            rows.insert(away, row.with_result(away_score, home_score));
        }
    }

    let mut table: Vec<Standing> = rows.into_values().collect();
    rank_standings(&mut table);
    table
}

/// Returns the group with its standings recomputed from `rounds`.
pub fn refresh_group(group: &Group, rounds: &[Round]) -> Group {
    group.clone().with_standings(compute_standings(group, rounds))
}

/// Sorts a table into ranking order.
pub fn rank_standings(table: &mut [Standing]) {
    table.sort_by(compare_standings);
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Returns copies of `teams` with every completed result in `rounds` folded
/// into their statistics.
///
/// Matches against teams not in `teams` still count for the listed side.
pub fn apply_results_to_teams(teams: &[Team], rounds: &[Round]) -> Vec<Team> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, team) in teams.iter().enumerate() {
        index.entry(team.id.as_str()).or_insert(i);
    }

    let mut updated = teams.to_vec();
    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        let Some((home, away, home_score, away_score)) = completed_score(m) else {
            continue;
        };
        for (team_id, goals_for, goals_against) in
            [(home, home_score, away_score), (away, away_score, home_score)]
        {
            if let Some(&i) = index.get(team_id) {
                let team = updated[i].clone();
                updated[i] = team.with_result_applied(goals_for, goals_against);
            }
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::assign_teams_to_groups;
    use crate::models::{MatchStatus, Timestamp};
    use crate::scheduler::{generate_round_robin_schedule, ScheduleConfig};
    use chrono::{TimeZone, Utc};

    fn epoch() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn round_with(results: &[(&str, &str, u32, u32)]) -> Round {
        let matches = results
            .iter()
            .enumerate()
            .map(|(i, &(home, away, hs, as_))| {
                Match::new(format!("m{i}"), "r1", 1)
                    .with_teams(home, away)
                    .with_result(MatchResult::new(hs, as_, epoch()))
            })
            .collect();
        Round::new("r1", "t1", 1, matches, epoch())
    }

    #[test]
    fn test_record_match_result() {
        let config = ScheduleConfig::new("t1", ["a", "b", "c", "d"]).with_start_date(epoch());
        let rounds = generate_round_robin_schedule(&config).unwrap().rounds;
        let target = rounds[1].matches[1].id.clone();

        let updated =
            record_match_result(&rounds, &target, MatchResult::new(2, 2, epoch())).unwrap();

        let played = updated[1].find_match(&target).unwrap();
        assert_eq!(played.status, MatchStatus::Completed);
        assert_eq!(played.result.as_ref().unwrap().home_score, 2);
        assert_eq!(rounds[1].find_match(&target).unwrap().status, MatchStatus::Scheduled);
        assert!(record_match_result(&rounds, "missing", MatchResult::new(0, 0, epoch())).is_none());
    }

    #[test]
    fn test_compute_standings_ranking() {
        let group = assign_teams_to_groups(&["a", "b", "c"], 1, "t1").remove(0);
        let rounds = vec![round_with(&[("a", "b", 1, 0), ("b", "c", 3, 0), ("c", "a", 1, 1)])];

        let table = compute_standings(&group, &rounds);
        let order: Vec<&str> = table.iter().map(|s| s.team_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);

        assert_eq!(table[0].points, 4);
        assert_eq!(table[0].played, 2);
        assert_eq!(table[1].points, 3);
        assert_eq!(table[1].goal_difference, 2);
        assert_eq!(table[2].points, 1);
        assert_eq!(table[2].goal_difference, -3);
    }

    #[test]
    fn test_standings_ignore_unplayed_and_foreign_matches() {
        let group = assign_teams_to_groups(&["a", "b"], 1, "t1").remove(0);
        let mut round = round_with(&[("a", "x", 5, 0)]);
        round
            .matches
            .push(Match::new("m9", "r1", 1).with_teams("a", "b"));

        let table = compute_standings(&group, &[round]);
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(Standing::is_zeroed));
        assert_eq!(table[0].team_id, "a");
    }

    #[test]
    fn test_cancelled_match_with_score_is_ignored() {
        let group = assign_teams_to_groups(&["a", "b"], 1, "t1").remove(0);
        let mut round = round_with(&[("a", "b", 1, 0)]);
        round.matches[0].status = MatchStatus::Cancelled;

        let table = compute_standings(&group, &[round]);
        assert!(table.iter().all(Standing::is_zeroed));
    }

    #[test]
    fn test_refresh_group() {
        let group = assign_teams_to_groups(&["a", "b"], 1, "t1").remove(0);
        let refreshed = refresh_group(&group, &[round_with(&[("b", "a", 2, 1)])]);

        assert_eq!(refreshed.id, group.id);
        assert_eq!(refreshed.standings[0].team_id, "b");
        assert_eq!(refreshed.standing_for("a").unwrap().losses, 1);
        assert!(group.standings.iter().all(Standing::is_zeroed));
    }

    #[test]
    fn test_goals_for_breaks_tie() {
        let mut table = vec![
            Standing::new("a").with_result(1, 0),
            Standing::new("b").with_result(3, 2),
        ];
        rank_standings(&mut table);
        assert_eq!(table[0].team_id, "b");
    }

    #[test]
    fn test_apply_results_to_teams() {
        let teams = vec![Team::new("a", "A"), Team::new("b", "B")];
        let rounds = vec![round_with(&[("a", "b", 2, 0), ("b", "a", 1, 1)])];

        let updated = apply_results_to_teams(&teams, &rounds);
        let a = updated[0].stats.unwrap();
        let b = updated[1].stats.unwrap();

        assert_eq!((a.wins, a.draws, a.losses, a.points), (1, 1, 0, 4));
        assert_eq!((b.wins, b.draws, b.losses, b.points), (0, 1, 1, 1));
        assert_eq!(a.goals_for, 3);
        assert_eq!(b.goals_against, 3);
        assert_eq!(teams[0].stats.unwrap().played(), 0);
    }

    #[test]
    fn test_self_pairing_is_not_counted() {
        let group = assign_teams_to_groups(&["a", "b"], 1, "t1").remove(0);
        let rounds = vec![round_with(&[("a", "a", 2, 1), ("a", "b", 1, 0)])];

        let table = compute_standings(&group, &rounds);
        let a = table.iter().find(|s| s.team_id == "a").unwrap();
        assert_eq!(a.played, 1);
        assert_eq!(a.points, 3);
        assert_eq!(a.goals_for, 1);

        let teams = apply_results_to_teams(&[Team::new("a", "A")], &rounds);
        assert_eq!(teams[0].stats.unwrap().played(), 1);
    }

    #[test]
    fn test_schedule_progress() {
        let empty = schedule_progress(&[]);
        assert_eq!(empty.total_matches, 0);
        assert_eq!(empty.upcoming_matches, 0);
        assert_eq!(empty.progress_percent, 0.0);

        let config = ScheduleConfig::new("t1", ["a", "b", "c", "d"]).with_start_date(epoch());
        let rounds = generate_round_robin_schedule(&config).unwrap().rounds;
        let first = rounds[0].matches[0].id.clone();
        let second = rounds[2].matches[1].id.clone();
        let rounds = record_match_result(&rounds, &first, MatchResult::new(1, 0, epoch())).unwrap();
        let mut rounds =
            record_match_result(&rounds, &second, MatchResult::new(0, 0, epoch())).unwrap();
        rounds[1].matches[0].status = MatchStatus::InProgress;

        let progress = schedule_progress(&rounds);
        assert_eq!(progress.total_matches, 6);
        assert_eq!(progress.completed_matches, 2);
        assert_eq!(progress.upcoming_matches, 4);
        assert!((progress.progress_percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_match_rederives_round_dates() {
        let config = ScheduleConfig::new("t1", ["a", "b", "c", "d"]).with_start_date(epoch());
        let rounds = generate_round_robin_schedule(&config).unwrap().rounds;
        let first = rounds[1].matches[0].id.clone();
        let last = rounds[1].matches[1].id.clone();
        let early = Utc.with_ymd_and_hms(2023, 12, 30, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap();

        let updated = update_match(&rounds, &first, Some(early), Some("Arena".into())).unwrap();
        let updated = update_match(&updated, &last, Some(late), None).unwrap();

        let moved = updated[1].find_match(&first).unwrap();
        assert_eq!(moved.scheduled_date, Some(early));
        assert_eq!(moved.location.as_deref(), Some("Arena"));
        let kept = updated[1].find_match(&last).unwrap();
        assert_eq!(kept.location, rounds[1].matches[1].location);
        assert_eq!(updated[1].start_date, early);
        assert_eq!(updated[1].end_date, late);

        assert_ne!(rounds[1].find_match(&first).unwrap().scheduled_date, Some(early));
        assert_eq!(updated[0], rounds[0]);
        assert_eq!(updated[2], rounds[2]);
        assert!(update_match(&rounds, "missing", Some(early), None).is_none());
    }

    #[test]
    fn test_update_match_without_changes_is_identity() {
        let config = ScheduleConfig::new("t1", ["a", "b"]).with_start_date(epoch());
        let rounds = generate_round_robin_schedule(&config).unwrap().rounds;
        let id = rounds[0].matches[0].id.clone();

        assert_eq!(update_match(&rounds, &id, None, None).unwrap(), rounds);
    }
}
