//! End-to-end scheduling scenarios: generate, partition, validate, reschedule,
//! record results.

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use u_tournament::grouping::assign_teams_to_groups;
use u_tournament::models::{MatchResult, MatchStatus, Round, Team, Timestamp};
use u_tournament::scheduler::{
    generate_round_robin_schedule, reschedule_matches, ScheduleConfig, ScheduleOutput,
    ROUND_GAP_MINUTES,
};
use u_tournament::standings::{apply_results_to_teams, compute_standings, record_match_result};
use u_tournament::validation::{audit_schedule, validate_schedule};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn roster(n: usize) -> Vec<Team> {
    (1..=n)
        .map(|i| Team::new(format!("team-{i}"), format!("Team {i}")))
        .collect()
}

fn start() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

fn schedule(teams: usize, cycles: u32) -> ScheduleOutput {
    let config = ScheduleConfig::new("tournament-1", &roster(teams))
        .with_number_of_rounds(cycles)
        .with_start_date(start());
    generate_round_robin_schedule(&config).unwrap()
}

fn pair_counts(rounds: &[Round]) -> HashMap<(String, String), usize> {
    let mut counts = HashMap::new();
    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        let (a, b) = m.pairing_key().unwrap();
        *counts.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
    }
    counts
}

#[test]
fn four_teams_one_cycle() {
    init_logger();
    let output = schedule(4, 1);

    assert_eq!(output.rounds.len(), 3);
    assert!(output.rounds.iter().all(|r| r.matches.len() == 2));
    let counts = pair_counts(&output.rounds);
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&c| c == 1));
    assert!(validate_schedule(&output.rounds));
    assert!(audit_schedule(&output.rounds).is_ok());
}

#[test]
fn three_teams_one_cycle() {
    init_logger();
    let output = schedule(3, 1);

    assert_eq!(output.rounds.len(), 3);
    assert!(output.rounds.iter().all(|r| r.matches.len() == 1));
    assert_eq!(pair_counts(&output.rounds).len(), 3);
    for m in output.matches() {
        assert!(!m.is_bye());
        assert_ne!(m.home_team_id.as_deref(), Some("BYE"));
        assert_ne!(m.away_team_id.as_deref(), Some("BYE"));
    }
}

#[test]
fn two_teams_one_cycle() {
    let output = schedule(2, 1);

    assert_eq!(output.rounds.len(), 1);
    assert_eq!(output.rounds[0].matches.len(), 1);
    let m = &output.rounds[0].matches[0];
    assert_eq!(m.home_team_id.as_deref(), Some("team-1"));
    assert_eq!(m.away_team_id.as_deref(), Some("team-2"));
}

#[test]
fn four_teams_two_cycles() {
    let output = schedule(4, 2);

    assert_eq!(output.rounds.len(), 6);
    assert_eq!(output.match_count(), 12);
    let counts = pair_counts(&output.rounds);
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&c| c == 2));
}

#[test]
fn team_named_bye_is_a_real_team() {
    let config = ScheduleConfig::new("t", ["BYE", "a", "b"]).with_start_date(start());
    let output = generate_round_robin_schedule(&config).unwrap();

    assert_eq!(output.match_count(), 3);
    assert_eq!(output.matches_for_team("BYE").count(), 2);
}

#[test]
fn eight_teams_two_groups() {
    let groups = assign_teams_to_groups(&roster(8), 2, "tournament-1");

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Group A");
    assert_eq!(groups[1].name, "Group B");
    for group in &groups {
        assert_eq!(group.team_ids.len(), 4);
        for id in &group.team_ids {
            let row = group.standing_for(id).unwrap();
            assert_eq!(row.played, 0);
            assert_eq!(row.wins, 0);
            assert_eq!(row.points, 0);
            assert_eq!(row.goal_difference, 0);
        }
    }
}

#[test]
fn seven_teams_three_groups() {
    let groups = assign_teams_to_groups(&roster(7), 3, "tournament-1");
    let sizes: Vec<usize> = groups.iter().map(|g| g.team_ids.len()).collect();
    assert_eq!(sizes, vec![3, 2, 2]);
    assert_eq!(sizes.iter().sum::<usize>(), 7);
}

#[test]
fn round_boundaries_include_gap() {
    let output = schedule(6, 1);
    let step = Duration::minutes(90);
    let gap = Duration::minutes(ROUND_GAP_MINUTES);

    for pair in output.rounds.windows(2) {
        assert!(pair[1].start_date - pair[0].end_date >= gap);
        assert_eq!(pair[1].start_date - pair[0].end_date, step + gap);
    }
}

#[test]
fn reschedule_after_generation() {
    init_logger();
    let output = schedule(5, 2);
    let new_start = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
    let moved = reschedule_matches(&output.rounds, new_start, 90).unwrap();

    assert_eq!(moved.len(), output.rounds.len());
    assert_eq!(moved[0].matches[0].scheduled_date, Some(new_start));
    assert_eq!(pair_counts(&moved), pair_counts(&output.rounds));

    let dates: Vec<Timestamp> = moved
        .iter()
        .flat_map(|r| r.matches.iter())
        .map(|m| m.scheduled_date.unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[1] - w[0] == Duration::minutes(90)));
    assert!(validate_schedule(&moved));
}

#[test]
fn group_stage_with_results() {
    init_logger();
    let teams = roster(4);
    let config = ScheduleConfig::new("cup", &teams)
        .with_start_date(start())
        .with_groups(1);
    let output = generate_round_robin_schedule(&config).unwrap();
    let group = &output.groups[0];

    let mut rounds = output.rounds.clone();
    let ids: Vec<String> = output.matches().map(|m| m.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let score = MatchResult::new(i as u32 % 3, 1, start());
        rounds = record_match_result(&rounds, id, score).unwrap();
    }

    assert!(rounds.iter().all(Round::is_completed));
    assert!(rounds
        .iter()
        .flat_map(|r| r.matches.iter())
        .all(|m| m.status == MatchStatus::Completed));

    let table = compute_standings(group, &rounds);
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|row| row.played == 3));
    assert!(table.windows(2).all(|w| w[0].points >= w[1].points));

    let updated = apply_results_to_teams(&teams, &rounds);
    let total_points: u32 = updated.iter().map(|t| t.stats.unwrap().points).sum();
    let table_points: u32 = table.iter().map(|row| row.points).sum();
    assert_eq!(total_points, table_points);
}

#[test]
fn schedule_round_trips_through_json() {
    let output = schedule(4, 1);
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"status\":\"scheduled\""));
    assert!(json.contains("2024-01-01T10:00:00Z"));

    let parsed: ScheduleOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}
