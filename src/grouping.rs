//! Group partitioning for group-stage tournaments.
//!
//! Teams are split into contiguous, evenly sized chunks in input order.
//! When the split is uneven the leading groups take one extra team each,
//! so a group is never smaller than any group after it.

use log::debug;

use crate::models::Group;

/// Distributes teams into `number_of_groups` named groups.
///
/// Group `i` receives `n / g` teams, plus one when `i < n % g`. Groups are
/// named "Group A", "Group B", ... and start with a zeroed standings row
/// per member. Returns an empty list when there are no teams or no groups.
///
/// # Example
///
/// ```
/// use u_tournament::grouping::assign_teams_to_groups;
///
/// let teams = ["a", "b", "c", "d", "e", "f", "g"];
/// let groups = assign_teams_to_groups(&teams, 3, "cup");
///
/// let sizes: Vec<usize> = groups.iter().map(|g| g.size()).collect();
/// assert_eq!(sizes, vec![3, 2, 2]);
/// assert_eq!(groups[2].name, "Group C");
/// ```
pub fn assign_teams_to_groups<S: AsRef<str>>(
    teams: &[S],
    number_of_groups: usize,
    tournament_id: &str,
) -> Vec<Group> {
    if number_of_groups == 0 || teams.is_empty() {
        return Vec::new();
    }

    let base_size = teams.len() / number_of_groups;
    let remainder = teams.len() % number_of_groups;
    let mut groups = Vec::with_capacity(number_of_groups);
    let mut offset = 0;

    for index in 0..number_of_groups {
        let size = base_size + usize::from(index < remainder);
        let team_ids = teams[offset..offset + size]
            .iter()
            .map(|t| t.as_ref().to_string())
            .collect();
        let letter = group_letter(index);

        groups.push(Group::new(
            format!("{tournament_id}-group-{}", letter.to_lowercase()),
            tournament_id,
            format!("Group {letter}"),
            team_ids,
        ));
        offset += size;
    }

    debug!(
        "Partitioned {} team(s) into {} group(s) for tournament {}",
        teams.len(),
        number_of_groups,
        tournament_id
    );
    groups
}

/// Spreadsheet-style letters: 0 → "A", 25 → "Z", 26 → "AA", 27 → "AB".
pub fn group_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}
