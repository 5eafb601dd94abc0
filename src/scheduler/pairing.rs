//! Circle-method pairing generator.
//!
//! # Algorithm
//!
//! Positions `0..n` (n even) are laid out with position 0 fixed as the
//! anchor and positions `1..n` on a ring of size `m = n - 1`. In round `r`
//! the anchor meets position `n - 1 - r`; call its ring slot the pivot
//! `p = m - 1 - r`. The remaining positions are paired symmetrically
//! around the pivot: ring slots `p + k` and `p - k` (mod m) for
//! `k = 1..n/2`.
//!
//! Because `m` is odd, each round's pairs cover every ring slot exactly
//! once, and the pivot visits every slot once over `m` rounds, so every
//! unordered pair of positions meets in exactly one round.
//!
//! # Complexity
//! O(n) per round, O(n²) per cycle.

/// Home/away positions within the (even-sized) padded team list.
pub type Pairing = (usize, usize);

/// Pairings for one round of a single round-robin cycle.
///
/// `num_teams` is the padded, even team count and `round_index` is in
/// `0..num_teams - 1`. Returns `num_teams / 2` pairings, the first always
/// featuring the anchor at home. Returns an empty list when `num_teams`
/// is odd or below 2, or when `round_index` is out of range.
///
/// # Example
///
/// ```
/// use u_tournament::scheduler::round_pairings;
///
/// assert_eq!(round_pairings(4, 0), vec![(0, 3), (1, 2)]);
/// assert_eq!(round_pairings(4, 1), vec![(0, 2), (3, 1)]);
/// assert_eq!(round_pairings(4, 2), vec![(0, 1), (2, 3)]);
/// ```
pub fn round_pairings(num_teams: usize, round_index: usize) -> Vec<Pairing> {
    if num_teams < 2 || num_teams % 2 != 0 || round_index >= num_teams - 1 {
        return Vec::new();
    }

    let ring = num_teams - 1;
    let pivot = ring - 1 - round_index;
    let mut pairings = Vec::with_capacity(num_teams / 2);

    for slot in 0..num_teams / 2 {
        let (home, mut away) = if slot == 0 {
            (0, num_teams - 1 - round_index)
        } else {
            ((pivot + slot) % ring + 1, (pivot + ring - slot) % ring + 1)
        };
        if away == 0 {
            away = num_teams - 1;
        }
        pairings.push((home, away));
    }

    pairings
}

/// Pairings for every round of one full cycle.
pub fn cycle_pairings(num_teams: usize) -> Vec<Vec<Pairing>> {
    if num_teams < 2 {
        return Vec::new();
    }
    (0..num_teams - 1)
        .map(|round_index| round_pairings(num_teams, round_index))
        .collect()
}
