// src/season.rs

//! Aggregation: ordered per-round vote mappings into season series
//! and totals.

use std::collections::HashMap;

use crate::votes::RoundVotes;

/// Player -> votes per round, one slot per round of the season.
pub type VotesByRound = HashMap<String, Vec<u8>>;

/// Player -> season total.
pub type Totals = HashMap<String, u32>;

/// One computed season. `totals` and `by_round` always carry the same
/// player set; every series has `rounds` entries.
#[derive(Debug)]
pub struct Season {
    pub rounds: usize,
    pub by_round: VotesByRound,
    pub totals: Totals,
}

impl Season {
    pub fn from_rounds(rounds: &[RoundVotes]) -> Self {
        let by_round = by_round(rounds);
        let totals = totals(&by_round);
        Season { rounds: rounds.len(), by_round, totals }
    }

    /// Players ordered by total votes descending; name breaks ties.
    pub fn standings(&self) -> Vec<(String, u32)> {
        let mut out: Vec<(String, u32)> =
            self.totals.iter().map(|(p, &t)| (p.clone(), t)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }
}

/// Reshape round mappings into per-player series. A player joins on
/// first appearance with the full season zero-filled, so late debuts
/// and missed rounds read as 0.
pub fn by_round(rounds: &[RoundVotes]) -> VotesByRound {
    let len = rounds.len();
    let mut out = VotesByRound::new();
    for (ix, round) in rounds.iter().enumerate() {
        for (player, &v) in round {
            out.entry(player.clone()).or_insert_with(|| vec![0; len])[ix] = v;
        }
    }
    out
}

/// Sum each player's series.
pub fn totals(by_round: &VotesByRound) -> Totals {
    by_round
        .iter()
        .map(|(p, vs)| (p.clone(), vs.iter().map(|&v| u32::from(v)).sum()))
        .collect()
}

/// Running cumulative sum of a vote series.
pub fn cumulative(votes: &[u8]) -> Vec<u32> {
    let mut sum = 0u32;
    votes
        .iter()
        .map(|&v| {
            sum += u32::from(v);
            sum
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::RoundVotes;

    fn round(entries: &[(&str, u8)]) -> RoundVotes {
        entries.iter().map(|(p, v)| (s!(*p), *v)).collect()
    }

    #[test]
    fn series_are_zero_filled_for_missed_rounds() {
        let rounds = vec![
            round(&[("A", 3), ("B", 2)]),
            round(&[("B", 3)]),
            round(&[("A", 1), ("C", 3)]),
        ];
        let by = by_round(&rounds);
        assert_eq!(by["A"], vec![3, 0, 1]);
        assert_eq!(by["B"], vec![2, 3, 0]);
        assert_eq!(by["C"], vec![0, 0, 3]);
    }

    #[test]
    fn totals_match_series_sums() {
        let rounds = vec![round(&[("A", 3), ("B", 0)]), round(&[("A", 2)])];
        let season = Season::from_rounds(&rounds);
        assert_eq!(season.totals["A"], 5);
        assert_eq!(season.totals["B"], 0);
        for (player, votes) in &season.by_round {
            let sum: u32 = votes.iter().map(|&v| u32::from(v)).sum();
            assert_eq!(season.totals[player], sum);
        }
    }

    #[test]
    fn cumulative_running_sum() {
        assert_eq!(cumulative(&[1, 0, 2]), vec![1, 1, 3]);
        assert_eq!(cumulative(&[]), Vec::<u32>::new());
    }

    #[test]
    fn standings_order_total_then_name() {
        let rounds = vec![round(&[("B", 3), ("A", 3), ("C", 2)])];
        let season = Season::from_rounds(&rounds);
        let standings = season.standings();
        let names: Vec<&str> = standings.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
