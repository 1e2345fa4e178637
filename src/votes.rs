// src/votes.rs

//! The vote rule: 3-2-1 to the top three ranked rows of each match block.

use std::collections::HashMap;

use crate::specs::ratings::RankedRow;

/// Player -> votes earned in one round. Every named row lands here,
/// zero-vote players included; a player appearing twice accumulates.
pub type RoundVotes = HashMap<String, u8>;

/// Votes for a 1-based rank within a match block.
pub fn for_rank(rank: usize) -> u8 {
    match rank {
        1 => 3,
        2 => 2,
        3 => 1,
        _ => 0,
    }
}

/// Tally one round's ranked rows into a vote mapping.
pub fn tally_round(rows: &[RankedRow]) -> RoundVotes {
    let mut out = RoundVotes::new();
    for row in rows {
        *out.entry(row.player.clone()).or_insert(0) += for_rank(row.rank);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::ratings::RankedRow;

    fn row(player: &str, rank: usize) -> RankedRow {
        RankedRow { player: s!(player), rank }
    }

    #[test]
    fn rank_maps_to_votes() {
        assert_eq!(for_rank(1), 3);
        assert_eq!(for_rank(2), 2);
        assert_eq!(for_rank(3), 1);
        assert_eq!(for_rank(4), 0);
        assert_eq!(for_rank(46), 0);
    }

    #[test]
    fn top_three_get_votes_rest_get_zero() {
        let rows = vec![row("A", 1), row("B", 2), row("C", 3), row("D", 4)];
        let tally = tally_round(&rows);
        assert_eq!(tally["A"], 3);
        assert_eq!(tally["B"], 2);
        assert_eq!(tally["C"], 1);
        assert_eq!(tally["D"], 0);
    }

    #[test]
    fn duplicate_names_accumulate() {
        // Same name topping two blocks of the round.
        let rows = vec![row("A", 1), row("B", 2), row("A", 1), row("C", 3)];
        let tally = tally_round(&rows);
        assert_eq!(tally["A"], 6);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn round_total_is_six_per_block() {
        // Two full podiums plus filler.
        let rows = vec![
            row("A", 1), row("B", 2), row("C", 3), row("D", 10),
            row("E", 1), row("F", 2), row("G", 3), row("H", 46),
        ];
        let sum: u32 = tally_round(&rows).values().map(|&v| u32::from(v)).sum();
        assert_eq!(sum, 12);
    }
}
