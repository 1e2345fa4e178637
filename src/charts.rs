// src/charts.rs

//! Pure series builders behind the two charts. Lookup failures are
//! errors here, so callers surface them instead of plotting a hole.

use std::error::Error;

use crate::official::OfficialVotes;
use crate::season::{self, Season, Totals};

/// Cumulative vote progression for each named player, in list order.
pub fn progression_series(
    season: &Season,
    players: &[String],
) -> Result<Vec<(String, Vec<u32>)>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(players.len());
    for player in players {
        let votes = season
            .by_round
            .get(player)
            .ok_or_else(|| format!("no rating votes recorded for {player}"))?;
        out.push((player.clone(), season::cumulative(votes)));
    }
    Ok(out)
}

/// One grouped-chart entry: the official count next to the rating count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub player: String,
    pub official: u32,
    pub rating: u32,
}

/// Build comparison entries for the named players. A name missing from
/// either side is an error.
pub fn comparison_rows(
    official: &OfficialVotes,
    totals: &Totals,
    players: &[String],
) -> Result<Vec<Comparison>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(players.len());
    for player in players {
        let official_votes = official
            .get(player)
            .ok_or_else(|| format!("{player} is not in the official count"))?;
        let rating = *totals
            .get(player)
            .ok_or_else(|| format!("no rating votes recorded for {player}"))?;
        out.push(Comparison { player: player.clone(), official: official_votes, rating });
    }
    Ok(out)
}

/// Pre-filter for the comparison: keep only the names the official count
/// actually lists. Spellings drift between sources.
pub fn present_in_official(official: &OfficialVotes, players: &[String]) -> Vec<String> {
    let out: Vec<String> = players
        .iter()
        .filter(|p| official.contains(p))
        .cloned()
        .collect();
    if out.len() < players.len() {
        logd!(
            "Charts: {} comparison name(s) not in the official count",
            players.len() - out.len()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::RoundVotes;

    fn season() -> Season {
        let r1: RoundVotes = [(s!("A"), 3u8), (s!("B"), 2u8)].into_iter().collect();
        let r2: RoundVotes = [(s!("A"), 0u8), (s!("B"), 3u8)].into_iter().collect();
        Season::from_rounds(&[r1, r2])
    }

    fn official() -> OfficialVotes {
        OfficialVotes::from_rows(vec![(s!("A"), 20), (s!("C"), 15)])
    }

    #[test]
    fn progression_is_cumulative_per_player() {
        let series = progression_series(&season(), &[s!("B"), s!("A")]).unwrap();
        assert_eq!(series[0], (s!("B"), vec![2, 5]));
        assert_eq!(series[1], (s!("A"), vec![3, 3]));
    }

    #[test]
    fn progression_unknown_player_is_an_error() {
        let err = progression_series(&season(), &[s!("Nobody")]).unwrap_err();
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn comparison_pairs_both_counts() {
        let rows = comparison_rows(&official(), &season().totals, &[s!("A")]).unwrap();
        assert_eq!(rows, vec![Comparison { player: s!("A"), official: 20, rating: 3 }]);
    }

    #[test]
    fn comparison_errors_when_a_side_is_missing() {
        // B is in the tally but not the official count.
        let err = comparison_rows(&official(), &season().totals, &[s!("B")]).unwrap_err();
        assert!(err.to_string().contains("official"));
        // C is official but never earned a rating vote.
        let err = comparison_rows(&official(), &season().totals, &[s!("C")]).unwrap_err();
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn present_in_official_filters_unknown_names() {
        let names = vec![s!("A"), s!("B"), s!("C")];
        assert_eq!(present_in_official(&official(), &names), vec![s!("A"), s!("C")]);
    }
}
