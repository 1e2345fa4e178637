// src/report.rs

//! Output shaping: plain lines for the CLI, and the headers+rows table
//! the GUI, clipboard copy and file export all share.

use crate::charts::Comparison;
use crate::official::OfficialVotes;
use crate::season::Season;

/// `player: votes` lines for the top of the official count.
pub fn official_lines(official: &OfficialVotes, top: usize) -> Vec<String> {
    official
        .top(top)
        .iter()
        .map(|(p, v)| format!("{p}: {v}"))
        .collect()
}

/// One line per player in standings order: name, series, total.
pub fn tally_lines(season: &Season) -> Vec<String> {
    let mut out = Vec::with_capacity(season.totals.len());
    for (player, total) in season.standings() {
        let votes = &season.by_round[&player];
        let series: Vec<String> = votes.iter().map(|v| v.to_string()).collect();
        out.push(format!("{player}: [{}] - total {total}", series.join(" ")));
    }
    out
}

/// `player: official N / rating M` lines.
pub fn comparison_lines(rows: &[Comparison]) -> Vec<String> {
    rows.iter()
        .map(|c| format!("{}: official {} / rating {}", c.player, c.official, c.rating))
        .collect()
}

/// The tally as a table: `Player, R1..RN, Total`, standings order.
/// Series length always matches `season.rounds`.
pub fn tally_dataset(season: &Season) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = Vec::with_capacity(season.rounds + 2);
    headers.push(s!("Player"));
    for r in 1..=season.rounds {
        headers.push(format!("R{r}"));
    }
    headers.push(s!("Total"));

    let mut rows = Vec::with_capacity(season.totals.len());
    for (player, total) in season.standings() {
        let votes = &season.by_round[&player];
        let mut row = Vec::with_capacity(season.rounds + 2);
        row.push(player.clone());
        row.extend(votes.iter().map(|v| v.to_string()));
        row.push(total.to_string());
        rows.push(row);
    }
    (headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::votes::RoundVotes;

    fn season() -> Season {
        let r1: RoundVotes = [(s!("A"), 3u8), (s!("B"), 0u8)].into_iter().collect();
        let r2: RoundVotes = [(s!("B"), 2u8)].into_iter().collect();
        Season::from_rounds(&[r1, r2])
    }

    #[test]
    fn dataset_shape_and_order() {
        let (headers, rows) = tally_dataset(&season());
        assert_eq!(headers, vec!["Player", "R1", "R2", "Total"]);
        assert_eq!(rows.len(), 2);
        // A: 3 total, B: 2 total
        assert_eq!(rows[0], vec!["A", "3", "0", "3"]);
        assert_eq!(rows[1], vec!["B", "0", "2", "2"]);
    }

    #[test]
    fn line_formats() {
        let lines = tally_lines(&season());
        assert_eq!(lines[0], "A: [3 0] - total 3");

        let official = OfficialVotes::from_rows(vec![(s!("A"), 9), (s!("B"), 1)]);
        assert_eq!(official_lines(&official, 1), vec!["A: 9"]);

        let cmp = vec![Comparison { player: s!("A"), official: 9, rating: 3 }];
        assert_eq!(comparison_lines(&cmp), vec!["A: official 9 / rating 3"]);
    }
}
