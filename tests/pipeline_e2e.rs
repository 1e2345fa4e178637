// tests/pipeline_e2e.rs
//
// Drives the round loop over synthetic round files on disk: positional
// ranking, 3-2-1 votes per match block, season aggregation, and the
// chart series built from the result.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use alt_brownlow::charts;
use alt_brownlow::config::consts::MATCH_ROWS;
use alt_brownlow::config::options::CountOptions;
use alt_brownlow::official::{OfficialVotes, VoteSource};
use alt_brownlow::progress::NullProgress;
use alt_brownlow::runner;
use alt_brownlow::specs::ratings;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ab_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Write one synthetic round file: one 46-row block per entry, with the
/// named players on the top three rows and filler rows below them.
fn write_round(dir: &Path, season: u16, round: usize, blocks: &[[&str; 3]]) {
    let mut text = String::from("Player,Team,Rating\n");
    for (bi, top3) in blocks.iter().enumerate() {
        for ix in 0..MATCH_ROWS {
            let name = match ix {
                0 | 1 | 2 => top3[ix].to_string(),
                _ => format!("Filler {bi}-{ix}"),
            };
            text.push_str(&format!("{name},Club,{}\n", 100 - ix));
        }
    }
    let path = ratings::round_file(dir, season, round);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn opts(dir: PathBuf, rounds: usize) -> CountOptions {
    CountOptions {
        season: 2023,
        rounds,
        data_dir: dir,
        comparison: Vec::new(),
    }
}

#[test]
fn three_rounds_aggregate_per_block_votes() {
    let dir = tmp_dir("three_rounds");
    write_round(&dir, 2023, 1, &[["A", "B", "C"], ["D", "E", "F"]]);
    write_round(&dir, 2023, 2, &[["B", "A", "C"], ["D", "F", "E"]]);
    write_round(&dir, 2023, 3, &[["C", "B", "A"], ["E", "D", "F"]]);

    // Progress hooks are optional and must not disturb the tally.
    let season = runner::tally_season(&opts(dir, 3), Some(&mut NullProgress)).unwrap();

    assert_eq!(season.rounds, 3);
    // Series slot i is round i+1.
    assert_eq!(season.by_round["A"], vec![3, 2, 1]);
    assert_eq!(season.by_round["E"], vec![2, 1, 3]);
    assert_eq!(season.totals["A"], 6);
    assert_eq!(season.totals["B"], 7);
    assert_eq!(season.totals["C"], 5);

    // The second block of a round scores independently of the first.
    assert_eq!(season.totals["D"], 8);

    // Rows below rank 3 are in the tally with zero votes.
    assert_eq!(season.totals["Filler 0-3"], 0);

    // Each block hands out exactly 3+2+1: 2 blocks x 3 rounds.
    let total: u32 = season.totals.values().sum();
    assert_eq!(total, 36);

    let standings = season.standings();
    assert_eq!(standings[0], ("D".to_string(), 8));
    assert_eq!(standings[1], ("B".to_string(), 7));
    // Ties break by name.
    assert_eq!(standings[2], ("A".to_string(), 6));
    assert_eq!(standings[3], ("E".to_string(), 6));
}

#[test]
fn missing_round_file_keeps_not_found_kind() {
    let dir = tmp_dir("missing_round");
    write_round(&dir, 2023, 1, &[["A", "B", "C"]]);
    // Round 2 never written.
    let err = runner::tally_season(&opts(dir, 2), None).unwrap_err();

    let io_err = err.downcast_ref::<io::Error>().expect("io error expected");
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    // The message names the file that was missing.
    assert!(err.to_string().contains("Round2"));
}

struct CannedSource(Vec<(String, u32)>);

impl VoteSource for CannedSource {
    fn fetch(&self) -> Result<OfficialVotes, Box<dyn Error>> {
        Ok(OfficialVotes::from_rows(self.0.clone()))
    }
}

#[test]
fn comparison_built_from_a_source_and_the_tally() {
    let dir = tmp_dir("comparison");
    write_round(&dir, 2023, 1, &[["A", "B", "C"]]);
    let season = runner::tally_season(&opts(dir, 1), None).unwrap();

    let source = CannedSource(vec![("A".to_string(), 30), ("B".to_string(), 25)]);
    let official = source.fetch().unwrap();

    // Names the official count doesn't list are filtered, not plotted as holes.
    let names = charts::present_in_official(
        &official,
        &["A".to_string(), "C".to_string()],
    );
    assert_eq!(names, vec!["A".to_string()]);

    let rows = charts::comparison_rows(&official, &season.totals, &names).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player, "A");
    assert_eq!(rows[0].official, 30);
    assert_eq!(rows[0].rating, 3);
}

#[test]
fn progression_series_follows_the_tally() {
    let dir = tmp_dir("progression");
    write_round(&dir, 2023, 1, &[["A", "B", "C"]]);
    write_round(&dir, 2023, 2, &[["B", "C", "A"]]);

    let season = runner::tally_season(&opts(dir, 2), None).unwrap();

    let series =
        charts::progression_series(&season, &["A".to_string(), "C".to_string()]).unwrap();
    assert_eq!(series[0], ("A".to_string(), vec![3, 4]));
    assert_eq!(series[1], ("C".to_string(), vec![1, 3]));

    // Asking for a player with no tally entry is an error, not an empty line.
    let err = charts::progression_series(&season, &["Nobody".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Nobody"));
}
