// src/specs/ratings.rs
//
// One round of the wheeloratings match-stats export.
//
// Shape: a header row with a `Player` column, then one 46-row block per
// match, rows ordered best rating first. Within a block the top three
// named rows earn 3-2-1. Rank is positional, so rows with an empty
// player cell (separators, blank stat lines) keep their slot in the
// block but never earn votes.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::MATCH_ROWS;
use crate::csv::{column_index, parse_rows};

/// One named row of a round table, with its 1-based rank inside its
/// match block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedRow {
    pub player: String,
    pub rank: usize,
}

/// Path of one round's export:
/// `<data_dir>/<season>round_data/afl-match-stats-<season>-Round<N>-All.csv`
pub fn round_file(data_dir: &Path, season: u16, round: usize) -> PathBuf {
    data_dir
        .join(format!("{season}round_data"))
        .join(format!("afl-match-stats-{season}-Round{round}-All.csv"))
}

/// Read and rank one round's table. A missing file keeps its io kind so
/// callers can tell NotFound from a malformed table.
pub fn load_round(path: &Path) -> Result<Vec<RankedRow>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    parse_table(&text)
}

/// Rank the rows of one round table.
pub fn parse_table(text: &str) -> Result<Vec<RankedRow>, Box<dyn Error>> {
    let mut rows = parse_rows(text, ',');
    if rows.is_empty() {
        return Err("empty ratings table".into());
    }

    let header = rows.remove(0);
    let pcol = column_index(&header, "Player")
        .ok_or("ratings table has no Player column")?;

    let mut out = Vec::with_capacity(rows.len());
    for (ix, row) in rows.iter().enumerate() {
        let rank = ix % MATCH_ROWS + 1;
        let player = row.get(pcol).map(|s| s.trim()).unwrap_or("");
        if player.is_empty() {
            continue;
        }
        out.push(RankedRow { player: s!(player), rank });
    }
    Ok(out)
}
