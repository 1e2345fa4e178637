// src/store.rs

//! Local cache for the official count: `name,votes` lines under
//! `.store/`, page order preserved.

use std::{fs, io, path::PathBuf};

use crate::config::consts::{OFFICIAL_CACHE, STORE_DIR, STORE_SEP};
use crate::csv::{parse_rows, write_row};
use crate::official::OfficialVotes;

fn official_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(OFFICIAL_CACHE)
}

fn compose_official(votes: &OfficialVotes) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for (player, v) in votes.rows() {
        let _ = write_row(&mut buf, &[player.clone(), v.to_string()], STORE_SEP);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn parse_official(text: &str) -> Result<OfficialVotes, Box<dyn std::error::Error>> {
    let mut rows = Vec::new();
    for row in parse_rows(text, STORE_SEP) {
        if row.len() < 2 {
            return Err(format!("malformed cache row: {row:?}").into());
        }
        let votes: u32 = row[1].trim().parse()?;
        rows.push((row[0].clone(), votes));
    }
    Ok(OfficialVotes::from_rows(rows))
}

pub fn save_official(votes: &OfficialVotes) -> io::Result<PathBuf> {
    let path = official_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&path, compose_official(votes))?;
    Ok(path)
}

/// Read the cached official count. `Ok(None)` means no cache yet.
pub fn load_official() -> Result<Option<OfficialVotes>, Box<dyn std::error::Error>> {
    let path = official_path();
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)?;
    Ok(Some(parse_official(&text)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_format_roundtrips() {
        let votes = OfficialVotes::from_rows(vec![
            (s!("Lachie Neale"), 31),
            (s!("Tim O'Brien, Jr."), 4),
        ]);
        let text = compose_official(&votes);
        let back = parse_official(&text).unwrap();
        assert_eq!(back, votes);
    }

    #[test]
    fn malformed_cache_is_an_error() {
        assert!(parse_official("just-a-name\n").is_err());
        assert!(parse_official("name,notanumber\n").is_err());
    }
}
