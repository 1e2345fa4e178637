// src/official.rs

//! The published official count: fetch, parse, cache.

use std::error::Error;

use crate::config::consts::OFFICIAL_URL;
use crate::config::options::FetchOptions;
use crate::core::net;
use crate::specs::brownlow;
use crate::store;

/// The official vote count, in page row order (highest totals first).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OfficialVotes {
    rows: Vec<(String, u32)>,
}

impl OfficialVotes {
    pub fn from_rows(rows: Vec<(String, u32)>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[(String, u32)] {
        &self.rows
    }

    /// Votes for one player, under the name the page uses.
    pub fn get(&self, player: &str) -> Option<u32> {
        self.rows.iter().find(|(p, _)| p == player).map(|&(_, v)| v)
    }

    pub fn contains(&self, player: &str) -> bool {
        self.get(player).is_some()
    }

    /// The first `n` rows of the published standing.
    pub fn top(&self, n: usize) -> &[(String, u32)] {
        &self.rows[..self.rows.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where the official count comes from. The live page is one source;
/// tests use a canned one.
pub trait VoteSource {
    fn fetch(&self) -> Result<OfficialVotes, Box<dyn Error>>;
}

/// The live footywire count page.
pub struct Footywire {
    pub fetch: FetchOptions,
}

impl VoteSource for Footywire {
    fn fetch(&self) -> Result<OfficialVotes, Box<dyn Error>> {
        logf!("Official: GET {OFFICIAL_URL}");
        let doc = net::http_get(OFFICIAL_URL, &self.fetch)?;
        brownlow::parse_doc(&doc)
    }
}

/// Cache-or-fetch. `refresh` skips the cache; a fresh fetch is cached
/// best-effort for next time.
pub fn load(source: &dyn VoteSource, refresh: bool) -> Result<OfficialVotes, Box<dyn Error>> {
    if !refresh {
        match store::load_official() {
            Ok(Some(votes)) if !votes.is_empty() => {
                logd!("Official: using cached count ({} players)", votes.len());
                return Ok(votes);
            }
            Ok(_) => {}
            Err(e) => logd!("Official: cache unreadable: {e}"),
        }
    }

    let votes = source.fetch()?;
    logf!("Official: fetched {} players", votes.len());
    match store::save_official(&votes) {
        Ok(path) => logd!("Official: cached at {}", path.display()),
        Err(e) => loge!("Official: cache write failed: {e}"),
    }
    Ok(votes)
}
