// src/runner.rs

//! Top-level runner: the official count plus the round-by-round tally.
//! CLI and GUI both drive this.

use std::error::Error;

use crate::{
    config::options::{AppOptions, CountOptions},
    official::{self, OfficialVotes, VoteSource},
    progress::Progress,
    season::Season,
    specs::ratings,
    votes,
};

/// Extract every round file and aggregate the season. Any unreadable
/// or malformed round ends the run.
pub fn tally_season(
    opts: &CountOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Season, Box<dyn Error>> {
    logf!(
        "Tally: season {} over {} rounds from {}",
        opts.season,
        opts.rounds,
        opts.data_dir.display()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.rounds);
    }

    let mut rounds = Vec::with_capacity(opts.rounds);
    for round in 1..=opts.rounds {
        let path = ratings::round_file(&opts.data_dir, opts.season, round);
        let ranked = ratings::load_round(&path)?;
        rounds.push(votes::tally_round(&ranked));
        if let Some(p) = progress.as_deref_mut() {
            p.round_done(round);
        }
    }

    let season = Season::from_rounds(&rounds);
    logf!("Tally: {} rounds, {} players", season.rounds, season.totals.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(season)
}

/// Full pipeline: official count (cache-or-fetch), then the tally.
pub fn run(
    opts: &AppOptions,
    source: &dyn VoteSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(OfficialVotes, Season), Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Loading official count…");
    }
    let official = official::load(source, opts.fetch.refresh)?;
    let season = tally_season(&opts.count, progress)?;
    Ok((official, season))
}
