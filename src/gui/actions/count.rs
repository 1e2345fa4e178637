// src/gui/actions/count.rs
use crate::{
    config::consts::WATCH_DEFAULT,
    gui::app::App,
    gui::progress::GuiProgress,
    official::Footywire,
    report, runner,
};

pub fn count(app: &mut App) {
    if app.running {
        return;
    }
    app.running = true;

    let opts = app.state.options.clone();
    logf!(
        "Count: Begin season={} rounds={} refresh={}",
        opts.count.season,
        opts.count.rounds,
        opts.fetch.refresh
    );

    let source = Footywire { fetch: opts.fetch.clone() };
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the whole pipeline runs ←
    match runner::run(&opts, &source, Some(&mut prog)) {
        Ok((official, season)) => {
            logf!(
                "Count: OK official={} players, tally={} players over {} rounds",
                official.len(),
                season.totals.len(),
                season.rounds
            );

            let rounds = season.rounds;
            app.standings = season.standings();
            let (headers, rows) = report::tally_dataset(&season);
            app.headers = headers;
            app.rows = rows;

            // Keep the watchlist to players that exist this season;
            // start it at the top of the standings when empty.
            app.state
                .gui
                .selected_players
                .retain(|p| season.by_round.contains_key(p));
            if app.state.gui.selected_players.is_empty() {
                app.state.gui.selected_players = app
                    .standings
                    .iter()
                    .take(WATCH_DEFAULT)
                    .map(|(p, _)| p.clone())
                    .collect();
            }
            app.last_clicked = None;

            app.official = Some(official);
            app.season = Some(season);
            app.status(format!(
                "Ready: {} players over {} rounds",
                app.standings.len(),
                rounds
            ));
        }
        Err(e) => {
            loge!("Count: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }

    app.running = false;
}
