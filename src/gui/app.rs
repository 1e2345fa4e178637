// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    official::OfficialVotes,
    season::Season,
    store,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Alternative Brownlow",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // left panel list: (player, season total), standings order
    pub standings: Vec<(String, u32)>,
    pub last_clicked: Option<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last computed counts
    pub official: Option<OfficialVotes>,
    pub season: Option<Season>,

    // tally table: Player, R1..RN, Total
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    // status/progress (the count writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        // initial out path text
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        // cached official count from a previous run, if any
        let mut official = None;
        match store::load_official() {
            Ok(Some(votes)) if !votes.is_empty() => {
                logf!("Cache: Loaded official count ({} players)", votes.len());
                status = format!("Loaded cached official count ({} players)", votes.len());
                official = Some(votes);
            }
            Ok(_) => logd!("Cache: No official count yet"),
            Err(e) => logd!("Cache: Official count unreadable ({e})"),
        }

        logf!(
            "Init: season={}, rounds={}, official cache={} player(s)",
            state.options.count.season,
            state.options.count.rounds,
            official.as_ref().map_or(0, |o| o.len())
        );

        Self {
            state,
            standings: Vec::new(),
            last_clicked: None,
            out_path_text,
            out_path_dirty: false,
            official,
            season: None,
            headers: Vec::new(),
            rows: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> crate::config::options::PageKind {
        router::all_pages()[self.current_index()].kind()
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()[self.current_index()]
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected_players.len();
        self.status(format!("Watchlist: {} player(s)", n));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("players")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::player_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::action_buttons::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
