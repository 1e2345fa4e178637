// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Players ticked in the left panel (the progression watchlist)
    pub selected_players: Vec<String>,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Tally page -> show/hide the per-round columns
    pub tally_show_rounds: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_players: Vec::new(),
            current_page_index: 0,
            tally_show_rounds: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
