// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    gui::app::App,
};

pub mod tally;
pub mod progression;
pub mod comparison;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw page-specific controls above the body. Returns true if
    /// anything changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
        false
    }

    /// Render the page body from whatever the app currently holds.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
