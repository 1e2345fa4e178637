// src/gui/pages/tally.rs
//
// The main table: one row per player in standings order,
// Player | R1..RN | Total. Round columns can be hidden.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::{options::PageKind, state::AppState};
use crate::gui::app::App;

pub struct TallyPage;
pub static PAGE: TallyPage = TallyPage;

impl super::Page for TallyPage {
    fn title(&self) -> &'static str { "Tally" }
    fn kind(&self) -> PageKind { PageKind::Tally }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.checkbox(&mut state.gui.tally_show_rounds, "Show round columns")
            .changed()
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.rows.is_empty() {
            ui.label("No tally yet. Press COUNT.");
            return;
        }

        // Player + R1..RN + Total, or just Player + Total.
        let cols: Vec<usize> = if app.state.gui.tally_show_rounds {
            (0..app.headers.len()).collect()
        } else {
            vec![0, app.headers.len() - 1]
        };

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().resizable(true).at_least(160.0));
        for _ in 1..cols.len() {
            table = table.column(Column::auto());
        }

        table
            .header(20.0, |mut header| {
                for &ci in &cols {
                    header.col(|ui| {
                        ui.label(RichText::new(&app.headers[ci]).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, app.rows.len(), |mut row| {
                    let r = &app.rows[row.index()];
                    for &ci in &cols {
                        row.col(|ui| {
                            ui.label(&r[ci]);
                        });
                    }
                });
            });
    }
}
