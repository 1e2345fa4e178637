// src/gui/pages/progression.rs
//
// Cumulative vote lines for the players ticked in the left panel.

use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use crate::charts;
use crate::config::options::PageKind;
use crate::gui::app::App;

pub struct ProgressionPage;
pub static PAGE: ProgressionPage = ProgressionPage;

impl super::Page for ProgressionPage {
    fn title(&self) -> &'static str { "Progression" }
    fn kind(&self) -> PageKind { PageKind::Progression }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(season) = &app.season else {
            ui.label("No tally yet. Press COUNT.");
            return;
        };
        if app.state.gui.selected_players.is_empty() {
            ui.label("Pick players on the left to plot their progression.");
            return;
        }

        match charts::progression_series(season, &app.state.gui.selected_players) {
            Ok(series) => {
                Plot::new("progression")
                    .legend(Legend::default())
                    .x_axis_label("Round")
                    .y_axis_label("Cumulative votes")
                    .show(ui, |plot_ui| {
                        for (player, cum) in &series {
                            let points: Vec<[f64; 2]> = cum
                                .iter()
                                .enumerate()
                                .map(|(i, &v)| [(i + 1) as f64, f64::from(v)])
                                .collect();
                            plot_ui.line(Line::new(player.clone(), points));
                        }
                    });
            }
            Err(e) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Progression error: {e}"),
                );
            }
        }
    }
}
