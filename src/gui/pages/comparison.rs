// src/gui/pages/comparison.rs
//
// Official count vs our rating-based count, side by side per player.
// Only names the official page actually lists get a bar pair.

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::charts;
use crate::config::consts::COMPARISON_BAR_WIDTH;
use crate::config::options::PageKind;
use crate::gui::app::App;

pub struct ComparisonPage;
pub static PAGE: ComparisonPage = ComparisonPage;

impl super::Page for ComparisonPage {
    fn title(&self) -> &'static str { "Comparison" }
    fn kind(&self) -> PageKind { PageKind::Comparison }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let (Some(official), Some(season)) = (&app.official, &app.season) else {
            ui.label("No tally yet. Press COUNT.");
            return;
        };

        let names = charts::present_in_official(official, &app.state.options.count.comparison);
        if names.is_empty() {
            ui.label("None of the configured comparison players are in the official count.");
            return;
        }

        match charts::comparison_rows(official, &season.totals, &names) {
            Ok(rows) => {
                let official_bars: Vec<Bar> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Bar::new(i as f64, f64::from(c.official))
                            .width(COMPARISON_BAR_WIDTH)
                            .name(&c.player)
                    })
                    .collect();
                let rating_bars: Vec<Bar> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Bar::new(i as f64 + COMPARISON_BAR_WIDTH, f64::from(c.rating))
                            .width(COMPARISON_BAR_WIDTH)
                            .name(&c.player)
                    })
                    .collect();

                Plot::new("comparison")
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(BarChart::new("Official votes", official_bars));
                        plot_ui.bar_chart(BarChart::new("Rating votes", rating_bars));
                    });
            }
            Err(e) => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Comparison error: {e}"),
                );
            }
        }
    }
}
