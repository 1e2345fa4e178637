// src/gui/components/player_panel.rs
//
// Renders the left player list (standings order) and applies watchlist
// changes directly to `app`. Click toggles a player; shift-click adds
// the whole range from the last clicked row. The watchlist drives the
// progression chart.

use eframe::egui;

use crate::config::consts::WATCH_DEFAULT;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Players");

    if app.standings.is_empty() {
        ui.separator();
        ui.label("Run COUNT to list players.");
        return;
    }

    ui.horizontal(|ui| {
        if ui.button("Top 10").clicked() {
            app.state.gui.selected_players = app
                .standings
                .iter()
                .take(WATCH_DEFAULT)
                .map(|(p, _)| p.clone())
                .collect();
            app.last_clicked = None;
            if !app.running {
                app.set_selection_message();
            }
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_players.clear();
            app.last_clicked = None;
            if !app.running {
                app.set_selection_message();
            }
        }
    });

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("players_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);
            let mut changed = false;

            for (idx, (player, total)) in app.standings.iter().enumerate() {
                let is_selected = app.state.gui.selected_players.contains(player);
                let resp = ui.selectable_label(is_selected, format!("{player} ({total})"));

                if resp.clicked() && !app.running {
                    let shift = ui.input(|i| i.modifiers.shift);
                    let sel = &mut app.state.gui.selected_players;

                    if shift {
                        if let Some(last) = app.last_clicked {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            for j in lo..=hi {
                                let name = &app.standings[j].0;
                                if !sel.contains(name) {
                                    sel.push(name.clone());
                                }
                            }
                        } else if !is_selected {
                            // No anchor: behave like a plain toggle-on
                            sel.push(player.clone());
                        }
                    } else if is_selected {
                        sel.retain(|p| p != player);
                    } else {
                        sel.push(player.clone());
                    }
                    app.last_clicked = Some(idx);
                    changed = true;
                }
            }

            if changed {
                if !app.running {
                    app.set_selection_message();
                }
                logf!(
                    "UI: Watchlist changed ({} players)",
                    app.state.gui.selected_players.len()
                );
            }
        });
}
