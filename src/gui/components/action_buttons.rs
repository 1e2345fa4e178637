// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::options::ExportFormat,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);

            // If the user hasn't typed their own path, refresh the text
            // field so the extension follows the format.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format");
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: include_headers → {}", export.include_headers);
        }
    }

    // Page-specific controls
    let _changed = page.draw_controls(ui, &mut app.state);

    // --- Fetch toggles + Output field ---
    ui.horizontal(|ui| {
        let fetch = &mut app.state.options.fetch;

        let before = fetch.refresh;
        ui.checkbox(&mut fetch.refresh, "Re-fetch official")
            .on_hover_text("Ignore the cached official count and fetch the page again");
        if fetch.refresh != before {
            logf!("UI: fetch.refresh → {}", fetch.refresh);
        }

        let before = fetch.accept_invalid_certs;
        ui.checkbox(&mut fetch.accept_invalid_certs, "Allow invalid certs")
            .on_hover_text(
                "Skip TLS certificate validation. Leave off unless the fetch \
                 fails with a certificate error.",
            );
        if fetch.accept_invalid_certs != before {
            logf!("UI: fetch.accept_invalid_certs → {}", fetch.accept_invalid_certs);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // Actions: Copy / Export / Count
    use crate::gui::actions;
    ui.horizontal(|ui| {

        // Copy
        let button_copy = ui.button("Copy");
        if button_copy.clicked() {
            actions::copy(app, ui.ctx());
        }

        // Export
        let button_export = ui.button("Export");
        if button_export.clicked() {
            actions::export(app);
        }

        // Count
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_count = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("COUNT")
                .color(black)
                .strong())
            .fill(red));

        if button_count.clicked() {
            actions::count(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().unwrap().clone();

        ui.label(status);
    });
}
