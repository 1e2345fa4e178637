// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let headers = export.include_headers.then_some(app.headers.as_slice());
    let txt = csv::rows_to_string(&app.rows, headers, export.delim());

    logf!(
        "Copy: rows={}, include_headers={}",
        app.rows.len(),
        export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
