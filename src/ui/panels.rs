use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use crate::data::export::{to_csv_bytes, EXPORT_FILENAME};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets + export
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(session) = &state.session else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let categories: Vec<String> = session.dataset().categories.iter().cloned().collect();
    let selected = session.criteria.categories.clone();
    let radius_name = session.radius_column_name().to_string();
    let (observed_min, observed_max) = session.radius_range();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Diagnosis multi-select ----
            ui.strong("Diagnosis");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_categories();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_categories();
                }
            });
            for label in &categories {
                let mut checked = selected.contains(label);
                let mut text = RichText::new(label);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(label));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_category(label);
                }
            }
            ui.separator();

            // ---- Radius range ----
            ui.strong(format!("{radius_name} range"));
            ui.label(format!("observed: {observed_min} – {observed_max}"));
            let mut changed = false;
            ui.horizontal(|ui: &mut Ui| {
                ui.label("min");
                changed |= ui
                    .add(DragValue::new(&mut state.range_input.0).speed(0.1))
                    .changed();
                ui.label("max");
                changed |= ui
                    .add(DragValue::new(&mut state.range_input.1).speed(0.1))
                    .changed();
            });
            if changed {
                state.refresh();
            }
            ui.separator();

            // ---- Export ----
            if ui.button("Export filtered cases…").clicked() {
                export_dialog(state);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(session), Some(view)) = (&state.session, &state.view) {
            ui.label(format!(
                "{} cases loaded, {} shown",
                session.dataset().len(),
                view.rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open diagnostic dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

fn export_dialog(state: &mut AppState) {
    let (Some(session), Some(view)) = (&state.session, &state.view) else {
        return;
    };

    let target = rfd::FileDialog::new()
        .set_title("Save filtered cases")
        .set_file_name(EXPORT_FILENAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = target else {
        return;
    };

    let result = to_csv_bytes(session.dataset(), &view.rows)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| std::fs::write(&path, bytes).map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            log::info!("exported {} cases to {}", view.rows.len(), path.display());
            state.status_message = Some(format!("Saved {} cases", view.rows.len()));
        }
        Err(e) => {
            log::error!("export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
