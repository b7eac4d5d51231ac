use eframe::egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::session::{Session, ViewModel};

/// Render the filtered cases as a scrollable table, with a derived
/// Severity column appended when available.
pub fn filtered_table(ui: &mut Ui, session: &Session, view: &ViewModel) {
    let dataset = session.dataset();
    let n_cols = dataset.columns.len();
    let has_severity = view.severity.is_some();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .vscroll(true)
        .max_scroll_height(400.0);
    for _ in 0..n_cols + usize::from(has_severity) {
        builder = builder.column(TableColumn::auto().resizable(true));
    }

    builder
        .header(20.0, |mut header| {
            for col in &dataset.columns {
                header.col(|ui| {
                    ui.strong(&col.name);
                });
            }
            if has_severity {
                header.col(|ui| {
                    ui.strong("Severity");
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.rows.len(), |mut table_row| {
                let view_idx = table_row.index();
                let row = view.rows[view_idx];
                for cell in &dataset.records[row].cells {
                    table_row.col(|ui| {
                        ui.label(cell.to_string());
                    });
                }
                if let Some(sev) = &view.severity {
                    table_row.col(|ui| {
                        let label = sev.labels[view_idx]
                            .map(|s| s.to_string())
                            .unwrap_or_default();
                        ui.label(label);
                    });
                }
            });
        });
}
