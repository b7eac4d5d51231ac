use eframe::egui::{self, CollapsingHeader, ScrollArea};

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MammovizApp {
    pub state: AppState,
}

impl eframe::App for MammovizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters + export ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(session), Some(view), Some(colors)) =
                (&self.state.session, &self.state.view, &self.state.color_map)
            else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a dataset to explore cases  (File → Open…)");
                });
                return;
            };

            ScrollArea::vertical().show(ui, |ui| {
                CollapsingHeader::new("Filtered cases")
                    .default_open(true)
                    .show(ui, |ui| {
                        table::filtered_table(ui, session, view);
                    });

                CollapsingHeader::new("Diagnosis proportion")
                    .default_open(true)
                    .show(ui, |ui| {
                        charts::diagnosis_pie(ui, view, colors);
                    });

                CollapsingHeader::new("Cases per diagnosis")
                    .default_open(true)
                    .show(ui, |ui| {
                        charts::diagnosis_bars(ui, view, colors);
                    });

                // Sections backed by absent columns stay hidden.
                if view.scatter.is_some() {
                    CollapsingHeader::new("Radius vs area")
                        .default_open(true)
                        .show(ui, |ui| {
                            charts::radius_area_scatter(ui, session, view, colors);
                        });
                }

                CollapsingHeader::new("Radius distribution")
                    .default_open(true)
                    .show(ui, |ui| {
                        charts::radius_histogram(ui, session, view, colors);
                    });

                if view.severity.is_some() {
                    CollapsingHeader::new("Severity by diagnosis")
                        .default_open(true)
                        .show(ui, |ui| {
                            charts::severity_bars(ui, view, colors);
                        });
                }
            });
        });
    }
}
