mod app;
mod color;
mod data;
mod session;
mod state;
mod ui;

use std::path::PathBuf;

use app::MammovizApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path on the command line, loaded before first frame.
    let preload: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mammoviz – Breast-Cancer Dashboard",
        options,
        Box::new(move |_cc| {
            let mut app = MammovizApp::default();
            if let Some(path) = preload {
                app.state.load_path(&path);
            }
            Ok(Box::new(app))
        }),
    )
}
