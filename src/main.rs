mod app;
mod classifier;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::SalaryClassifierApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Salary Classifier",
        options,
        Box::new(|_cc| {
            // Model load happens once; a failure aborts startup since the app
            // is unusable without it.
            let model = classifier::load_model(Path::new(classifier::MODEL_PATH))?;
            log::info!(
                "loaded model with classes [{}, {}]",
                model.classes[0],
                model.classes[1]
            );
            Ok(Box::new(SalaryClassifierApp::new(AppState::new(model))))
        }),
    )
}
