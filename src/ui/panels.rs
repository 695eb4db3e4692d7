use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::model::{EDUCATION_LEVELS, OCCUPATIONS};
use crate::data::pipeline::BatchError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – employee detail inputs
// ---------------------------------------------------------------------------

/// Render the left input panel: the four feature controls plus the predict
/// button. The slider ranges and choice lists match the model's training
/// domain, so no out-of-range value can be built here.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Employee Details");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Age");
            ui.add(egui::Slider::new(&mut state.age, 18..=65));
            ui.add_space(8.0);

            ui.strong("Education Level");
            egui::ComboBox::from_id_salt("education")
                .selected_text(state.education.clone())
                .show_ui(ui, |ui: &mut Ui| {
                    for level in EDUCATION_LEVELS {
                        if ui
                            .selectable_label(state.education == level, level)
                            .clicked()
                        {
                            state.education = level.to_string();
                        }
                    }
                });
            ui.add_space(8.0);

            ui.strong("Job Role");
            egui::ComboBox::from_id_salt("occupation")
                .selected_text(state.occupation.clone())
                .show_ui(ui, |ui: &mut Ui| {
                    for role in OCCUPATIONS {
                        if ui
                            .selectable_label(state.occupation == role, role)
                            .clicked()
                        {
                            state.occupation = role.to_string();
                        }
                    }
                });
            ui.add_space(8.0);

            ui.strong("Hours per week");
            ui.add(egui::Slider::new(&mut state.hours_per_week, 1..=80));
            ui.add_space(12.0);

            if ui.button("Predict Salary Class").clicked() {
                state.predict_single();
            }

            if let Some(label) = &state.single_prediction {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Prediction: {label}"))
                        .color(Color32::DARK_GREEN)
                        .strong(),
                );
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
            if ui.button("Open CSV…").clicked() {
                open_csv_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(batch) = &state.batch {
            let mut summary = format!("{} rows uploaded", batch.len());
            if let Some(outcome) = &state.batch_outcome {
                summary.push_str(&format!(
                    ", {} labeled, {} dropped",
                    outcome.labeled.len(),
                    outcome.dropped_rows
                ));
            }
            ui.label(summary);
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

/// Pick a CSV file and run batch prediction on it.
pub fn open_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload a CSV file for batch prediction")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(batch) => {
                log::info!("loaded {} rows from {}", batch.len(), path.display());
                state.set_batch(batch);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(BatchError::from(e).to_string());
                state.batch = None;
                state.batch_outcome = None;
            }
        }
    }
}

/// Pick a destination and write the labeled dataset to it.
pub fn save_predictions_dialog(state: &mut AppState) {
    let Some(outcome) = &state.batch_outcome else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Download Predictions CSV")
        .set_file_name(export::DOWNLOAD_FILENAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export::write_csv(&outcome.labeled, &path) {
            Ok(()) => {
                log::info!(
                    "wrote {} labeled rows to {}",
                    outcome.labeled.len(),
                    path.display()
                );
                state.status_message = None;
            }
            Err(e) => {
                log::error!("failed to write predictions: {e:#}");
                state.status_message = Some(format!("Error writing file: {e:#}"));
            }
        }
    }
}
