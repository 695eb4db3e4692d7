use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::BatchDataset;
use crate::state::AppState;

/// Rows shown in the upload preview table.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Central panel – input echo, batch preview, predictions
// ---------------------------------------------------------------------------

/// Render the central panel.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Employee Salary Classification");
    ui.label("Predict whether an employee earns >50K or <=50K based on input features.");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            input_echo(ui, state);
            ui.separator();
            batch_section(ui, state);
        });
}

/// Echo the current single-record input, mirroring the form controls.
fn input_echo(ui: &mut Ui, state: &AppState) {
    ui.strong("Input Data");
    let record = state.input_record();
    ui.monospace(record.to_string());
}

fn batch_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Batch Prediction");
    ui.label("Open a CSV file with the required columns (File → Open CSV…).");

    let Some(batch) = &state.batch else {
        return;
    };

    ui.add_space(6.0);
    ui.label("Uploaded Data Preview:");
    ui.push_id("upload_preview", |ui: &mut Ui| {
        dataset_table(ui, batch, Some(PREVIEW_ROWS));
    });

    let Some(outcome) = &state.batch_outcome else {
        return;
    };

    ui.add_space(6.0);
    ui.label("Predictions:");
    ui.push_id("predictions", |ui: &mut Ui| {
        dataset_table(ui, &outcome.labeled, None);
    });

    ui.add_space(6.0);
    if ui.button("Download Predictions CSV").clicked() {
        crate::ui::panels::save_predictions_dialog(state);
    }
}

/// Render a dataset as a striped table, optionally limited to the first
/// `limit` rows.
fn dataset_table(ui: &mut Ui, dataset: &BatchDataset, limit: Option<usize>) {
    let n_cols = dataset.headers.len();
    if n_cols == 0 {
        ui.label("(empty table)");
        return;
    }
    let n_rows = limit
        .map(|l| dataset.len().min(l))
        .unwrap_or_else(|| dataset.len());

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), n_cols)
        .header(20.0, |mut header| {
            for name in &dataset.headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, n_rows, |mut row| {
                let row_idx = row.index();
                for col_idx in 0..n_cols {
                    row.col(|ui: &mut Ui| {
                        ui.label(dataset.cell(row_idx, col_idx).unwrap_or(""));
                    });
                }
            });
        });
}
