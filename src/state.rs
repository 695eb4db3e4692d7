use crate::classifier::{Classifier, ScoreModel};
use crate::data::model::{
    BatchDataset, FeatureRecord, EDUCATION_LEVELS, OCCUPATIONS,
};
use crate::data::pipeline::{self, BatchOutcome};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The model loaded at startup. Immutable for the process lifetime.
    pub model: ScoreModel,

    /// Single-record input controls.
    pub age: i64,
    pub education: String,
    pub occupation: String,
    pub hours_per_week: i64,

    /// Label from the last single-record prediction.
    pub single_prediction: Option<String>,

    /// Uploaded batch (None until user opens a file).
    pub batch: Option<BatchDataset>,

    /// Outcome of the last batch run on `batch`.
    pub batch_outcome: Option<BatchOutcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(model: ScoreModel) -> Self {
        Self {
            model,
            age: 30,
            education: EDUCATION_LEVELS[0].to_string(),
            occupation: OCCUPATIONS[0].to_string(),
            hours_per_week: 40,
            single_prediction: None,
            batch: None,
            batch_outcome: None,
            status_message: None,
        }
    }

    /// The one-row record built from the current control values. The control
    /// ranges and choice lists keep every field in domain by construction.
    pub fn input_record(&self) -> FeatureRecord {
        FeatureRecord {
            age: self.age,
            education: self.education.clone(),
            occupation: self.occupation.clone(),
            hours_per_week: self.hours_per_week,
        }
    }

    /// Predict the salary class for the current control values.
    pub fn predict_single(&mut self) {
        let record = self.input_record();
        let label = self.model.predict(std::slice::from_ref(&record)).pop();
        log::info!("single prediction for [{record}]: {label:?}");
        self.single_prediction = label;
    }

    /// Ingest a freshly parsed batch and run the pipeline on it.
    pub fn set_batch(&mut self, batch: BatchDataset) {
        match pipeline::run_batch(&self.model, &batch) {
            Ok(outcome) => {
                log::info!(
                    "batch prediction: {} rows labeled, {} dropped",
                    outcome.labeled.len(),
                    outcome.dropped_rows
                );
                self.status_message = None;
                self.batch_outcome = Some(outcome);
            }
            Err(e) => {
                log::error!("batch prediction failed: {e}");
                self.status_message = Some(e.to_string());
                self.batch_outcome = None;
            }
        }
        self.batch = Some(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::tests::test_model;

    #[test]
    fn predict_single_always_yields_a_label() {
        let mut state = AppState::new(test_model());
        for education in EDUCATION_LEVELS {
            for occupation in OCCUPATIONS {
                state.education = education.to_string();
                state.occupation = occupation.to_string();
                state.predict_single();
                assert!(state.single_prediction.is_some());
            }
        }
    }

    #[test]
    fn set_batch_with_missing_column_reports_and_keeps_no_outcome() {
        let mut state = AppState::new(test_model());
        let batch = BatchDataset::new(vec!["age".into()], vec![vec!["30".into()]]);
        state.set_batch(batch);
        assert!(state.batch_outcome.is_none());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Missing required columns in uploaded CSV: ['education', 'occupation', 'hours-per-week']")
        );
    }
}
