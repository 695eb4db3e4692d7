use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::data::model::FeatureRecord;

// ---------------------------------------------------------------------------
// Classifier contract
// ---------------------------------------------------------------------------

/// A trained classification model. Output length equals input length and
/// `output[i]` is the label for `records[i]`.
pub trait Classifier {
    fn predict(&self, records: &[FeatureRecord]) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// ScoreModel – the serialized artifact this app ships with
// ---------------------------------------------------------------------------

/// A linear scoring model over the four features, deserialized from the model
/// artifact. Opaque to the rest of the app: callers only see [`Classifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreModel {
    /// Class labels: `classes[0]` when the score is non-positive,
    /// `classes[1]` otherwise.
    pub classes: [String; 2],
    pub intercept: f64,
    pub age_weight: f64,
    pub hours_weight: f64,
    /// Per-category contributions. Unknown categories contribute 0.
    pub education_weights: BTreeMap<String, f64>,
    pub occupation_weights: BTreeMap<String, f64>,
}

impl ScoreModel {
    fn score(&self, record: &FeatureRecord) -> f64 {
        self.intercept
            + self.age_weight * record.age as f64
            + self.hours_weight * record.hours_per_week as f64
            + self
                .education_weights
                .get(&record.education)
                .copied()
                .unwrap_or(0.0)
            + self
                .occupation_weights
                .get(&record.occupation)
                .copied()
                .unwrap_or(0.0)
    }
}

impl Classifier for ScoreModel {
    fn predict(&self, records: &[FeatureRecord]) -> Vec<String> {
        records
            .iter()
            .map(|rec| {
                let idx = usize::from(self.score(rec) > 0.0);
                self.classes[idx].clone()
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Artifact loading
// ---------------------------------------------------------------------------

/// Default artifact path, resolved against the working directory.
pub const MODEL_PATH: &str = "salary_model.json";

/// Load the model artifact. Called once at startup; a failure here leaves the
/// app unusable, so the caller aborts.
pub fn load_model(path: &Path) -> Result<ScoreModel> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model artifact {}", path.display()))?;
    let model: ScoreModel =
        serde_json::from_str(&text).context("parsing model artifact")?;
    if model.classes[0] == model.classes[1] {
        bail!("model artifact declares identical class labels");
    }
    Ok(model)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_model() -> ScoreModel {
        let mut education_weights = BTreeMap::new();
        education_weights.insert("Bachelors".to_string(), 0.5);
        education_weights.insert("PhD".to_string(), 1.5);
        let mut occupation_weights = BTreeMap::new();
        occupation_weights.insert("Exec-managerial".to_string(), 1.0);

        ScoreModel {
            classes: ["<=50K".to_string(), ">50K".to_string()],
            intercept: -3.0,
            age_weight: 0.02,
            hours_weight: 0.03,
            education_weights,
            occupation_weights,
        }
    }

    fn record(age: i64, education: &str, occupation: &str, hours: i64) -> FeatureRecord {
        FeatureRecord {
            age,
            education: education.to_string(),
            occupation: occupation.to_string(),
            hours_per_week: hours,
        }
    }

    #[test]
    fn predicts_one_label_per_record() {
        let model = test_model();
        let records = vec![
            record(50, "PhD", "Exec-managerial", 60),
            record(18, "HS-grad", "Other-service", 10),
        ];
        let labels = model.predict(&records);
        assert_eq!(labels, vec![">50K".to_string(), "<=50K".to_string()]);
    }

    #[test]
    fn unknown_categories_still_predict() {
        let model = test_model();
        let labels = model.predict(&[record(30, "Doctorate", "Unlisted", 40)]);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0], "<=50K");
    }

    #[test]
    fn artifact_round_trip() {
        let model = test_model();
        let json = serde_json::to_string(&model).unwrap();
        let back: ScoreModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.classes, model.classes);
        assert_eq!(back.education_weights, model.education_weights);
    }
}
