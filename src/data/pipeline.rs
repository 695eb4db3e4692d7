use thiserror::Error;

use super::model::{
    BatchDataset, FeatureRecord, MISSING_SENTINEL, PREDICTION_COLUMN, REQUIRED_COLUMNS,
};
use crate::classifier::Classifier;

// ---------------------------------------------------------------------------
// Batch errors
// ---------------------------------------------------------------------------

/// Failures of the batch pipeline, surfaced verbatim in the UI.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The upload lacks one or more required columns; no prediction was
    /// attempted. The message lists exactly the missing names.
    #[error("Missing required columns in uploaded CSV: [{}]", quote_list(.0))]
    MissingColumns(Vec<String>),

    /// Anything else that went wrong while parsing or predicting.
    #[error("Error processing file: {0}")]
    Processing(String),
}

impl From<anyhow::Error> for BatchError {
    fn from(e: anyhow::Error) -> Self {
        BatchError::Processing(format!("{e:#}"))
    }
}

fn quote_list(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Validator / aligner
// ---------------------------------------------------------------------------

/// Result of a successful batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// The original rows that survived cleaning, in original order, with a
    /// `PredictedClass` column appended.
    pub labeled: BatchDataset,
    /// Rows dropped for missing values in required columns.
    pub dropped_rows: usize,
}

/// Run the batch prediction pipeline:
///
/// 1. verify all required columns exist (else [`BatchError::MissingColumns`]);
/// 2. treat `"?"` and absent/empty cells in required columns as missing;
/// 3. drop rows missing any required value, remembering original indices;
/// 4. predict one label per surviving row;
/// 5. restrict the original dataset to the surviving indices and append the
///    prediction column.
///
/// Zero surviving rows is a success with an empty labeled dataset.
pub fn run_batch(
    model: &dyn Classifier,
    data: &BatchDataset,
) -> Result<BatchOutcome, BatchError> {
    // 1. Schema check.
    let mut missing = Vec::new();
    let mut col_indices = Vec::new();
    for col in REQUIRED_COLUMNS {
        match data.column_index(col) {
            Some(idx) => col_indices.push(idx),
            None => missing.push(col.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(BatchError::MissingColumns(missing));
    }

    // 2 + 3. Sentinel cleaning and row filtering. Only required columns are
    // inspected; everything else passes through untouched.
    let surviving: Vec<usize> = (0..data.len())
        .filter(|&row| {
            col_indices
                .iter()
                .all(|&col| !is_missing(data.cell(row, col)))
        })
        .collect();
    let dropped_rows = data.len() - surviving.len();

    // 4. Build model input from the surviving rows, required-column order.
    let mut records = Vec::with_capacity(surviving.len());
    for &row in &surviving {
        records.push(build_record(data, row, &col_indices)?);
    }
    let labels = model.predict(&records);

    // 5. Re-align predictions onto the original rows.
    let labeled = data
        .select_rows(&surviving)
        .with_column(PREDICTION_COLUMN, labels);

    Ok(BatchOutcome {
        labeled,
        dropped_rows,
    })
}

/// A required cell counts as missing when the row is too short, the cell is
/// empty, or it equals the `"?"` sentinel (surrounding whitespace tolerated).
fn is_missing(cell: Option<&str>) -> bool {
    match cell {
        None => true,
        Some(s) => {
            let t = s.trim();
            t.is_empty() || t == MISSING_SENTINEL
        }
    }
}

fn build_record(
    data: &BatchDataset,
    row: usize,
    col_indices: &[usize],
) -> Result<FeatureRecord, BatchError> {
    // col_indices holds REQUIRED_COLUMNS positions in order:
    // age, education, occupation, hours-per-week.
    let cell = |i: usize| data.cell(row, col_indices[i]).unwrap_or("").trim();

    Ok(FeatureRecord {
        age: parse_int(cell(0), row, REQUIRED_COLUMNS[0])?,
        education: cell(1).to_string(),
        occupation: cell(2).to_string(),
        hours_per_week: parse_int(cell(3), row, REQUIRED_COLUMNS[3])?,
    })
}

fn parse_int(raw: &str, row: usize, column: &str) -> Result<i64, BatchError> {
    raw.parse::<i64>().map_err(|_| {
        BatchError::Processing(format!("row {row}: '{raw}' is not a valid {column}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::tests::test_model;

    fn headers() -> Vec<String> {
        vec![
            "id".into(),
            "age".into(),
            "education".into(),
            "occupation".into(),
            "hours-per-week".into(),
        ]
    }

    fn row(id: &str, age: &str, edu: &str, occ: &str, hours: &str) -> Vec<String> {
        vec![id.into(), age.into(), edu.into(), occ.into(), hours.into()]
    }

    #[test]
    fn reports_missing_columns_exactly() {
        let ds = BatchDataset::new(
            vec!["age".into(), "education".into(), "hours-per-week".into()],
            vec![],
        );
        let err = run_batch(&test_model(), &ds).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns in uploaded CSV: ['occupation']"
        );
    }

    #[test]
    fn lists_all_missing_columns_in_required_order() {
        let ds = BatchDataset::new(vec!["education".into()], vec![]);
        let err = run_batch(&test_model(), &ds).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns in uploaded CSV: ['age', 'occupation', 'hours-per-week']"
        );
    }

    #[test]
    fn drops_sentinel_rows_and_realigns() {
        let ds = BatchDataset::new(
            headers(),
            vec![
                row("a", "30", "Bachelors", "Sales", "40"),
                row("b", "?", "PhD", "Sales", "45"),
                row("c", "52", "Masters", "Exec-managerial", "60"),
            ],
        );
        let outcome = run_batch(&test_model(), &ds).unwrap();
        assert_eq!(outcome.dropped_rows, 1);

        let out = &outcome.labeled;
        assert_eq!(out.len(), 2);
        // Original order, original extra columns preserved.
        assert_eq!(out.cell(0, 0), Some("a"));
        assert_eq!(out.cell(1, 0), Some("c"));
        assert_eq!(out.headers.last().map(|s| s.as_str()), Some("PredictedClass"));
        // One label per surviving row.
        let label_col = out.headers.len() - 1;
        assert!(out.cell(0, label_col).is_some());
        assert!(out.cell(1, label_col).is_some());
    }

    #[test]
    fn empty_and_whitespace_sentinel_cells_count_as_missing() {
        let ds = BatchDataset::new(
            headers(),
            vec![
                row("a", "30", "", "Sales", "40"),
                row("b", "41", "PhD", " ? ", "45"),
                vec!["c".into(), "52".into()], // ragged: occupation and hours absent
            ],
        );
        let outcome = run_batch(&test_model(), &ds).unwrap();
        assert_eq!(outcome.dropped_rows, 3);
        assert!(outcome.labeled.is_empty());
    }

    #[test]
    fn zero_survivors_is_success_not_error() {
        let ds = BatchDataset::new(headers(), vec![row("a", "?", "?", "?", "?")]);
        let outcome = run_batch(&test_model(), &ds).unwrap();
        assert!(outcome.labeled.is_empty());
        assert!(outcome.labeled.headers.contains(&"PredictedClass".to_string()));
    }

    #[test]
    fn non_required_columns_are_never_filtered_on() {
        let ds = BatchDataset::new(
            headers(),
            vec![row("?", "30", "Bachelors", "Sales", "40")],
        );
        let outcome = run_batch(&test_model(), &ds).unwrap();
        assert_eq!(outcome.labeled.len(), 1);
        assert_eq!(outcome.dropped_rows, 0);
    }

    #[test]
    fn unparsable_age_is_a_processing_error() {
        let ds = BatchDataset::new(
            headers(),
            vec![row("a", "thirty", "Bachelors", "Sales", "40")],
        );
        let err = run_batch(&test_model(), &ds).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Error processing file:"), "{msg}");
        assert!(msg.contains("thirty"), "{msg}");
    }

    #[test]
    fn rerunning_on_cleaned_output_yields_identical_labels() {
        let ds = BatchDataset::new(
            headers(),
            vec![
                row("a", "30", "Bachelors", "Sales", "40"),
                row("b", "?", "PhD", "Sales", "45"),
                row("c", "52", "Masters", "Exec-managerial", "60"),
            ],
        );
        let model = test_model();
        let first = run_batch(&model, &ds).unwrap();

        // Strip the prediction column and run again.
        let mut cleaned = first.labeled.clone();
        cleaned.headers.pop();
        for r in &mut cleaned.rows {
            r.pop();
        }
        let second = run_batch(&model, &cleaned).unwrap();
        assert_eq!(second.labeled, first.labeled);
        assert_eq!(second.dropped_rows, 0);
    }
}
