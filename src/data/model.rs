use std::fmt;

// ---------------------------------------------------------------------------
// Feature schema – the exact columns the model was trained on
// ---------------------------------------------------------------------------

/// Column names the model expects, in training order (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 4] = ["age", "education", "occupation", "hours-per-week"];

/// Placeholder string used for missing data in the source dataset convention.
pub const MISSING_SENTINEL: &str = "?";

/// Name of the column appended to batch output.
pub const PREDICTION_COLUMN: &str = "PredictedClass";

/// Education levels offered by the single-record input controls.
pub const EDUCATION_LEVELS: [&str; 6] = [
    "Bachelors",
    "Masters",
    "PhD",
    "HS-grad",
    "Assoc",
    "Some-college",
];

/// Job roles offered by the single-record input controls.
pub const OCCUPATIONS: [&str; 14] = [
    "Tech-support",
    "Craft-repair",
    "Other-service",
    "Sales",
    "Exec-managerial",
    "Prof-specialty",
    "Handlers-cleaners",
    "Machine-op-inspct",
    "Adm-clerical",
    "Farming-fishing",
    "Transport-moving",
    "Priv-house-serv",
    "Protective-serv",
    "Armed-Forces",
];

// ---------------------------------------------------------------------------
// FeatureRecord – one row of model input
// ---------------------------------------------------------------------------

/// The four-field structured input the model consumes.
/// Invariant: every field is present and non-missing by the time a record
/// reaches the model (the controls guarantee it for single prediction, the
/// batch pipeline guarantees it by filtering).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub age: i64,
    pub education: String,
    pub occupation: String,
    pub hours_per_week: i64,
}

impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "age={}, education={}, occupation={}, hours-per-week={}",
            self.age, self.education, self.occupation, self.hours_per_week
        )
    }
}

// ---------------------------------------------------------------------------
// BatchDataset – an uploaded tabular file
// ---------------------------------------------------------------------------

/// A parsed tabular file: a header row plus string cells, row order preserved.
/// Cells are kept as raw text so columns outside the required four pass
/// through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchDataset {
    /// Column names from the header row, in file order.
    pub headers: Vec<String>,
    /// Data rows in file order. Rows may be shorter than the header
    /// (ragged input); absent cells are treated as missing downstream.
    pub rows: Vec<Vec<String>>,
}

impl BatchDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        BatchDataset { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name. First occurrence wins when the
    /// header contains duplicates.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (row, column index); `None` when the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }

    /// Restrict to the given row indices, keeping their relative order.
    pub fn select_rows(&self, indices: &[usize]) -> BatchDataset {
        BatchDataset {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Append a new column with one value per row.
    /// Invariant: `values.len() == self.len()`. Short rows are padded with
    /// empty cells first so the new column lines up.
    pub fn with_column(mut self, name: &str, values: Vec<String>) -> BatchDataset {
        debug_assert_eq!(values.len(), self.rows.len());
        let width = self.headers.len();
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() < width {
                row.resize(width, String::new());
            }
            row.push(value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchDataset {
        BatchDataset::new(
            vec!["age".into(), "education".into()],
            vec![
                vec!["30".into(), "Bachelors".into()],
                vec!["41".into(), "PhD".into()],
                vec!["52".into(), "Masters".into()],
            ],
        )
    }

    #[test]
    fn column_index_finds_first_occurrence() {
        let ds = BatchDataset::new(
            vec!["age".into(), "age".into()],
            vec![vec!["1".into(), "2".into()]],
        );
        assert_eq!(ds.column_index("age"), Some(0));
        assert_eq!(ds.column_index("occupation"), None);
    }

    #[test]
    fn select_rows_preserves_order() {
        let ds = sample();
        let picked = ds.select_rows(&[0, 2]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.cell(0, 0), Some("30"));
        assert_eq!(picked.cell(1, 0), Some("52"));
    }

    #[test]
    fn with_column_pads_short_rows() {
        let ds = BatchDataset::new(
            vec!["age".into(), "education".into()],
            vec![vec!["30".into()]],
        );
        let labeled = ds.with_column("PredictedClass", vec![">50K".into()]);
        assert_eq!(labeled.headers.len(), 3);
        assert_eq!(labeled.cell(0, 1), Some(""));
        assert_eq!(labeled.cell(0, 2), Some(">50K"));
    }
}
