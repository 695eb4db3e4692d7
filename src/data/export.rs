use std::path::Path;

use anyhow::{Context, Result};

use super::model::BatchDataset;

// ---------------------------------------------------------------------------
// CSV export of the labeled dataset
// ---------------------------------------------------------------------------

/// Default filename offered by the save dialog.
pub const DOWNLOAD_FILENAME: &str = "predicted_classes.csv";

/// Serialize the dataset as UTF-8 CSV: header row included, no index column.
/// Short rows are padded with empty cells so every record has header width.
pub fn to_csv_bytes(dataset: &BatchDataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&dataset.headers)
        .context("writing CSV header")?;

    let width = dataset.headers.len();
    for (row_no, row) in dataset.rows.iter().enumerate() {
        let padded = row
            .iter()
            .map(|s| s.as_str())
            .chain(std::iter::repeat("").take(width.saturating_sub(row.len())));
        writer
            .write_record(padded)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }

    writer.into_inner().context("finishing CSV output")
}

/// Write the dataset to a file chosen by the user.
pub fn write_csv(dataset: &BatchDataset, path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(dataset)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("writing {}", path.display()))
}
