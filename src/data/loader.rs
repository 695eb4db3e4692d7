use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::BatchDataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a batch dataset from a file. Only `.csv` is accepted, matching the
/// upload filter of the UI.
pub fn load_file(path: &Path) -> Result<BatchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row with column names, then one record per row.
/// Every cell is kept as raw text; ragged rows are allowed and their absent
/// cells count as missing during validation.
fn load_csv(path: &Path) -> Result<BatchDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_batch(file)
}

/// Parse CSV content from any reader into a [`BatchDataset`].
pub fn read_batch<R: Read>(reader: R) -> Result<BatchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(BatchDataset::new(headers, rows))
}
