/// Data layer: core types, loading, validation, and export.
///
/// Architecture:
/// ```text
///      .csv upload
///          │
///          ▼
///     ┌──────────┐
///     │  loader   │  parse file → BatchDataset
///     └──────────┘
///          │
///          ▼
///     ┌──────────────┐
///     │ BatchDataset  │  header + string rows, original order
///     └──────────────┘
///          │
///          ▼
///     ┌──────────┐
///     │ pipeline  │  validate columns, clean "?", drop rows,
///     └──────────┘  predict, re-align → labeled dataset
///          │
///          ▼
///     ┌──────────┐
///     │  export   │  labeled dataset → predicted_classes.csv
///     └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod pipeline;
