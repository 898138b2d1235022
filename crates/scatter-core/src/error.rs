// File: crates/scatter-core/src/error.rs
// Summary: Typed error surface for dataset ingestion, state construction, and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read dataset '{path}': {source}")]
    DatasetRead {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset '{path}' is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    /// Non-numeric measure fields are rejected at ingestion. Letting them
    /// through would poison the min/max scale bounds for that dimension.
    #[error("dataset row {row}: column '{column}' has non-numeric value '{value}'")]
    MalformedField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no records; scale bounds are undefined")]
    EmptyDataset,

    #[error("unknown dimension name '{0}'")]
    UnknownDimension(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
