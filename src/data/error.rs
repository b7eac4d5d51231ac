use std::path::PathBuf;

use thiserror::Error;

/// Fatal load-time failures. The caller must not proceed with a partial
/// dataset when any of these occur.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a top-level JSON array of objects")]
    JsonShape,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("file contains no data rows")]
    EmptyTable,

    #[error("no diagnosis column found (header: {0:?})")]
    MissingDiagnosisColumn(Vec<String>),

    #[error("no radius or numeric column available for filtering")]
    NoNumericColumn,
}

/// A caller supplied a range with `min > max`. The previous valid criteria
/// stay in effect.
#[derive(Debug, Error, PartialEq)]
#[error("invalid range: min {min} is greater than max {max}")]
pub struct InvalidRangeError {
    pub min: f64,
    pub max: f64,
}
