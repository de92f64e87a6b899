use std::path::PathBuf;
use thiserror::Error;

/// The main error type for boxmerge operations.
#[derive(Debug, Error)]
pub enum BoxmergeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse box CSV from {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write box CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write category export to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Category '{0}' not found in the dataset")]
    CategoryNotFound(String),

    #[error("Cannot compute the enclosing rectangle of an empty set")]
    EmptyRectangleSet,

    #[error("Sweep lost track of active interval ({lo}, {hi})")]
    DegenerateGeometry { lo: f64, hi: f64 },
}
