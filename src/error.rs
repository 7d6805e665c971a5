use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a source into a [`SalaryDataset`](crate::data::model::SalaryDataset).
///
/// Only whole-load failures live here; a malformed data row is skipped by the
/// parser and never becomes an error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read.
    #[error("Failed to parse CSV header: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of the columns the dashboard needs.
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    /// The file is not something the loader understands.
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Failure while writing the aggregates to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize summaries: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
