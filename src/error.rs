use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the reporting pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The requested accident file is not present in the data directory.
    #[error("file does not exist: {0}")]
    NotFound(PathBuf),

    /// The region code does not occur in the loaded year's data.
    #[error("invalid region number: {0}")]
    InvalidRegion(i64),

    /// A fixed-schema column is absent from a loaded file.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell that should hold a number does not parse as one.
    #[error("invalid value in column {column}: {value:?}")]
    InvalidCell { column: String, value: String },

    /// Pass-through for CSV parser errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
