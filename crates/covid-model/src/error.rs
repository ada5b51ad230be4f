use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the pipeline.
///
/// Every failure aborts the whole run; there is no partial-success mode and
/// no retry. Duplicate merge keys within a single source are an input-quality
/// assumption and are not detected here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },
    #[error("schema mismatch: expected column {column:?} missing from {path}")]
    SchemaMismatch { column: String, path: PathBuf },
    #[error("invalid date {value:?} in {path}")]
    InvalidDate { value: String, path: PathBuf },
    #[error("store write failed: {0}")]
    WriteFailure(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
