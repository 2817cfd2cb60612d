//! Error types for dataset generation, training and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmTraceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Degenerate dataset: {0}")]
    DegenerateDataset(String),

    #[error("Invalid label: expected -1 or +1, got {0}")]
    InvalidLabel(f64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, SvmTraceError>;
