use crate::model::CaptureRateError;
use crate::types::UnknownType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing column {0:?}")]
    MissingColumn(&'static str),
    #[error("row {row} ({name}): {source}")]
    Type {
        row: usize,
        name: String,
        #[source]
        source: UnknownType,
    },
    #[error("row {row} ({name}): {source}")]
    CaptureRate {
        row: usize,
        name: String,
        #[source]
        source: CaptureRateError,
    },
    #[error("species {0:?} appears more than once")]
    DuplicateName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unknown algorithm {0:?} (expected 1-5 or normal, capture, aggressive, tank, fast)")]
    UnknownAlgorithm(String),
}
