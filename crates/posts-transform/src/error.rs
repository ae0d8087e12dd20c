//! Error types for DataFrame-level transformations.

use posts_ingest::IngestError;
use posts_model::{BatchError, CleanError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A date value failed to normalize.
    #[error(transparent)]
    Date(#[from] BatchError),

    /// A text value could not be cleaned.
    #[error(transparent)]
    Clean(#[from] CleanError),

    /// Column lookup or casting failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
