use thiserror::Error;

/// Failure to normalize one composite date-time value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The value does not have the `"<weekday> <day> <month> <year>-<time>"` shape.
    #[error("malformed date '{value}': {reason}")]
    MalformedDate { value: String, reason: String },

    /// The time portion is not a time of day.
    #[error("unparseable time '{time}' in '{value}'")]
    UnparseableTime { value: String, time: String },
}

impl DateError {
    pub fn malformed(value: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to clean one text value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanError {
    /// The value is absent or not text.
    #[error("invalid input{}: {reason}", .row.map(|r| format!(" at row {r}")).unwrap_or_default())]
    InvalidInput { row: Option<usize>, reason: String },
}

impl CleanError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            row: None,
            reason: reason.into(),
        }
    }

    pub fn invalid_at(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            row: Some(row),
            reason: reason.into(),
        }
    }
}

/// A record-level failure inside a batch, tagged with its zero-based row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {source}")]
pub struct BatchError {
    pub row: usize,
    #[source]
    pub source: DateError,
}
