//! Typed record extraction from the posts DataFrame.

use polars::prelude::DataFrame;
use posts_model::Record;

use crate::error::{IngestError, Result};
use crate::polars_utils::string_column;

/// Column holding the raw composite date-time.
pub const DATE_COLUMN: &str = "date";
/// Column holding the raw post text.
pub const TEXT_COLUMN: &str = "text";

/// Fail with [`IngestError::MissingColumn`] for the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// One [`Record`] per row, in row order. Null cells become `None`.
pub fn records(df: &DataFrame) -> Result<Vec<Record>> {
    require_columns(df, &[DATE_COLUMN, TEXT_COLUMN])?;
    let dates = string_column(df, DATE_COLUMN)?;
    let texts = string_column(df, TEXT_COLUMN)?;
    Ok(dates
        .into_iter()
        .zip(texts.into_iter())
        .map(|(date, text)| Record {
            date: date.map(str::to_string),
            text: text.map(str::to_string),
        })
        .collect())
}
