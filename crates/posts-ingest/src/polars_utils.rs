//! Polars value helpers.

use polars::prelude::{DataFrame, DataType, StringChunked};

use crate::error::{IngestError, Result};

/// Fetch `name` as a string column, casting other dtypes.
pub fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| IngestError::MissingColumn {
            column: name.to_string(),
        })?;
    let casted = column.cast(&DataType::String)?;
    Ok(casted.str()?.clone())
}
