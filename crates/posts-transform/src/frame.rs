//! Deriving new columns on the posts DataFrame.
//!
//! Date columns: `weekday`, `day`, `month`, `year`, `time`, `hour`.
//! Token columns: `tokens` (space-joined) and `token_count`.

use polars::prelude::{BooleanChunked, Column, DataFrame, NamedFrom};
use posts_ingest::string_column;
use posts_model::{BatchError, DateColumns, Token};
use tracing::{debug, warn};

use crate::error::{Result, TransformError};
use crate::normalization::{normalize_dates, normalize_dates_par, normalize_each};

pub const WEEKDAY_COLUMN: &str = "weekday";
pub const DAY_COLUMN: &str = "day";
pub const MONTH_COLUMN: &str = "month";
pub const YEAR_COLUMN: &str = "year";
pub const TIME_COLUMN: &str = "time";
pub const HOUR_COLUMN: &str = "hour";
pub const TOKENS_COLUMN: &str = "tokens";
pub const TOKEN_COUNT_COLUMN: &str = "token_count";

/// Separator used when a token list is stored as a single string cell.
pub const TOKEN_SEPARATOR: &str = " ";

/// Result of a lenient date pass: the surviving rows and why the rest went.
#[derive(Debug, Clone)]
pub struct DateFrameOutcome {
    pub frame: DataFrame,
    pub skipped: Vec<BatchError>,
}

/// Normalize `column` and append the six date columns in place.
///
/// With `parallel` the values are normalized on the rayon pool; the result
/// is identical either way.
///
/// # Errors
///
/// The first failing row aborts the pass and leaves `df` untouched.
pub fn append_date_columns(df: &mut DataFrame, column: &str, parallel: bool) -> Result<usize> {
    let values = string_column(df, column)?;
    let cells: Vec<Option<&str>> = values.into_iter().collect();
    let dates = if parallel {
        normalize_dates_par(&cells)?
    } else {
        normalize_dates(cells.iter().copied())?
    };
    let rows = dates.len();
    push_date_columns(df, dates)?;
    debug!(column, rows, "appended date columns");
    Ok(rows)
}

/// Like [`append_date_columns`], but rows that fail are removed and reported.
pub fn append_date_columns_lenient(df: &DataFrame, column: &str) -> Result<DateFrameOutcome> {
    let values = string_column(df, column)?;
    let results = normalize_each(values.into_iter());

    let mut keep = Vec::with_capacity(results.len());
    let mut dates = DateColumns::with_capacity(results.len());
    let mut skipped = Vec::new();
    for (row, result) in results.into_iter().enumerate() {
        match result {
            Ok(date) => {
                keep.push(true);
                dates.push(date);
            }
            Err(source) => {
                warn!(row, error = %source, "skipping row with invalid date");
                keep.push(false);
                skipped.push(BatchError { row, source });
            }
        }
    }

    let mask = BooleanChunked::new("keep".into(), keep);
    let mut frame = df.filter(&mask)?;
    push_date_columns(&mut frame, dates)?;
    Ok(DateFrameOutcome { frame, skipped })
}

fn push_date_columns(df: &mut DataFrame, dates: DateColumns) -> Result<()> {
    let DateColumns {
        weekday,
        day,
        month,
        year,
        time,
        hour,
    } = dates;
    df.with_column(Column::new(WEEKDAY_COLUMN.into(), weekday))?;
    df.with_column(Column::new(DAY_COLUMN.into(), day))?;
    df.with_column(Column::new(MONTH_COLUMN.into(), month))?;
    df.with_column(Column::new(YEAR_COLUMN.into(), year))?;
    df.with_column(Column::new(TIME_COLUMN.into(), time))?;
    df.with_column(Column::new(HOUR_COLUMN.into(), hour))?;
    Ok(())
}

/// Append `tokens` and `token_count`, one entry per row.
pub fn append_token_columns(df: &mut DataFrame, tokens: &[Vec<Token>]) -> Result<()> {
    if tokens.len() != df.height() {
        return Err(TransformError::DataFrame {
            message: format!(
                "{} token rows for a frame of height {}",
                tokens.len(),
                df.height()
            ),
        });
    }
    let joined: Vec<String> = tokens
        .iter()
        .map(|row| {
            row.iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(TOKEN_SEPARATOR)
        })
        .collect();
    let counts: Vec<u32> = tokens
        .iter()
        .map(|row| u32::try_from(row.len()).unwrap_or(u32::MAX))
        .collect();
    df.with_column(Column::new(TOKENS_COLUMN.into(), joined))?;
    df.with_column(Column::new(TOKEN_COUNT_COLUMN.into(), counts))?;
    Ok(())
}
