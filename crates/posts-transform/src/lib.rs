//! Preprocessing for the Arabic posts dataset.
//!
//! - **normalization**: composite date-time strings to calendar fields
//! - **text**: tokenization, punctuation filter, tashkeel stripping, stop words
//! - **frame**: deriving new DataFrame columns from the two above

pub mod error;
pub mod frame;
pub mod normalization;
pub mod text;

pub use error::{Result, TransformError};
pub use frame::{
    DateFrameOutcome, append_date_columns, append_date_columns_lenient, append_token_columns,
};
pub use normalization::{
    normalize_date, normalize_dates, normalize_dates_par, normalize_each, normalize_record,
    parse_time_of_day,
};
pub use text::{ArabicTextCleaner, CleanerOptions, tokenize};
