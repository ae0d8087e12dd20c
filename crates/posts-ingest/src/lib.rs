//! Loading the posts dataset.
//!
//! - **csv**: UTF-8 CSV to polars `DataFrame`, every column kept as text
//! - **records**: typed [`Record`](posts_model::Record) extraction
//! - **polars_utils**: typed column access

pub mod csv;
pub mod error;
pub mod polars_utils;
pub mod records;

pub use csv::{MAX_CSV_FILE_SIZE, check_file_size, read_posts_csv, validate_encoding};
pub use error::{IngestError, Result};
pub use polars_utils::string_column;
pub use records::{DATE_COLUMN, TEXT_COLUMN, records, require_columns};
