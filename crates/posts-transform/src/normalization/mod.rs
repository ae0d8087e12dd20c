//! Normalization of the composite `date` field.
//!
//! - **date**: one value to a [`NormalizedDate`](posts_model::NormalizedDate)
//! - **batch**: many values to aligned [`DateColumns`](posts_model::DateColumns)

pub mod batch;
pub mod date;

pub use batch::{
    normalize_dates, normalize_dates_par, normalize_each, normalize_record, normalize_value,
};
pub use date::{normalize_date, parse_time_of_day};
