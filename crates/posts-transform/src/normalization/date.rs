//! Composite date-time parsing.
//!
//! Input looks like `"<weekday> <day> <month> <year>-<time>"`: a single `-`
//! separates a whitespace-delimited date portion from a time-of-day. Date
//! parts are kept as written; only the hour is derived numerically.

use chrono::{NaiveTime, Timelike};
use posts_model::{DateError, NormalizedDate};

const DATE_TIME_SEPARATOR: char = '-';

/// Time-of-day layouts, tried in order.
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M:%S",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M:%S%p",
    "%I:%M%p",
];

/// Split one composite value into its calendar fields.
///
/// # Errors
///
/// - [`DateError::MalformedDate`] when the `-` separator is missing or
///   repeated, or the date portion is not exactly four tokens.
/// - [`DateError::UnparseableTime`] when the time portion is not a time of day.
pub fn normalize_date(value: &str) -> Result<NormalizedDate, DateError> {
    let mut parts = value.split(DATE_TIME_SEPARATOR);
    let (Some(date_part), Some(time_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        let reason = if value.contains(DATE_TIME_SEPARATOR) {
            "more than one '-' separator"
        } else {
            "missing '-' separator"
        };
        return Err(DateError::malformed(value, reason));
    };

    let fields: Vec<&str> = date_part.split_whitespace().collect();
    let [weekday, day, month, year] = fields.as_slice() else {
        return Err(DateError::malformed(
            value,
            format!(
                "expected 4 date fields (weekday day month year), found {}",
                fields.len()
            ),
        ));
    };

    let time = time_part.trim();
    let parsed = parse_time_of_day(time).ok_or_else(|| DateError::UnparseableTime {
        value: value.to_string(),
        time: time.to_string(),
    })?;

    Ok(NormalizedDate {
        weekday: (*weekday).to_string(),
        day: (*day).to_string(),
        month: (*month).to_string(),
        year: (*year).to_string(),
        time: time.to_string(),
        hour: parsed.hour(),
    })
}

/// Parse a trimmed time-of-day.
///
/// Accepts 24-hour (`14:35`, `14:35:10`, `14:35:10.250`) and 12-hour
/// (`2:35 PM`, `2:35pm`) clocks, plus bare hours (`14`, `2 PM`) which are
/// read as the top of the hour.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    if value.is_empty() {
        return None;
    }
    try_formats(value).or_else(|| with_zero_minutes(value).and_then(|v| try_formats(&v)))
}

fn try_formats(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

/// `"14"` -> `"14:00"`, `"2 PM"` -> `"2:00 PM"`, `"2pm"` -> `"2:00pm"`.
fn with_zero_minutes(value: &str) -> Option<String> {
    if value.contains(':') {
        return None;
    }
    let digits = value.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 2 {
        return None;
    }
    let (hour, rest) = value.split_at(digits);
    Some(format!("{hour}:00{rest}"))
}
