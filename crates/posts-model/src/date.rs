//! Structured calendar fields derived from a composite date-time string.

use serde::{Deserialize, Serialize};

/// Calendar fields split out of one `"<weekday> <day> <month> <year>-<time>"` value.
///
/// Day, month and year keep the spelling found in the source (month names are
/// common), only `hour` is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedDate {
    pub weekday: String,
    pub day: String,
    pub month: String,
    pub year: String,
    /// Trimmed time-of-day text as it appeared after the separator.
    pub time: String,
    /// Hour of `time`, always in `0..=23`.
    pub hour: u32,
}

/// Parallel output columns of a batch normalization, aligned by record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumns {
    pub weekday: Vec<String>,
    pub day: Vec<String>,
    pub month: Vec<String>,
    pub year: Vec<String>,
    pub time: Vec<String>,
    pub hour: Vec<u32>,
}

impl DateColumns {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weekday: Vec::with_capacity(capacity),
            day: Vec::with_capacity(capacity),
            month: Vec::with_capacity(capacity),
            year: Vec::with_capacity(capacity),
            time: Vec::with_capacity(capacity),
            hour: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, date: NormalizedDate) {
        self.weekday.push(date.weekday);
        self.day.push(date.day);
        self.month.push(date.month);
        self.year.push(date.year);
        self.time.push(date.time);
        self.hour.push(date.hour);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hour.is_empty()
    }

    /// Rebuild the record at `idx`.
    pub fn get(&self, idx: usize) -> Option<NormalizedDate> {
        Some(NormalizedDate {
            weekday: self.weekday.get(idx)?.clone(),
            day: self.day.get(idx)?.clone(),
            month: self.month.get(idx)?.clone(),
            year: self.year.get(idx)?.clone(),
            time: self.time.get(idx)?.clone(),
            hour: *self.hour.get(idx)?,
        })
    }
}

impl FromIterator<NormalizedDate> for DateColumns {
    fn from_iter<I: IntoIterator<Item = NormalizedDate>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut columns = Self::with_capacity(iter.size_hint().0);
        for date in iter {
            columns.push(date);
        }
        columns
    }
}
