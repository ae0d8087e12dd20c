//! Batch date normalization.
//!
//! Every record is normalized on its own; outputs stay aligned with the
//! input order and each record keeps its own year.

use posts_model::{BatchError, DateColumns, DateError, NormalizedDate, Record};
use rayon::prelude::*;
use tracing::{debug, info};

use super::date::normalize_date;

/// Normalize a possibly-null cell. A null is a malformed value.
pub fn normalize_value(value: Option<&str>) -> Result<NormalizedDate, DateError> {
    match value {
        Some(value) => normalize_date(value),
        None => Err(DateError::malformed("", "missing value")),
    }
}

/// Normalize the `date` field of one record.
pub fn normalize_record(record: &Record) -> Result<NormalizedDate, DateError> {
    normalize_value(record.date())
}

/// Per-record results, in input order, for callers that skip or log failures.
pub fn normalize_each<'a, I>(values: I) -> Vec<Result<NormalizedDate, DateError>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().map(normalize_value).collect()
}

/// Normalize every value, stopping at the first failure.
///
/// # Errors
///
/// Returns the zero-based row and cause of the first value that fails.
pub fn normalize_dates<'a, I>(values: I) -> Result<DateColumns, BatchError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let iter = values.into_iter();
    let mut columns = DateColumns::with_capacity(iter.size_hint().0);
    for (row, value) in iter.enumerate() {
        let date = normalize_value(value).map_err(|source| BatchError { row, source })?;
        columns.push(date);
    }
    debug!(rows = columns.len(), "normalized dates");
    Ok(columns)
}

/// Same contract as [`normalize_dates`], sharded across the rayon pool.
///
/// The reported error is always the lowest failing row.
pub fn normalize_dates_par(values: &[Option<&str>]) -> Result<DateColumns, BatchError> {
    let results: Vec<Result<NormalizedDate, DateError>> = values
        .par_iter()
        .map(|value| normalize_value(*value))
        .collect();

    let mut columns = DateColumns::with_capacity(results.len());
    for (row, result) in results.into_iter().enumerate() {
        columns.push(result.map_err(|source| BatchError { row, source })?);
    }
    info!(
        rows = columns.len(),
        threads = rayon::current_num_threads(),
        "normalized dates in parallel"
    );
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_record_keeps_its_year() {
        let columns = normalize_dates([
            Some("Mon 12 Jan 2020-14:35"),
            Some("Tue 13 Jan 2021-08:00"),
            Some("Wed 14 Jan 2022-23:10"),
        ])
        .unwrap();
        assert_eq!(columns.year, vec!["2020", "2021", "2022"]);
        assert_eq!(columns.hour, vec![14, 8, 23]);
    }

    #[test]
    fn test_first_failure_reports_row() {
        let err = normalize_dates([
            Some("Mon 12 Jan 2020-14:35"),
            Some("broken"),
            Some("Wed 14 Jan 2022-xx"),
        ])
        .unwrap_err();
        assert_eq!(err.row, 1);
        assert!(matches!(err.source, DateError::MalformedDate { .. }));
    }

    #[test]
    fn test_null_is_malformed() {
        let results = normalize_each([None, Some("Mon 12 Jan 2020-14:35")]);
        assert!(matches!(results[0], Err(DateError::MalformedDate { .. })));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let values: Vec<Option<&str>> = vec![
            Some("Mon 12 Jan 2020-14:35"),
            Some("Tue 13 Feb 2021-2 PM"),
            Some("Wed 14 Mar 2022-00:01"),
        ];
        let sequential = normalize_dates(values.iter().copied()).unwrap();
        let parallel = normalize_dates_par(&values).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_reports_lowest_row() {
        let values: Vec<Option<&str>> = vec![
            Some("Mon 12 Jan 2020-14:35"),
            Some("Tue 13 Feb 2021-bad"),
            None,
        ];
        let err = normalize_dates_par(&values).unwrap_err();
        assert_eq!(err.row, 1);
        assert!(matches!(err.source, DateError::UnparseableTime { .. }));
    }

    #[test]
    fn test_normalize_record() {
        let date = normalize_record(&Record::new("Sat 3 Feb 2024-07:05", "نص")).unwrap();
        assert_eq!(date.year, "2024");
        assert_eq!(date.hour, 7);
        assert!(matches!(
            normalize_record(&Record::default()),
            Err(DateError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_empty_batch() {
        let columns = normalize_dates(std::iter::empty()).unwrap();
        assert!(columns.is_empty());
    }
}
