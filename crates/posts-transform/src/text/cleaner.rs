//! The Arabic text-cleaning pipeline.
//!
//! Stages, in order:
//! 1. tokenize ([`tokenize`])
//! 2. drop every token containing ASCII punctuation (the whole token goes,
//!    even for a single embedded mark)
//! 3. strip tashkeel (and, optionally, tatweel)
//! 4. drop stop words
//!
//! Tokens left empty by stage 3 are dropped as well, and so are filler tokens
//! made only of non-ASCII punctuation, invisible format controls (RLM, ZWNJ,
//! bidi isolates) and tatweel. Every output is a valid [`Token`].

use std::sync::Arc;

use polars::prelude::{DataFrame, DataType, StringChunked};
use posts_lexicon::{
    StopWordSet, TATWEEL, is_format_control, is_punctuation, strip_tashkeel, strip_tatweel,
};
use posts_model::{CleanError, Record, Token};
use rayon::prelude::*;
use tracing::debug;

use super::tokenize::tokenize;
use crate::error::{Result, TransformError};

/// Optional normalizations on top of the fixed pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanerOptions {
    /// Remove tatweel (kashida) together with tashkeel.
    pub strip_tatweel: bool,
}

impl CleanerOptions {
    #[must_use]
    pub fn with_strip_tatweel(mut self, enable: bool) -> Self {
        self.strip_tatweel = enable;
        self
    }
}

/// Cleans raw Arabic text into tokens for frequency analysis.
///
/// Holds a shared, read-only stop-word set; clones are cheap and the cleaner
/// can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct ArabicTextCleaner {
    stop_words: Arc<StopWordSet>,
    options: CleanerOptions,
}

impl ArabicTextCleaner {
    pub fn new(stop_words: Arc<StopWordSet>) -> Self {
        Self {
            stop_words,
            options: CleanerOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CleanerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn options(&self) -> CleanerOptions {
        self.options
    }

    /// Clean one text value. Total over any string.
    pub fn clean(&self, text: &str) -> Vec<Token> {
        tokenize(text)
            .filter(|token| !token.chars().any(|ch| ch.is_ascii_punctuation()))
            .map(|token| self.canonical(token))
            .filter(|token| !token.chars().all(is_filler))
            .filter(|token| !self.stop_words.contains(token))
            .filter_map(Token::new)
            .collect()
    }

    /// Clean a possibly-absent value.
    ///
    /// # Errors
    ///
    /// [`CleanError::InvalidInput`] when `text` is `None`.
    pub fn clean_value(&self, text: Option<&str>) -> std::result::Result<Vec<Token>, CleanError> {
        text.map(|text| self.clean(text))
            .ok_or_else(|| CleanError::invalid("text value is null"))
    }

    /// Clean many values on the rayon pool; results keep input order.
    pub fn clean_batch(
        &self,
        texts: &[Option<&str>],
    ) -> Vec<std::result::Result<Vec<Token>, CleanError>> {
        texts
            .par_iter()
            .enumerate()
            .map(|(row, text)| match text {
                Some(text) => Ok(self.clean(text)),
                None => Err(CleanError::invalid_at(row, "text value is null")),
            })
            .collect()
    }

    /// Clean the `text` field of one record.
    ///
    /// # Errors
    ///
    /// [`CleanError::InvalidInput`] when the record has no text.
    pub fn clean_record(&self, record: &Record) -> std::result::Result<Vec<Token>, CleanError> {
        self.clean_value(record.text())
    }

    /// Clean every row of a string column.
    ///
    /// # Errors
    ///
    /// [`CleanError::InvalidInput`] for a non-string column or a null cell
    /// (tagged with its row).
    pub fn clean_column(&self, df: &DataFrame, column: &str) -> Result<Vec<Vec<Token>>> {
        let values = text_cells(df, column)?;
        let mut out = Vec::with_capacity(values.len());
        for (row, text) in values.into_iter().enumerate() {
            let text = text.ok_or_else(|| CleanError::invalid_at(row, "text value is null"))?;
            out.push(self.clean(text));
        }
        debug!(column, rows = out.len(), "cleaned text column");
        Ok(out)
    }

    /// Per-row results for a string column, for callers that skip null cells.
    ///
    /// # Errors
    ///
    /// Same column checks as [`clean_column`](Self::clean_column); null cells
    /// come back as row-tagged [`CleanError::InvalidInput`] entries instead.
    pub fn clean_column_each(
        &self,
        df: &DataFrame,
        column: &str,
    ) -> Result<Vec<std::result::Result<Vec<Token>, CleanError>>> {
        let values = text_cells(df, column)?;
        let cells: Vec<Option<&str>> = values.into_iter().collect();
        Ok(self.clean_batch(&cells))
    }

    fn canonical(&self, token: &str) -> String {
        let stripped = strip_tashkeel(token);
        if self.options.strip_tatweel {
            strip_tatweel(&stripped)
        } else {
            stripped
        }
    }
}

/// The string cells of `column`. Other dtypes are rejected, never cast.
fn text_cells<'a>(df: &'a DataFrame, column: &str) -> Result<&'a StringChunked> {
    let series = df.column(column).map_err(|_| {
        TransformError::Ingest(posts_ingest::IngestError::MissingColumn {
            column: column.to_string(),
        })
    })?;
    if series.dtype() != &DataType::String {
        return Err(CleanError::invalid(format!(
            "column '{column}' has dtype {}, expected str",
            series.dtype()
        ))
        .into());
    }
    Ok(series.str()?)
}

/// Characters that carry no word content on their own.
fn is_filler(ch: char) -> bool {
    is_punctuation(ch) || is_format_control(ch) || ch == TATWEEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn cleaner() -> ArabicTextCleaner {
        ArabicTextCleaner::new(Arc::new(StopWordSet::from_words(
            "test",
            ["في", "من", "على", "و"],
        )))
    }

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_stop_word_and_diacritics() {
        let tokens = cleaner().clean("كَتَبَ في الدفتر");
        assert_eq!(words(&tokens), vec!["كتب", "الدفتر"]);
    }

    #[test]
    fn test_embedded_punctuation_drops_whole_token() {
        // "it's" holds an apostrophe, so the whole token goes.
        let tokens = cleaner().clean("it's جميل");
        assert_eq!(words(&tokens), vec!["جميل"]);
    }

    #[test]
    fn test_arabic_punctuation_is_dropped() {
        let tokens = cleaner().clean("مرحبا، كيف الحال؟ «جيد»");
        assert_eq!(words(&tokens), vec!["مرحبا", "كيف", "الحال", "جيد"]);
    }

    #[test]
    fn test_pure_diacritics_are_dropped() {
        let tokens = cleaner().clean("\u{064E}\u{0651} كتاب");
        assert_eq!(words(&tokens), vec!["كتاب"]);
    }

    #[test]
    fn test_diacritized_stop_word_is_dropped() {
        let tokens = cleaner().clean("مِنْ البيت عَلَى الطاولة");
        assert_eq!(words(&tokens), vec!["البيت", "الطاولة"]);
    }

    #[test]
    fn test_invisible_controls_are_dropped() {
        let tokens = cleaner().clean("كتاب\u{200F} جميل");
        assert_eq!(words(&tokens), vec!["كتاب", "جميل"]);

        let tokens = cleaner().clean("مرحبا\u{200C}بك \u{2066}نص\u{2069} \u{202B}");
        assert_eq!(words(&tokens), vec!["مرحبا", "بك", "نص"]);
    }

    #[test]
    fn test_bare_tatweel_is_dropped() {
        assert!(cleaner().clean("ـ").is_empty());
        assert!(cleaner().clean("ـــ \u{200F}ـ").is_empty());
        assert_eq!(words(&cleaner().clean("ـ كتاب")), vec!["كتاب"]);
    }

    #[test]
    fn test_tatweel_option() {
        let plain = cleaner().clean("جـــميل");
        assert_eq!(words(&plain), vec!["جـــميل"]);

        let stripped = cleaner()
            .with_options(CleanerOptions::default().with_strip_tatweel(true))
            .clean("جـــميل");
        assert_eq!(words(&stripped), vec!["جميل"]);
    }

    #[test]
    fn test_clean_value_rejects_null() {
        assert!(matches!(
            cleaner().clean_value(None),
            Err(CleanError::InvalidInput { row: None, .. })
        ));
        assert!(cleaner().clean_value(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_clean_record() {
        let record = Record::new("Mon 12 Jan 2021-14:35", "كتاب في البيت");
        let tokens = cleaner().clean_record(&record).unwrap();
        assert_eq!(words(&tokens), vec!["كتاب", "البيت"]);
        assert!(matches!(
            cleaner().clean_record(&Record::default()),
            Err(CleanError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_column_paths_reject_non_string_dtype() {
        let df = df!("text" => [1i64, 2]).unwrap();
        let cleaner = cleaner();
        assert!(matches!(
            cleaner.clean_column(&df, "text"),
            Err(TransformError::Clean(CleanError::InvalidInput { row: None, .. }))
        ));
        assert!(matches!(
            cleaner.clean_column_each(&df, "text"),
            Err(TransformError::Clean(CleanError::InvalidInput { row: None, .. }))
        ));
    }

    #[test]
    fn test_clean_column_each_tags_null_rows() {
        let df = df!("text" => [Some("كتاب"), None, Some("في البيت")]).unwrap();
        let results = cleaner().clean_column_each(&df, "text").unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(words(results[0].as_ref().unwrap()), vec!["كتاب"]);
        assert!(matches!(
            results[1],
            Err(CleanError::InvalidInput { row: Some(1), .. })
        ));
        assert_eq!(words(results[2].as_ref().unwrap()), vec!["البيت"]);
    }

    #[test]
    fn test_clean_batch_tags_rows() {
        let results = cleaner().clean_batch(&[Some("كتاب"), None]);
        assert_eq!(words(results[0].as_ref().unwrap()), vec!["كتاب"]);
        assert!(matches!(
            results[1],
            Err(CleanError::InvalidInput { row: Some(1), .. })
        ));
    }
}
