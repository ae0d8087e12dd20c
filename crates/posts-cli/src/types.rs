use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one `dates` or `clean` run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub command: &'static str,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows_in: usize,
    pub rows_out: usize,
    pub skipped: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// One line of the JSON Lines output of `clean`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TokenRow<'a> {
    pub row: usize,
    pub tokens: Vec<&'a str>,
}
