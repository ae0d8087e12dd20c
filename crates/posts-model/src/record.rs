#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One row of the posts dataset.
///
/// Only the two fields the pipeline reads are modelled. `None` stands for an
/// absent or null cell in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw composite date-time, e.g. `"Mon 12 Jan 2021-14:35"`.
    pub date: Option<String>,
    /// Raw Arabic post body.
    pub text: Option<String>,
}

impl Record {
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            text: Some(text.into()),
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
