#![deny(unsafe_code)]

use crate::manifest::{ManifestFile, Pins};
use crate::paths::StopWordSource;
use crate::registry::VerifySummary;
use crate::stopwords::StopWordSet;

/// Machine-readable description of the active lexicon.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LexiconReport {
    pub schema: String,
    pub schema_version: u32,
    pub source: String,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
    pub counts: LexiconCounts,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LexiconCounts {
    pub files: usize,
    pub stop_words: usize,
}

impl LexiconReport {
    pub fn from_verify_summary(summary: &VerifySummary, files: Vec<ManifestFile>) -> Self {
        Self {
            schema: "arabic-posts.lexicon-report".to_string(),
            schema_version: 1,
            source: summary.lexicon_dir.display().to_string(),
            pins: summary.manifest_pins.clone(),
            files,
            counts: LexiconCounts {
                files: summary.file_count,
                stop_words: summary.stop_word_count,
            },
        }
    }

    /// Report for a set that did not come from a manifest.
    pub fn from_set(set: &StopWordSet, source: &StopWordSource) -> Self {
        let source = match source {
            StopWordSource::Directory(dir) => dir.display().to_string(),
            StopWordSource::Builtin => "builtin".to_string(),
        };
        Self {
            schema: "arabic-posts.lexicon-report".to_string(),
            schema_version: 1,
            source,
            pins: Pins {
                stopwords: set.version().to_string(),
            },
            files: Vec::new(),
            counts: LexiconCounts {
                files: 0,
                stop_words: set.len(),
            },
        }
    }
}
