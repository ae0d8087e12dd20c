//! The canonical Arabic stop-word set.
//!
//! A set is built once and then only read. Entries are canonicalized with
//! [`strip_tashkeel`] so membership checks on stripped tokens succeed no matter
//! how the source list was diacritized.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::arabic::strip_tashkeel;
use crate::error::LexiconError;

/// Version tag of the list compiled into the binary.
pub const BUILTIN_VERSION: &str = "builtin-2";

const BUILTIN_STOP_WORDS: &str = include_str!("../data/stopwords/builtin.txt");

static SHARED_BUILTIN: OnceLock<Arc<StopWordSet>> = OnceLock::new();

/// Immutable set of Arabic function words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    version: String,
    words: BTreeSet<String>,
}

impl StopWordSet {
    /// Build a set from arbitrary entries.
    pub fn from_words<I, S>(version: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| strip_tashkeel(word.as_ref().trim()))
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            version: version.into(),
            words,
        }
    }

    /// Parse the line-oriented list format.
    ///
    /// One entry per line; blank lines and `#` comments are skipped.
    pub fn parse(version: impl Into<String>, source: &str) -> Self {
        Self::from_words(
            version,
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a list file from disk.
    pub fn load(path: &Path, version: impl Into<String>) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        let set = Self::parse(version, &contents);
        if set.is_empty() {
            return Err(LexiconError::EmptyStopWords {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), entries = set.len(), "loaded stop words");
        Ok(set)
    }

    /// The list compiled into the binary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_VERSION, BUILTIN_STOP_WORDS)
    }

    /// Process-wide shared copy of the built-in list, parsed on first use.
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(SHARED_BUILTIN.get_or_init(|| Arc::new(Self::builtin())))
    }

    /// Membership test against the canonical (undiacritized) form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let set = StopWordSet::parse("t", "# header\n\nمن\n  في  \n# tail\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("من"));
        assert!(set.contains("في"));
        assert_eq!(set.version(), "t");
    }

    #[test]
    fn test_entries_are_canonicalized() {
        let set = StopWordSet::from_words("t", ["مِنْ", "إِلَى"]);
        assert!(set.contains("من"));
        assert!(set.contains("إلى"));
        assert!(!set.contains("مِنْ"));
    }

    #[test]
    fn test_builtin_has_core_function_words() {
        let set = StopWordSet::builtin();
        assert_eq!(set.version(), BUILTIN_VERSION);
        for word in ["من", "في", "على", "إلى", "هذا", "الذي", "و", "أن"] {
            assert!(set.contains(word), "{word} missing from builtin list");
        }
        assert!(!set.contains("كتاب"));
        assert!(set.iter().all(|word| !word.is_empty()));
    }

    #[test]
    fn test_builtin_has_prefixed_forms() {
        let set = StopWordSet::builtin();
        for word in ["بهذا", "والتي", "وهذا", "لذلك", "فهو", "ومن"] {
            assert!(set.contains(word), "{word} missing from builtin list");
        }
    }

    #[test]
    fn test_shared_builtin_is_loaded_once() {
        let a = StopWordSet::shared_builtin();
        let b = StopWordSet::shared_builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
