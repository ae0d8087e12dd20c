//! Stop-word source resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::LexiconError;
use crate::registry::LexiconRegistry;
use crate::stopwords::StopWordSet;

/// Environment variable naming a lexicon directory (a folder with `manifest.toml`).
pub const LEXICON_ENV_VAR: &str = "ARABIC_POSTS_LEXICON_DIR";

/// Where the active stop-word set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopWordSource {
    /// A verified lexicon directory.
    Directory(PathBuf),
    /// The list compiled into the binary.
    Builtin,
}

/// Directory configured through [`LEXICON_ENV_VAR`], if any.
pub fn lexicon_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(LEXICON_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Pick the stop-word set for this process.
///
/// Resolution order:
/// 1. `explicit` directory (CLI flag)
/// 2. `ARABIC_POSTS_LEXICON_DIR` environment variable
/// 3. the built-in list
pub fn resolve_stop_words(
    explicit: Option<&Path>,
) -> Result<(Arc<StopWordSet>, StopWordSource), LexiconError> {
    let dir = explicit.map(Path::to_path_buf).or_else(lexicon_dir_from_env);
    match dir {
        Some(dir) => {
            let (registry, _summary) = LexiconRegistry::verify_and_load(&dir)?;
            Ok((
                Arc::new(registry.stop_words),
                StopWordSource::Directory(dir),
            ))
        }
        None => {
            debug!("using built-in stop-word list");
            Ok((StopWordSet::shared_builtin(), StopWordSource::Builtin))
        }
    }
}
