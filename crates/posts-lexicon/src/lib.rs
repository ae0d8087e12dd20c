#![deny(unsafe_code)]

pub mod arabic;
pub mod doctor;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod stopwords;

pub use crate::arabic::{
    TATWEEL, is_format_control, is_punctuation, is_tashkeel, strip_tashkeel, strip_tatweel,
};
pub use crate::doctor::LexiconReport;
pub use crate::error::LexiconError;
pub use crate::paths::{
    LEXICON_ENV_VAR, StopWordSource, lexicon_dir_from_env, resolve_stop_words,
};
pub use crate::registry::{LexiconRegistry, VerifySummary};
pub use crate::stopwords::{BUILTIN_VERSION, StopWordSet};
