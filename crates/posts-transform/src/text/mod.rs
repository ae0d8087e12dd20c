//! Arabic text cleaning.
//!
//! - **tokenize**: word-boundary splitting that keeps attached diacritics
//! - **cleaner**: the four-stage pipeline producing [`Token`](posts_model::Token)s

pub mod cleaner;
pub mod tokenize;

pub use cleaner::{ArabicTextCleaner, CleanerOptions};
pub use tokenize::{is_word_char, tokenize};
