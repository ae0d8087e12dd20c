//! Arabic-aware tokenization.
//!
//! Text is split on whitespace first. Inside each chunk, maximal runs of word
//! characters alternate with maximal runs of everything else, and both kinds
//! of run are emitted. Word characters are alphanumerics, `_`, the apostrophe,
//! tashkeel and the superscript alef, so diacritics stay attached to their
//! letters at this stage.

use posts_lexicon::is_tashkeel;

const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Returns true for characters that belong inside a word token.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\'' || ch == SUPERSCRIPT_ALEF || is_tashkeel(ch)
}

/// Split `text` into word and non-word runs, in order.
///
/// Tokens are never empty and never contain whitespace.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace().flat_map(Runs::new)
}

/// Iterator over alternating word / non-word runs of one chunk.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(chunk: &'a str) -> Self {
        Self { rest: chunk }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let word = is_word_char(first);
        let end = self
            .rest
            .char_indices()
            .find(|(_, ch)| is_word_char(*ch) != word)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_whitespace_and_punctuation_boundaries() {
        assert_eq!(
            tokens("ذهب الولد، إلى المدرسة!"),
            vec!["ذهب", "الولد", "،", "إلى", "المدرسة", "!"]
        );
    }

    #[test]
    fn test_diacritics_stay_attached() {
        assert_eq!(tokens("كَتَبَ الدَّرْسَ"), vec!["كَتَبَ", "الدَّرْسَ"]);
    }

    #[test]
    fn test_apostrophe_is_part_of_word() {
        assert_eq!(tokens("it's ok."), vec!["it's", "ok", "."]);
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(tokens("(مرحبا)..."), vec!["(", "مرحبا", ")..."]);
        assert_eq!(tokens("#وسم"), vec!["#", "وسم"]);
        assert_eq!(tokens("2021/01"), vec!["2021", "/", "01"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "الجو جميل";
        assert_eq!(tokens(text), tokens(text));
    }
}
