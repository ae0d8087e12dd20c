//! Arabic character classes used by the text cleaner.
//!
//! Tashkeel here means the eight harakat in U+064B..=U+0652: fathatan,
//! dammatan, kasratan, fatha, damma, kasra, shadda and sukun. Tatweel
//! (U+0640) is a separate, optional normalization.
//!
//! Invisible format controls (bidi marks, zero-width joiners, BOM) are their
//! own class and are never punctuation.

/// Arabic tatweel (kashida).
pub const TATWEEL: char = '\u{0640}';

/// Returns true for an Arabic diacritical mark (haraka or shadda).
pub fn is_tashkeel(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{0652}')
}

/// Returns true for punctuation marks the cleaner treats as non-words.
///
/// Covers ASCII punctuation plus the Arabic marks and the General
/// Punctuation dashes, quotes and ellipses that show up in scraped posts.
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '\u{060C}' // Arabic comma
                | '\u{061B}' // Arabic semicolon
                | '\u{061F}' // Arabic question mark
                | '\u{066A}'..='\u{066D}' // percent, decimal, thousands, five-pointed star
                | '\u{06D4}' // Arabic full stop
                | '\u{00AB}' // «
                | '\u{00BB}' // »
                | '\u{00A1}' // ¡
                | '\u{00BF}' // ¿
                | '\u{2010}'..='\u{2027}' // dashes, quotes, ellipsis
                | '\u{2030}'..='\u{205E}' // per mille, primes, reference marks
                | '\u{FD3E}' // ornate left parenthesis
                | '\u{FD3F}' // ornate right parenthesis
        )
}

/// Returns true for invisible format controls common in scraped posts.
///
/// Arabic letter mark, zero-width space and joiners, LRM/RLM, bidi
/// embeddings and isolates, word joiner and invisible operators, and the
/// byte-order mark.
pub fn is_format_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}'
            | '\u{00AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
    )
}

/// Remove every tashkeel mark from `value`.
///
/// Input without marks is copied as-is.
pub fn strip_tashkeel(value: &str) -> String {
    if !value.chars().any(is_tashkeel) {
        return value.to_string();
    }
    value.chars().filter(|ch| !is_tashkeel(*ch)).collect()
}

/// Remove every tatweel from `value`.
pub fn strip_tatweel(value: &str) -> String {
    if !value.contains(TATWEEL) {
        return value.to_string();
    }
    value.chars().filter(|ch| *ch != TATWEEL).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tashkeel() {
        assert_eq!(strip_tashkeel("كَتَبَ"), "كتب");
        assert_eq!(strip_tashkeel("مُدَرِّسٌ"), "مدرس");
        assert_eq!(strip_tashkeel("كتب"), "كتب");
        assert_eq!(strip_tashkeel("\u{064E}\u{0650}"), "");
    }

    #[test]
    fn test_strip_tatweel() {
        assert_eq!(strip_tatweel("جـــميل"), "جميل");
        assert_eq!(strip_tatweel("جميل"), "جميل");
    }

    #[test]
    fn test_tatweel_is_not_tashkeel() {
        assert!(!is_tashkeel(TATWEEL));
        assert_eq!(strip_tashkeel("جـميل"), "جـميل");
    }

    #[test]
    fn test_format_controls_are_not_punctuation() {
        for ch in ['\u{200C}', '\u{200E}', '\u{200F}', '\u{202B}', '\u{2066}', '\u{FEFF}'] {
            assert!(is_format_control(ch), "{ch:?} should be a format control");
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
        assert!(!is_format_control('ك'));
        assert!(!is_format_control(TATWEEL));
    }

    #[test]
    fn test_punctuation_classes() {
        for ch in ['.', ',', '!', '\'', '؟', '،', '؛', '«', '»', '…', '—'] {
            assert!(is_punctuation(ch), "{ch:?} should be punctuation");
        }
        for ch in ['ك', 'a', '1', '٣', '\u{064E}', ' '] {
            assert!(!is_punctuation(ch), "{ch:?} should not be punctuation");
        }
    }
}
