//! Property tests for the stop-word set.

use posts_lexicon::{StopWordSet, strip_tashkeel};
use proptest::prelude::*;

fn diacritized() -> impl Strategy<Value = String> {
    // Arabic letters interleaved with optional harakat.
    prop::collection::vec(
        (
            prop::char::range('\u{0628}', '\u{063A}'),
            prop::option::of(prop::char::range('\u{064B}', '\u{0652}')),
        ),
        1..8,
    )
    .prop_map(|pairs| {
        let mut word = String::new();
        for (letter, mark) in pairs {
            word.push(letter);
            if let Some(mark) = mark {
                word.push(mark);
            }
        }
        word
    })
}

proptest! {
    #[test]
    fn membership_ignores_diacritization(word in diacritized()) {
        let set = StopWordSet::from_words("prop", [word.as_str()]);
        prop_assert!(set.contains(&strip_tashkeel(&word)));
    }

    #[test]
    fn stripping_is_idempotent(word in diacritized()) {
        let once = strip_tashkeel(&word);
        prop_assert_eq!(strip_tashkeel(&once), once);
    }
}
