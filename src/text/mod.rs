// Text utilities shared by the preprocessor, the summarizers and the scorer.
//
// Turkish has a dotted and a dotless i, so lowercasing goes through
// `turkish_lowercase` instead of `str::to_lowercase` everywhere in the crate.

pub mod sentences;
pub mod stem;

use unicode_segmentation::UnicodeSegmentation;

pub use sentences::SentenceSegmenter;
pub use stem::TurkishStemmer;

/// Lowercase text using Turkish casing rules (`I` → `ı`, `İ` → `i`).
pub fn turkish_lowercase(text: &str) -> String {
    let mut lowered = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => lowered.push('ı'),
            'İ' => lowered.push('i'),
            _ => lowered.extend(c.to_lowercase()),
        }
    }
    lowered
}

/// True when the character starts a word in lowercase (`ı`, `ş`, `ç`, ...).
pub fn is_lowercase_start(c: char) -> bool {
    c.is_lowercase()
}

/// Split text into lowercase words on Unicode word boundaries.
///
/// Punctuation and whitespace are dropped. Apostrophe suffixes stay attached
/// (`Ayşe'nin` is one word), which is how Turkish proper-noun inflection is
/// written.
pub fn words(text: &str) -> Vec<String> {
    text.unicode_words().map(turkish_lowercase).collect()
}
