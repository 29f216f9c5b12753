// Turkish Snowball stemming via rust-stemmers.

use rust_stemmers::{Algorithm, Stemmer};

/// Thin wrapper over the Turkish Snowball stemmer.
pub struct TurkishStemmer {
    inner: Stemmer,
}

impl Default for TurkishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TurkishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TurkishStemmer")
    }
}

impl TurkishStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::Turkish),
        }
    }

    /// Stem an already-lowercased word.
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}
