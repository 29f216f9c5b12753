// Parsed document model shared by all summarizers.

use tracing::debug;

use crate::resources::LanguageResources;
use crate::text::{words, TurkishStemmer};

/// A single sentence with its word-level views.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Original sentence text, exactly as segmented.
    pub text: String,
    /// Lowercased words in order, stop words included.
    pub words: Vec<String>,
    /// Stem of every entry in `words`, same order and length.
    pub stems: Vec<String>,
    /// Stems of the non-stop words only. This is the rating vocabulary.
    pub terms: Vec<String>,
}

/// A document split into sentences, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Segment and tokenize `text` with Turkish rules.
    pub fn parse(text: &str, resources: &LanguageResources) -> Self {
        let sentences = resources.segmenter().segment(text);
        Self::from_sentences(sentences, resources)
    }

    /// Build a document from sentences that are already segmented.
    pub fn from_sentences(sentences: Vec<String>, resources: &LanguageResources) -> Self {
        let stemmer = TurkishStemmer::new();

        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .map(|text| {
                let words = words(&text);
                let stems: Vec<String> = words.iter().map(|w| stemmer.stem(w)).collect();
                let terms = words
                    .iter()
                    .zip(&stems)
                    .filter(|(word, _)| !resources.is_stop_word(word))
                    .map(|(_, stem)| stem.clone())
                    .collect();
                Sentence {
                    text,
                    words,
                    stems,
                    terms,
                }
            })
            .collect();

        debug!(sentences = sentences.len(), "Parsed document");
        Self { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
