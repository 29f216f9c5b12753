// Text preprocessing before summarization.

use tracing::debug;

use crate::resources::LanguageResources;
use crate::text::turkish_lowercase;

/// Split `text` into sentences and drop every sentence whose whole lowercased
/// text is itself a stop word. Survivors are joined with a single space.
///
/// The comparison is against entire sentences, not individual words, so in
/// practice it only removes one-word sentences such as "Ve." (without the
/// period it would match). Empty input gives an empty string.
pub fn preprocess_text(text: &str, resources: &LanguageResources) -> String {
    let sentences = resources.segmenter().segment(text);
    let total = sentences.len();

    let kept: Vec<String> = sentences
        .into_iter()
        .filter(|sentence| !resources.is_stop_word(&turkish_lowercase(sentence)))
        .collect();

    debug!(total, kept = kept.len(), "Preprocessed input text");
    kept.join(" ")
}
