// Summarizer trait: the swap-ready abstraction.
//
// Each strategy only has to rate sentences. Picking the best ones and putting
// them back in document order is shared, so every strategy behaves the same
// way at the edges (count of zero, count larger than the document, ties).

use super::document::{Document, Sentence};

/// An extractive summarization strategy.
pub trait Summarizer {
    /// Human-readable strategy name for headers and logs.
    fn name(&self) -> &'static str;

    /// One rating per sentence, higher is better. Must return exactly
    /// `document.len()` values.
    fn rate_sentences(&self, document: &Document) -> Vec<f64>;

    /// The `count` best-rated sentences, in document order.
    fn summarize<'d>(&self, document: &'d Document, count: usize) -> Vec<&'d Sentence> {
        let ratings = self.rate_sentences(document);
        select_best(document, &ratings, count)
    }
}

/// Pick the `count` highest-rated sentences and return them in document order.
///
/// Ties go to the earlier sentence. Asking for more sentences than the
/// document has returns all of them.
pub fn select_best<'d>(document: &'d Document, ratings: &[f64], count: usize) -> Vec<&'d Sentence> {
    let mut order: Vec<usize> = (0..document.len()).collect();
    // sort_by is stable, so equal ratings keep document order
    order.sort_by(|&a, &b| {
        let ra = ratings.get(a).copied().unwrap_or(0.0);
        let rb = ratings.get(b).copied().unwrap_or(0.0);
        rb.total_cmp(&ra)
    });
    order.truncate(count);
    order.sort_unstable();

    order.into_iter().map(|i| &document.sentences[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::LanguageResources;

    fn doc() -> Document {
        Document::parse(
            "Bir geldi. İki geldi. Üç geldi. Dört geldi.",
            &LanguageResources::bundled(),
        )
    }

    #[test]
    fn test_select_best_returns_document_order() {
        let d = doc();
        let picked = select_best(&d, &[0.1, 0.9, 0.2, 0.8], 2);
        let texts: Vec<&str> = picked.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["İki geldi.", "Dört geldi."]);
    }

    #[test]
    fn test_select_best_ties_prefer_earlier() {
        let d = doc();
        let picked = select_best(&d, &[0.5, 0.5, 0.5, 0.5], 1);
        assert_eq!(picked[0].text, "Bir geldi.");
    }

    #[test]
    fn test_select_best_with_nan_rating() {
        let d = doc();
        let ratings = [0.1, f64::NAN, 0.9, 0.5];
        let picked = select_best(&d, &ratings, 2);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().any(|s| s.text == "Üç geldi."));
        // same input, same answer
        assert_eq!(picked, select_best(&d, &ratings, 2));
    }

    #[test]
    fn test_select_best_count_exceeds_document() {
        let d = doc();
        assert_eq!(select_best(&d, &[0.0; 4], 10).len(), 4);
        assert!(select_best(&d, &[0.0; 4], 0).is_empty());
    }
}
