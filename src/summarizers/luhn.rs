// Luhn: sentences rated by their densest cluster of significant words.
//
// A term is significant when it occurs more than once in the document. Each
// sentence is scanned for chunks that start at a significant word and stop
// after `max_gap` insignificant words in a row. A chunk rates
// significant² / length, and a sentence gets its best chunk's rating.

use std::collections::{HashMap, HashSet};

use super::document::{Document, Sentence};
use super::traits::Summarizer;

#[derive(Debug, Clone)]
pub struct LuhnSummarizer {
    /// Insignificant words allowed inside a chunk before it closes.
    pub max_gap: usize,
    /// Share of distinct terms (by frequency) eligible to be significant.
    pub significant_percentage: f64,
}

impl Default for LuhnSummarizer {
    fn default() -> Self {
        Self {
            max_gap: 4,
            significant_percentage: 1.0,
        }
    }
}

impl Summarizer for LuhnSummarizer {
    fn name(&self) -> &'static str {
        "Luhn"
    }

    fn rate_sentences(&self, document: &Document) -> Vec<f64> {
        let significant = self.significant_terms(document);
        document
            .sentences
            .iter()
            .map(|s| self.rate_sentence(s, &significant))
            .collect()
    }
}

impl LuhnSummarizer {
    /// Terms that occur more than once, limited to the most frequent share.
    pub fn significant_terms<'d>(&self, document: &'d Document) -> HashSet<&'d str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0usize;
        for sentence in &document.sentences {
            for term in &sentence.terms {
                *counts.entry(term.as_str()).or_insert(0) += 1;
                total += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let keep = (total as f64 * self.significant_percentage) as usize;

        ranked
            .into_iter()
            .take(keep)
            .filter(|&(_, count)| count > 1)
            .map(|(term, _)| term)
            .collect()
    }

    fn rate_sentence(&self, sentence: &Sentence, significant: &HashSet<&str>) -> f64 {
        let mut chunks: Vec<Vec<bool>> = Vec::new();
        let mut in_chunk = false;

        for stem in &sentence.stems {
            let is_significant = significant.contains(stem.as_str());
            if is_significant && !in_chunk {
                in_chunk = true;
                chunks.push(vec![true]);
            } else if in_chunk {
                if let Some(chunk) = chunks.last_mut() {
                    chunk.push(is_significant);
                }
            }

            if let Some(chunk) = chunks.last() {
                let gap_closed = chunk.len() >= self.max_gap
                    && chunk[chunk.len() - self.max_gap..].iter().all(|&s| !s);
                if gap_closed {
                    in_chunk = false;
                }
            }
        }

        chunks
            .iter()
            .map(|chunk| chunk_rating(chunk))
            .fold(0.0, f64::max)
    }
}

/// significant² / chunk length, ignoring trailing insignificant words.
/// A chunk with a single significant word rates zero.
fn chunk_rating(chunk: &[bool]) -> f64 {
    let end = chunk.iter().rposition(|&s| s).map_or(0, |i| i + 1);
    let chunk = &chunk[..end];
    let significant = chunk.iter().filter(|&&s| s).count();
    if significant <= 1 {
        0.0
    } else {
        (significant * significant) as f64 / chunk.len() as f64
    }
}
