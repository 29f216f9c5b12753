// TextRank: sentences ranked by centrality in a word-overlap graph.
//
// Edge weight between two sentences is the number of shared terms divided by
// the sum of the log lengths, as in Mihalcea & Tarau (2004). Scores are the
// stationary distribution of a damped random walk on that graph.

use std::collections::HashMap;

use super::document::Document;
use super::ranking::PowerIteration;
use super::traits::Summarizer;

#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    pub ranking: PowerIteration,
}

impl Summarizer for TextRankSummarizer {
    fn name(&self) -> &'static str {
        "TextRank"
    }

    fn rate_sentences(&self, document: &Document) -> Vec<f64> {
        let counts: Vec<HashMap<&str, usize>> = document
            .sentences
            .iter()
            .map(|s| term_counts(&s.terms))
            .collect();
        let lengths: Vec<usize> = document.sentences.iter().map(|s| s.terms.len()).collect();

        let n = document.len();
        let mut weights = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = edge_weight(&counts[i], lengths[i], &counts[j], lengths[j]);
                weights[i][j] = w;
                weights[j][i] = w;
            }
        }

        self.ranking.run(&weights)
    }
}

fn term_counts(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Shared-term similarity normalized by log sentence lengths.
///
/// Falls back to the raw overlap when both sentences are a single term long,
/// where the log normalizer would be zero.
pub fn edge_weight(
    a: &HashMap<&str, usize>,
    len_a: usize,
    b: &HashMap<&str, usize>,
    len_b: usize,
) -> f64 {
    let overlap: usize = a
        .iter()
        .map(|(term, &ca)| ca.min(b.get(term).copied().unwrap_or(0)))
        .sum();
    if overlap == 0 {
        return 0.0;
    }

    let norm = (len_a as f64).ln() + (len_b as f64).ln();
    if norm.abs() < 1e-9 {
        overlap as f64
    } else {
        overlap as f64 / norm
    }
}
