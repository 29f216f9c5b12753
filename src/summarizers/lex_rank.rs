// LexRank: eigenvector centrality over a thresholded TF-IDF cosine graph.
//
// Erkan & Radev (2004): sentences are TF-IDF vectors, pairs whose cosine
// similarity exceeds the threshold are linked, and the stationary
// distribution of the resulting Markov chain gives each sentence's score.

use std::collections::{HashMap, HashSet};

use super::document::Document;
use super::ranking::PowerIteration;
use super::traits::Summarizer;

#[derive(Debug, Clone)]
pub struct LexRankSummarizer {
    /// Minimum cosine similarity for two sentences to be linked.
    pub threshold: f64,
    pub ranking: PowerIteration,
}

impl Default for LexRankSummarizer {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            ranking: PowerIteration::default(),
        }
    }
}

impl Summarizer for LexRankSummarizer {
    fn name(&self) -> &'static str {
        "LexRank"
    }

    fn rate_sentences(&self, document: &Document) -> Vec<f64> {
        let n = document.len();
        let tf: Vec<HashMap<&str, f64>> = document
            .sentences
            .iter()
            .map(|s| normalized_tf(&s.terms))
            .collect();
        let idf = idf(&tf, n);

        let mut weights = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let similarity = idf_modified_cosine(&tf[i], &tf[j], &idf);
                if similarity > self.threshold {
                    weights[i][j] = 1.0;
                    weights[j][i] = 1.0;
                }
            }
        }

        self.ranking.run(&weights)
    }
}

/// Term frequencies scaled by the most frequent term in the sentence.
fn normalized_tf(terms: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    let max = counts.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for value in counts.values_mut() {
            *value /= max;
        }
    }
    counts
}

/// Smoothed inverse document frequency: ln(N / (1 + n_t)).
fn idf<'a>(tf: &[HashMap<&'a str, f64>], sentence_count: usize) -> HashMap<&'a str, f64> {
    let mut containing: HashMap<&'a str, usize> = HashMap::new();
    for sentence in tf {
        let unique: HashSet<&'a str> = sentence.keys().copied().collect();
        for term in unique {
            *containing.entry(term).or_insert(0) += 1;
        }
    }

    containing
        .into_iter()
        .map(|(term, n)| (term, (sentence_count as f64 / (1.0 + n as f64)).ln()))
        .collect()
}

/// Cosine similarity of the TF-IDF vectors of two sentences.
pub(crate) fn idf_modified_cosine(
    a: &HashMap<&str, f64>,
    b: &HashMap<&str, f64>,
    idf: &HashMap<&str, f64>,
) -> f64 {
    let weight = |term: &str| idf.get(term).copied().unwrap_or(0.0);

    let numerator: f64 = a
        .iter()
        .filter_map(|(term, tf_a)| b.get(term).map(|tf_b| tf_a * tf_b * weight(*term).powi(2)))
        .sum();

    let norm = |v: &HashMap<&str, f64>| -> f64 {
        v.iter()
            .map(|(term, tf)| (tf * weight(*term)).powi(2))
            .sum::<f64>()
            .sqrt()
    };

    let denominator = norm(a) * norm(b);
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::LanguageResources;

    #[test]
    fn test_rates_every_sentence() {
        let doc = Document::parse(
            "Ekonomi bu yıl büyüdü. Ekonomi uzmanları büyüme bekliyordu. \
             Futbol maçı berabere bitti. Enflasyon ekonomi için risk oluşturdu.",
            &LanguageResources::bundled(),
        );
        let ratings = LexRankSummarizer::default().rate_sentences(&doc);
        assert_eq!(ratings.len(), 4);
        let sum: f64 = ratings.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_of_identical_vectors() {
        let terms = vec!["kedi".to_string(), "bahçe".to_string()];
        let other = vec!["köpek".to_string()];
        let tf_a = normalized_tf(&terms);
        let tf_b = normalized_tf(&other);
        let idf = idf(&[tf_a.clone(), tf_b.clone(), tf_b.clone(), tf_b.clone()], 4);
        let sim = idf_modified_cosine(&tf_a, &tf_a, &idf);
        assert!((sim - 1.0).abs() < 1e-9, "got {sim}");
        assert_eq!(idf_modified_cosine(&tf_a, &tf_b, &idf), 0.0);
    }

    #[test]
    fn test_normalized_tf_scales_by_max() {
        let terms = vec!["a".to_string(), "a".to_string(), "b".to_string()];
        let tf = normalized_tf(&terms);
        assert_eq!(tf["a"], 1.0);
        assert_eq!(tf["b"], 0.5);
    }
}
