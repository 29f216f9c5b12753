// LSA: sentences rated by their weight in the latent topic space.
//
// Steinberger & Ježek (2004): build a term × sentence matrix A, take its
// singular value decomposition, and rate sentence j by
// sqrt(Σ σᵢ² · vᵢⱼ²) over the kept dimensions. The right singular vectors
// and σ² are the eigenpairs of AᵀA, which is only sentences × sentences,
// so a Jacobi eigen-solver is enough.

use std::collections::HashMap;

use super::document::Document;
use super::traits::Summarizer;

#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    /// Lower bound on the number of latent dimensions kept.
    pub min_dimensions: usize,
    /// Share of the latent dimensions kept (1.0 keeps all of them).
    pub reduction_ratio: f64,
    /// Floor applied to non-zero normalized term frequencies.
    pub smoothing: f64,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self {
            min_dimensions: 3,
            reduction_ratio: 1.0,
            smoothing: 0.4,
        }
    }
}

impl Summarizer for LsaSummarizer {
    fn name(&self) -> &'static str {
        "LSA"
    }

    fn rate_sentences(&self, document: &Document) -> Vec<f64> {
        let n = document.len();
        let matrix = self.term_sentence_matrix(document);
        if matrix.is_empty() {
            return vec![0.0; n];
        }

        // Gram matrix AᵀA (sentences × sentences)
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let dot: f64 = matrix.iter().map(|row| row[i] * row[j]).sum();
                gram[i][j] = dot;
                gram[j][i] = dot;
            }
        }

        let (eigenvalues, eigenvectors) = symmetric_eigen(gram);
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

        let dimensions = self
            .min_dimensions
            .max((n as f64 * self.reduction_ratio) as usize)
            .min(n);

        (0..n)
            .map(|sentence| {
                order
                    .iter()
                    .take(dimensions)
                    .map(|&k| eigenvalues[k].max(0.0) * eigenvectors[sentence][k].powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl LsaSummarizer {
    /// Rows are distinct terms, columns are sentences. Entries are term
    /// counts scaled by the column's largest count, smoothed by
    /// `smoothing + (1 - smoothing) * tf` for terms that occur.
    fn term_sentence_matrix(&self, document: &Document) -> Vec<Vec<f64>> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for sentence in &document.sentences {
            for term in &sentence.terms {
                let next = index.len();
                index.entry(term.as_str()).or_insert(next);
            }
        }

        let n = document.len();
        let mut matrix = vec![vec![0.0; n]; index.len()];
        for (col, sentence) in document.sentences.iter().enumerate() {
            for term in &sentence.terms {
                matrix[index[term.as_str()]][col] += 1.0;
            }
        }

        for col in 0..n {
            let max = matrix.iter().map(|row| row[col]).fold(0.0, f64::max);
            if max == 0.0 {
                continue;
            }
            for row in matrix.iter_mut() {
                if row[col] > 0.0 {
                    row[col] = self.smoothing + (1.0 - self.smoothing) * row[col] / max;
                }
            }
        }

        matrix
    }
}

/// Cyclic Jacobi eigen-decomposition of a symmetric matrix.
///
/// Returns `(eigenvalues, eigenvectors)` where column k of `eigenvectors`
/// (i.e. `eigenvectors[row][k]`) belongs to `eigenvalues[k]`. Order is
/// unspecified.
pub fn symmetric_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v = vec![vec![0.0; n]; n];
    for (i, row) in v.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for _sweep in 0..100 {
        let off: f64 = (0..n)
            .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off < 1e-22 {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q].abs() < 1e-300 {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (akp, akq) = (row[p], row[q]);
                    row[p] = c * akp - s * akq;
                    row[q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
                for row in v.iter_mut() {
                    let (vkp, vkq) = (row[p], row[q]);
                    row[p] = c * vkp - s * vkq;
                    row[q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eigenvalues = (0..n).map(|i| a[i][i]).collect();
    (eigenvalues, v)
}
