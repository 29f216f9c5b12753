// ROUGE scoring: n-gram overlap, longest common subsequence, and
// weighted LCS between a candidate summary and a reference.
//
// Both texts go through the same token pipeline: optional length limit,
// Turkish lowercasing, every non-alphanumeric character treated as a
// separator, then Turkish stemming of tokens longer than three characters.

use std::collections::HashMap;

use tracing::debug;

use super::traits::{Measures, ScoreReport, SummaryScorer};
use crate::error::{OzetError, Result};
use crate::text::{turkish_lowercase, TurkishStemmer};

/// Unit for the length limit applied before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLimit {
    Words,
    Bytes,
}

/// Scoring parameters. The default is the configuration the CLI uses.
#[derive(Debug, Clone)]
pub struct RougeConfig {
    /// ROUGE-1 through ROUGE-`max_n`
    pub max_n: usize,
    pub rouge_l: bool,
    pub rouge_w: bool,
    pub limit_length: bool,
    pub length_limit: usize,
    pub length_limit_type: LengthLimit,
    /// Pool counts over references in `score_many`
    pub apply_avg: bool,
    /// Keep the highest-recall reference per metric when not pooling
    pub apply_best: bool,
    /// Precision weight in the F-score (0.5 is the harmonic mean)
    pub alpha: f64,
    /// Exponent for the ROUGE-W weighting function
    pub weight_factor: f64,
    pub stemming: bool,
}

impl Default for RougeConfig {
    fn default() -> Self {
        Self {
            max_n: 2,
            rouge_l: true,
            rouge_w: true,
            limit_length: true,
            length_limit: 100,
            length_limit_type: LengthLimit::Words,
            apply_avg: true,
            apply_best: true,
            alpha: 0.5,
            weight_factor: 1.2,
            stemming: true,
        }
    }
}

/// Native ROUGE scorer.
#[derive(Debug, Default)]
pub struct Rouge {
    pub config: RougeConfig,
    stemmer: TurkishStemmer,
}

impl Rouge {
    pub fn new(config: RougeConfig) -> Self {
        Self {
            config,
            stemmer: TurkishStemmer::new(),
        }
    }

    /// Run the token pipeline on a summary.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let limited = self.apply_length_limit(text);
        let lowered = turkish_lowercase(&limited);
        let cleaned: String = lowered
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .map(|token| {
                if self.config.stemming && token.chars().count() > 3 {
                    self.stemmer.stem(token)
                } else {
                    token.to_string()
                }
            })
            .collect()
    }

    fn apply_length_limit(&self, text: &str) -> String {
        if !self.config.limit_length {
            return text.to_string();
        }
        match self.config.length_limit_type {
            LengthLimit::Words => text
                .split_whitespace()
                .take(self.config.length_limit)
                .collect::<Vec<_>>()
                .join(" "),
            LengthLimit::Bytes => {
                let mut end = text.len().min(self.config.length_limit);
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                text[..end].to_string()
            }
        }
    }

    /// Score already-tokenized candidate and reference sequences.
    pub fn score_tokens(&self, candidate: &[String], reference: &[String]) -> ScoreReport {
        self.report(&self.overlaps(candidate, reference))
    }

    /// Score several candidates, each against one or more references.
    ///
    /// With `apply_avg`, each metric's counts are pooled over a candidate's
    /// references before P/R/F are computed. Otherwise, with `apply_best`,
    /// each metric keeps the reference with the highest recall. Either way
    /// the per-candidate reports are then averaged into one. With neither
    /// flag every candidate/reference pair is reported on its own.
    pub fn score_many(
        &self,
        candidates: &[String],
        references: &[Vec<String>],
    ) -> Result<RougeScores> {
        if candidates.is_empty() {
            return Err(OzetError::InvalidInput("no candidate summaries".to_string()));
        }
        if candidates.len() != references.len() {
            return Err(OzetError::InvalidInput(format!(
                "{} candidates but {} reference sets",
                candidates.len(),
                references.len()
            )));
        }

        let mut aggregated = Vec::with_capacity(candidates.len());
        let mut per_reference: Vec<Vec<ScoreReport>> = Vec::new();
        for (candidate, refs) in candidates.iter().zip(references) {
            if refs.is_empty() {
                return Err(OzetError::InvalidInput(
                    "candidate has no reference summaries".to_string(),
                ));
            }
            let cand_tokens = self.prepare(candidate, "candidate summary")?;
            let counts = refs
                .iter()
                .map(|reference| -> Result<Vec<(String, Overlap)>> {
                    let ref_tokens = self.prepare(reference, "reference summary")?;
                    Ok(self.overlaps(&cand_tokens, &ref_tokens))
                })
                .collect::<Result<Vec<_>>>()?;

            if self.config.apply_avg {
                aggregated.push(self.report(&pooled(&counts)));
            } else if self.config.apply_best {
                let reports: Vec<ScoreReport> = counts.iter().map(|c| self.report(c)).collect();
                aggregated.push(ScoreReport::best(&reports));
            } else {
                per_reference.push(counts.iter().map(|c| self.report(c)).collect());
            }
        }

        if self.config.apply_avg || self.config.apply_best {
            Ok(RougeScores::Aggregate(ScoreReport::average(&aggregated)))
        } else {
            Ok(RougeScores::PerReference(per_reference))
        }
    }

    /// Reject blank input, then run the token pipeline.
    fn prepare(&self, text: &str, what: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Err(OzetError::InvalidInput(format!("{what} is empty")));
        }
        Ok(self.tokenize(text))
    }

    /// Raw counts for every configured metric, in report order.
    fn overlaps(&self, candidate: &[String], reference: &[String]) -> Vec<(String, Overlap)> {
        let mut counts = Vec::new();

        for n in 1..=self.config.max_n {
            let (overlap, cand_total, ref_total) = ngram_overlap(candidate, reference, n);
            counts.push((
                format!("rouge-{n}"),
                Overlap::new(overlap as f64, cand_total as f64, ref_total as f64),
            ));
        }

        if self.config.rouge_l {
            let lcs = lcs_length(candidate, reference) as f64;
            counts.push((
                "rouge-l".to_string(),
                Overlap::new(lcs, candidate.len() as f64, reference.len() as f64),
            ));
        }

        if self.config.rouge_w {
            let w = self.config.weight_factor;
            let overlap = Overlap {
                exponent: w,
                ..Overlap::new(
                    weighted_lcs(candidate, reference, w),
                    weight(candidate.len(), w),
                    weight(reference.len(), w),
                )
            };
            counts.push(("rouge-w".to_string(), overlap));
        }

        counts
    }

    fn report(&self, counts: &[(String, Overlap)]) -> ScoreReport {
        let mut report = ScoreReport::new();
        for (metric, overlap) in counts {
            report.insert(metric.as_str(), overlap.measures(self.config.alpha));
        }
        report
    }
}

/// How `score_many` aggregated its input.
#[derive(Debug, Clone, PartialEq)]
pub enum RougeScores {
    /// Mean over candidates, used when `apply_avg` or `apply_best` is set.
    Aggregate(ScoreReport),
    /// `[candidate][reference]` reports, used when neither flag is set.
    PerReference(Vec<Vec<ScoreReport>>),
}

/// Matched units for one metric and the totals they are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Overlap {
    matched: f64,
    candidate: f64,
    reference: f64,
    /// Weighting exponent undone on P and R (1.0 except for ROUGE-W).
    exponent: f64,
}

impl Overlap {
    fn new(matched: f64, candidate: f64, reference: f64) -> Self {
        Self {
            matched,
            candidate,
            reference,
            exponent: 1.0,
        }
    }

    fn measures(&self, alpha: f64) -> Measures {
        Measures::from_precision_recall(
            inverse_weight(ratio(self.matched, self.candidate), self.exponent),
            inverse_weight(ratio(self.matched, self.reference), self.exponent),
            alpha,
        )
    }
}

/// Sum each metric's counts over several references.
fn pooled(counts: &[Vec<(String, Overlap)>]) -> Vec<(String, Overlap)> {
    let mut totals: Vec<(String, Overlap)> = Vec::new();
    for per_reference in counts {
        for (metric, overlap) in per_reference {
            match totals.iter_mut().find(|(name, _)| name == metric) {
                Some((_, total)) => {
                    total.matched += overlap.matched;
                    total.candidate += overlap.candidate;
                    total.reference += overlap.reference;
                }
                None => totals.push((metric.clone(), *overlap)),
            }
        }
    }
    totals
}

impl SummaryScorer for Rouge {
    fn score(&self, candidate: &str, reference: &str) -> Result<ScoreReport> {
        let cand_tokens = self.prepare(candidate, "candidate summary")?;
        let ref_tokens = self.prepare(reference, "reference summary")?;
        debug!(
            candidate_tokens = cand_tokens.len(),
            reference_tokens = ref_tokens.len(),
            "Scoring summary"
        );

        Ok(self.score_tokens(&cand_tokens, &ref_tokens))
    }
}

/// Score `summary` against `reference` with the default configuration.
pub fn evaluate_rouge(reference: &str, summary: &str) -> Result<ScoreReport> {
    Rouge::default().score(summary, reference)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Clipped n-gram overlap plus the n-gram totals on each side.
fn ngram_overlap(candidate: &[String], reference: &[String], n: usize) -> (usize, usize, usize) {
    let cand = ngram_counts(candidate, n);
    let refs = ngram_counts(reference, n);

    let overlap = cand
        .iter()
        .map(|(gram, &c)| c.min(refs.get(gram).copied().unwrap_or(0)))
        .sum();
    let cand_total = candidate.len().saturating_sub(n - 1);
    let ref_total = reference.len().saturating_sub(n - 1);
    (overlap, cand_total, ref_total)
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn weight(k: usize, w: f64) -> f64 {
    (k as f64).powf(w)
}

fn inverse_weight(x: f64, w: f64) -> f64 {
    x.powf(1.0 / w)
}

/// Weighted LCS (Lin 2004): consecutive matches are rewarded by
/// f(k) = k^w so longer unbroken runs count for more.
fn weighted_lcs(a: &[String], b: &[String], w: f64) -> f64 {
    let cols = b.len() + 1;
    let mut score = vec![vec![0.0f64; cols]; a.len() + 1];
    let mut run = vec![vec![0usize; cols]; a.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                let k = run[i - 1][j - 1];
                score[i][j] = score[i - 1][j - 1] + weight(k + 1, w) - weight(k, w);
                run[i][j] = k + 1;
            } else {
                score[i][j] = score[i - 1][j].max(score[i][j - 1]);
                run[i][j] = 0;
            }
        }
    }
    score[a.len()][b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length(&toks(&["a", "b", "c", "d"]), &toks(&["a", "c", "d"])), 3);
        assert_eq!(lcs_length(&toks(&["a"]), &toks(&["b"])), 0);
        assert_eq!(lcs_length(&[], &toks(&["b"])), 0);
    }

    #[test]
    fn test_weighted_lcs_prefers_consecutive_matches() {
        let reference = toks(&["a", "b", "c", "d"]);
        let consecutive = weighted_lcs(&toks(&["a", "b", "x", "y"]), &reference, 1.2);
        let scattered = weighted_lcs(&toks(&["a", "x", "b", "y"]), &reference, 1.2);
        assert!(consecutive > scattered);
    }

    #[test]
    fn test_weighted_lcs_identical_is_full_weight() {
        let t = toks(&["a", "b", "c"]);
        assert!((weighted_lcs(&t, &t, 1.2) - weight(3, 1.2)).abs() < 1e-9);
    }

    #[test]
    fn test_ngram_overlap_is_clipped() {
        let (overlap, cand, refs) =
            ngram_overlap(&toks(&["a", "a", "a"]), &toks(&["a", "b"]), 1);
        assert_eq!((overlap, cand, refs), (1, 3, 2));
    }

    #[test]
    fn test_bigrams_of_short_text() {
        let (overlap, cand, _) = ngram_overlap(&toks(&["a"]), &toks(&["a", "b"]), 2);
        assert_eq!((overlap, cand), (0, 0));
    }

    #[test]
    fn test_pooled_sums_counts_per_metric() {
        let counts = vec![
            vec![("rouge-1".to_string(), Overlap::new(0.0, 3.0, 3.0))],
            vec![("rouge-1".to_string(), Overlap::new(3.0, 3.0, 3.0))],
        ];
        let totals = pooled(&counts);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].1, Overlap::new(3.0, 6.0, 6.0));
        let m = totals[0].1.measures(0.5);
        assert!((m.precision - 0.5).abs() < 1e-9);
        assert!((m.f_score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let rouge = Rouge::new(RougeConfig {
            stemming: false,
            ..RougeConfig::default()
        });
        assert_eq!(
            rouge.tokenize("Ayşe'nin kedisi, IŞIK!"),
            vec!["ayşe", "nin", "kedisi", "ışık"]
        );
    }

    #[test]
    fn test_word_length_limit() {
        let rouge = Rouge::new(RougeConfig {
            stemming: false,
            length_limit: 3,
            ..RougeConfig::default()
        });
        assert_eq!(rouge.tokenize("bir iki üç dört beş").len(), 3);
    }

    #[test]
    fn test_byte_length_limit_respects_char_boundaries() {
        let rouge = Rouge::new(RougeConfig {
            stemming: false,
            length_limit: 2,
            length_limit_type: LengthLimit::Bytes,
            ..RougeConfig::default()
        });
        // 'ş' is two bytes, so only "a" fits
        assert_eq!(rouge.tokenize("aşk"), vec!["a"]);
    }
}
