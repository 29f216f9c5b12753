// Summary scorer trait and the score report it produces.
//
// Like the Summarizer trait, this keeps the scoring backend swappable: the
// CLI driver only ever sees `SummaryScorer`, so tests can hand it a fixed
// report instead of running ROUGE.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// F-score, precision and recall for one metric, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measures {
    #[serde(rename = "f")]
    pub f_score: f64,
    #[serde(rename = "p")]
    pub precision: f64,
    #[serde(rename = "r")]
    pub recall: f64,
}

impl Measures {
    /// Combine precision and recall with F = P·R / ((1−α)·P + α·R).
    /// Zero when either side is zero.
    pub fn from_precision_recall(precision: f64, recall: f64, alpha: f64) -> Self {
        let f_score = if precision == 0.0 || recall == 0.0 {
            0.0
        } else {
            precision * recall / ((1.0 - alpha) * precision + alpha * recall)
        };
        Self {
            f_score,
            precision,
            recall,
        }
    }

    /// Measures in display order with their short labels.
    pub fn labeled(&self) -> [(&'static str, f64); 3] {
        [("f", self.f_score), ("p", self.precision), ("r", self.recall)]
    }
}

/// Metric name (`rouge-1`, `rouge-2`, `rouge-l`, `rouge-w`) to measures.
///
/// Backed by a BTreeMap, which also happens to give the conventional
/// display order for ROUGE metric names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreReport {
    metrics: BTreeMap<String, Measures>,
}

impl ScoreReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: impl Into<String>, measures: Measures) {
        self.metrics.insert(metric.into(), measures);
    }

    pub fn get(&self, metric: &str) -> Option<&Measures> {
        self.metrics.get(metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measures)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Element-wise mean over several reports. Metrics missing from some
    /// reports are averaged over the reports that have them.
    pub fn average(reports: &[ScoreReport]) -> ScoreReport {
        let mut sums: BTreeMap<String, (Measures, usize)> = BTreeMap::new();
        for report in reports {
            for (metric, m) in report.iter() {
                let entry = sums
                    .entry(metric.to_string())
                    .or_insert((Measures::default(), 0));
                entry.0.precision += m.precision;
                entry.0.recall += m.recall;
                entry.0.f_score += m.f_score;
                entry.1 += 1;
            }
        }

        let metrics = sums
            .into_iter()
            .map(|(metric, (sum, count))| {
                let n = count as f64;
                (
                    metric,
                    Measures {
                        f_score: sum.f_score / n,
                        precision: sum.precision / n,
                        recall: sum.recall / n,
                    },
                )
            })
            .collect();
        ScoreReport { metrics }
    }

    /// For each metric, the measures with the highest recall across reports.
    /// Ties keep the earlier report.
    pub fn best(reports: &[ScoreReport]) -> ScoreReport {
        let mut best: BTreeMap<String, Measures> = BTreeMap::new();
        for report in reports {
            for (metric, m) in report.iter() {
                let better = best
                    .get(metric)
                    .map_or(true, |current| m.recall > current.recall);
                if better {
                    best.insert(metric.to_string(), *m);
                }
            }
        }
        ScoreReport { metrics: best }
    }
}

/// Scores a candidate summary against a reference summary.
pub trait SummaryScorer {
    fn score(&self, candidate: &str, reference: &str) -> Result<ScoreReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(f: f64) -> ScoreReport {
        let mut r = ScoreReport::new();
        r.insert("rouge-1", Measures::from_precision_recall(f, f, 0.5));
        r
    }

    #[test]
    fn test_f_score_is_harmonic_mean_at_half_alpha() {
        let m = Measures::from_precision_recall(0.5, 1.0, 0.5);
        assert!((m.f_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_f_score_zero_when_either_side_zero() {
        assert_eq!(Measures::from_precision_recall(0.0, 1.0, 0.5).f_score, 0.0);
        assert_eq!(Measures::from_precision_recall(1.0, 0.0, 0.5).f_score, 0.0);
    }

    #[test]
    fn test_average_and_best() {
        let reports = vec![report(0.2), report(0.6)];
        let avg = ScoreReport::average(&reports);
        assert!((avg.get("rouge-1").unwrap().f_score - 0.4).abs() < 1e-9);
        let best = ScoreReport::best(&reports);
        assert!((best.get("rouge-1").unwrap().f_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_metric_order() {
        let mut r = ScoreReport::new();
        for name in ["rouge-w", "rouge-l", "rouge-2", "rouge-1"] {
            r.insert(name, Measures::default());
        }
        let names: Vec<&str> = r.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["rouge-1", "rouge-2", "rouge-l", "rouge-w"]);
    }

    #[test]
    fn test_serializes_with_short_labels() {
        let json = serde_json::to_string(&report(1.0)).unwrap();
        assert_eq!(json, r#"{"rouge-1":{"f":1.0,"p":1.0,"r":1.0}}"#);
    }

    #[test]
    fn test_labels_in_f_p_r_order() {
        let labels: Vec<&str> = Measures::from_precision_recall(0.5, 0.25, 0.5)
            .labeled()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!["f", "p", "r"]);
    }

    #[test]
    fn test_best_picks_highest_recall() {
        let mut precise = ScoreReport::new();
        precise.insert("rouge-1", Measures::from_precision_recall(1.0, 0.6, 0.5));
        let mut thorough = ScoreReport::new();
        thorough.insert("rouge-1", Measures::from_precision_recall(0.2, 0.8, 0.5));

        let best = ScoreReport::best(&[precise, thorough]);
        let m = best.get("rouge-1").unwrap();
        assert!((m.recall - 0.8).abs() < 1e-9);
        assert!((m.precision - 0.2).abs() < 1e-9);
    }
}
