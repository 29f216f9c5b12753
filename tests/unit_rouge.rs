// Unit tests for ROUGE evaluation.
//
// Tests the fixed CLI configuration end to end through `evaluate_rouge`,
// the input guards, and the multi-reference aggregation in `score_many`.

use ozet::evaluation::rouge::RougeConfig;
use ozet::evaluation::{evaluate_rouge, Rouge, RougeScores, ScoreReport, SummaryScorer};
use ozet::OzetError;

const REFERENCE: &str = "Belediye ekipleri yağmur sonrası su baskınlarına karşı gece boyunca çalıştı.";

// ============================================================
// Sanity checks
// ============================================================

#[test]
fn identical_texts_score_one_everywhere() {
    let report = evaluate_rouge(REFERENCE, REFERENCE).unwrap();
    assert_eq!(report.len(), 4);
    for (metric, m) in report.iter() {
        assert!((m.precision - 1.0).abs() < 1e-9, "{metric} p = {}", m.precision);
        assert!((m.recall - 1.0).abs() < 1e-9, "{metric} r = {}", m.recall);
        assert!((m.f_score - 1.0).abs() < 1e-9, "{metric} f = {}", m.f_score);
    }
}

#[test]
fn reports_all_four_metrics_in_order() {
    let report = evaluate_rouge(REFERENCE, "Ekipler gece çalıştı.").unwrap();
    let names: Vec<&str> = report.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["rouge-1", "rouge-2", "rouge-l", "rouge-w"]);
}

#[test]
fn disjoint_texts_score_zero() {
    let report = evaluate_rouge("Kedi süt içti.", "Futbol maçı berabere bitti.").unwrap();
    for metric in ["rouge-1", "rouge-2"] {
        let m = report.get(metric).unwrap();
        assert_eq!(m.precision, 0.0, "{metric}");
        assert_eq!(m.recall, 0.0, "{metric}");
        assert_eq!(m.f_score, 0.0, "{metric}");
    }
}

#[test]
fn partial_overlap_is_between_zero_and_one() {
    let report = evaluate_rouge(REFERENCE, "Belediye ekipleri gece boyunca çalıştı.").unwrap();
    let r1 = report.get("rouge-1").unwrap();
    assert!(r1.precision > r1.recall, "short candidate should be precise");
    assert!(r1.f_score > 0.0 && r1.f_score < 1.0);

    let rl = report.get("rouge-l").unwrap();
    assert!(rl.f_score > 0.0 && rl.f_score <= r1.f_score + 1e-9);
}

#[test]
fn rouge_w_rewards_consecutive_matches() {
    let together = evaluate_rouge("a b c d e f", "a b c x y z").unwrap();
    let apart = evaluate_rouge("a b c d e f", "a x b y c z").unwrap();
    let w_together = together.get("rouge-w").unwrap().f_score;
    let w_apart = apart.get("rouge-w").unwrap().f_score;
    assert!(w_together > w_apart, "{w_together} <= {w_apart}");
    // plain LCS cannot tell them apart
    assert_eq!(
        together.get("rouge-l").unwrap().f_score,
        apart.get("rouge-l").unwrap().f_score
    );
}

#[test]
fn stemming_matches_inflected_forms() {
    let stemmed = Rouge::default();
    let unstemmed = Rouge::new(RougeConfig {
        stemming: false,
        ..RougeConfig::default()
    });
    let reference = "kitaplar masada";
    let candidate = "kitapları masadan";
    let with = stemmed.score(candidate, reference).unwrap();
    let without = unstemmed.score(candidate, reference).unwrap();
    assert!(
        with.get("rouge-1").unwrap().f_score >= without.get("rouge-1").unwrap().f_score
    );
}

#[test]
fn text_beyond_hundred_words_is_ignored() {
    let base: Vec<String> = (0..100).map(|i| format!("kelime{i}")).collect();
    let reference = base.join(" ");
    let candidate = format!("{reference} fazladan sözcükler burada");
    let report = evaluate_rouge(&reference, &candidate).unwrap();
    assert!((report.get("rouge-1").unwrap().f_score - 1.0).abs() < 1e-9);
}

// ============================================================
// Input guards
// ============================================================

#[test]
fn empty_reference_is_invalid_input() {
    let err = evaluate_rouge("   ", "Bir özet.").unwrap_err();
    assert!(matches!(err, OzetError::InvalidInput(_)));
}

#[test]
fn empty_candidate_is_invalid_input() {
    let err = evaluate_rouge("Bir referans.", "").unwrap_err();
    assert!(matches!(err, OzetError::InvalidInput(_)));
}

// ============================================================
// Multiple candidates and references
// ============================================================

fn aggregate(scores: RougeScores) -> ScoreReport {
    match scores {
        RougeScores::Aggregate(report) => report,
        other => panic!("expected one aggregate report, got {other:?}"),
    }
}

#[test]
fn single_pair_average_equals_direct_score() {
    let rouge = Rouge::default();
    let candidate = "Ekipler gece boyunca çalıştı.".to_string();
    let direct = rouge.score(&candidate, REFERENCE).unwrap();
    let many = rouge
        .score_many(&[candidate], &[vec![REFERENCE.to_string()]])
        .unwrap();
    assert_eq!(aggregate(many), direct);
}

#[test]
fn default_config_pools_counts_over_references() {
    let rouge = Rouge::default();
    let candidate = "Kedi süt içti.".to_string();
    let refs = vec!["Futbol maçı bitti.".to_string(), "Kedi süt içti.".to_string()];
    let report = aggregate(rouge.score_many(&[candidate], &[refs]).unwrap());

    // 3 matches out of 6 candidate and 6 reference unigrams
    let r1 = report.get("rouge-1").unwrap();
    assert!((r1.precision - 0.5).abs() < 1e-9, "p = {}", r1.precision);
    assert!((r1.recall - 0.5).abs() < 1e-9, "r = {}", r1.recall);
    assert!((r1.f_score - 0.5).abs() < 1e-9, "f = {}", r1.f_score);
}

#[test]
fn best_reference_is_chosen_by_recall() {
    let rouge = Rouge::new(RougeConfig {
        apply_avg: false,
        ..RougeConfig::default()
    });
    let candidate = "kedi süt içti".to_string();
    let refs = vec![
        // p = 1, r = 0.6, f = 0.75
        "kedi süt içti ev yol".to_string(),
        // p = 1/3, r = 1, f = 0.5
        "kedi".to_string(),
    ];
    let report = aggregate(rouge.score_many(&[candidate], &[refs]).unwrap());
    let r1 = report.get("rouge-1").unwrap();
    assert!((r1.recall - 1.0).abs() < 1e-9);
    assert!((r1.f_score - 0.5).abs() < 1e-9);
}

#[test]
fn best_reports_are_averaged_over_candidates() {
    let rouge = Rouge::new(RougeConfig {
        apply_avg: false,
        ..RougeConfig::default()
    });
    let candidates = vec!["Kedi süt içti.".to_string(), "Köpek havladı.".to_string()];
    let refs = vec![
        vec!["Kedi süt içti.".to_string()],
        vec!["Kedi süt içti.".to_string()],
    ];
    let report = aggregate(rouge.score_many(&candidates, &refs).unwrap());
    assert!((report.get("rouge-1").unwrap().f_score - 0.5).abs() < 1e-9);
}

#[test]
fn every_pair_is_reported_without_either_flag() {
    let rouge = Rouge::new(RougeConfig {
        apply_avg: false,
        apply_best: false,
        ..RougeConfig::default()
    });
    let candidates = vec!["Kedi süt içti.".to_string(), "Köpek havladı.".to_string()];
    let refs = vec![
        vec!["Futbol maçı bitti.".to_string(), "Kedi süt içti.".to_string()],
        vec!["Kedi süt içti.".to_string()],
    ];
    let reports = match rouge.score_many(&candidates, &refs).unwrap() {
        RougeScores::PerReference(reports) => reports,
        other => panic!("expected per-reference reports, got {other:?}"),
    };
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].len(), 2);
    assert_eq!(reports[1].len(), 1);
    assert_eq!(reports[0][0].get("rouge-1").unwrap().f_score, 0.0);
    assert!((reports[0][1].get("rouge-1").unwrap().f_score - 1.0).abs() < 1e-9);
    assert_eq!(reports[1][0].get("rouge-1").unwrap().f_score, 0.0);
}

#[test]
fn blank_reference_in_batch_is_invalid_input() {
    let rouge = Rouge::default();
    let err = rouge
        .score_many(&["Kedi süt içti.".to_string()], &[vec!["  ".to_string()]])
        .unwrap_err();
    assert!(matches!(err, OzetError::InvalidInput(_)));
}

#[test]
fn mismatched_batches_are_invalid_input() {
    let rouge = Rouge::default();
    let err = rouge
        .score_many(&["bir".to_string()], &[])
        .unwrap_err();
    assert!(matches!(err, OzetError::InvalidInput(_)));
}
