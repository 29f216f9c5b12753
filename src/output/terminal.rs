// Colored terminal output for summaries and ROUGE scores.
//
// Functions take any `Write` so the interactive session can be driven
// against an in-memory buffer in tests. Only headers are colored; value
// lines stay plain so they remain easy to grep.

use std::io::{self, Write};

use colored::Colorize;

use crate::evaluation::ScoreReport;
use crate::summarizers::Method;

/// Print the summary header and the summary text.
pub fn write_summary<W: Write>(
    out: &mut W,
    method: Method,
    count: usize,
    summary: &str,
) -> io::Result<()> {
    let header = format!("{} ile Özetlenmiş Metin ({} cümle):", method, count);
    writeln!(out, "\n{}", header.bold())?;
    if summary.is_empty() {
        writeln!(out, "{}", "(özet boş)".dimmed())
    } else {
        writeln!(out, "{summary}")
    }
}

/// Print one block per metric, each measure to three decimals.
pub fn write_scores<W: Write>(out: &mut W, report: &ScoreReport) -> io::Result<()> {
    writeln!(out, "\n{}", "Rouge Metrikleri:".bold())?;
    for (metric, measures) in report.iter() {
        writeln!(out, "{}:", metric.cyan())?;
        for (label, value) in measures.labeled() {
            writeln!(out, "    {label}: {value:.3}")?;
        }
    }
    Ok(())
}

/// Color an F-score by how good it is, for one-line summaries.
pub fn colorize_score(value: f64) -> colored::ColoredString {
    let text = format!("{value:.3}");
    if value >= 0.5 {
        text.green()
    } else if value >= 0.2 {
        text.yellow()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Measures;

    #[test]
    fn test_write_scores_three_decimals() {
        let mut report = ScoreReport::new();
        report.insert("rouge-1", Measures::from_precision_recall(0.5, 0.25, 0.5));
        let mut buf = Vec::new();
        write_scores(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("rouge-1"));
        assert!(text.contains("    p: 0.500"));
        assert!(text.contains("    r: 0.250"));
        assert!(text.contains("    f: 0.333"));

        let f_at = text.find("    f:").unwrap();
        let p_at = text.find("    p:").unwrap();
        let r_at = text.find("    r:").unwrap();
        assert!(f_at < p_at && p_at < r_at, "expected f, p, r order:\n{text}");
    }

    #[test]
    fn test_write_summary_header() {
        let mut buf = Vec::new();
        write_summary(&mut buf, Method::Lsa, 2, "Bir. İki.").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("LSA ile Özetlenmiş Metin (2 cümle):"));
        assert!(text.ends_with("Bir. İki.\n"));
    }
}
