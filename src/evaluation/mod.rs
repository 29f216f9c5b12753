// Summary evaluation: ROUGE scores against a reference summary.

pub mod rouge;
pub mod traits;

pub use rouge::{evaluate_rouge, Rouge, RougeConfig, RougeScores};
pub use traits::{Measures, ScoreReport, SummaryScorer};
