// Damped power iteration over a dense sentence graph.
//
// Used by both graph-based strategies. Rows are normalized to sum to one;
// rows with no outgoing weight (isolated sentences) spread their mass
// uniformly, so the scores always form a probability distribution.

/// Stationary-distribution solver for small dense graphs.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PowerIteration {
    /// Run on a square weight matrix where `weights[i][j]` is the edge i → j.
    ///
    /// Negative weights are treated as zero. Returns one score per node,
    /// summing to 1.0 (or an empty vector for an empty graph).
    pub fn run(&self, weights: &[Vec<f64>]) -> Vec<f64> {
        let n = weights.len();
        if n == 0 {
            return Vec::new();
        }

        let row_totals: Vec<f64> = weights
            .iter()
            .map(|row| row.iter().map(|w| w.max(0.0)).sum())
            .collect();

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;

        for _ in 0..self.max_iterations {
            let dangling_mass: f64 = scores
                .iter()
                .zip(&row_totals)
                .filter(|(_, &total)| total <= 0.0)
                .map(|(score, _)| score)
                .sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (i, row) in weights.iter().enumerate() {
                let total = row_totals[i];
                if total <= 0.0 {
                    continue;
                }
                for (j, &w) in row.iter().enumerate() {
                    if w > 0.0 {
                        next[j] += self.damping * scores[i] * w / total;
                    }
                }
            }

            let delta: f64 = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta <= self.threshold {
                break;
            }
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        scores
    }
}
