//! Summary statistics of a PGF array.

use serde::{Deserialize, Serialize};

/// Descriptive statistics of an error-count distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PgfSummary {
    /// Expected number of errors.
    pub mean: f64,
    /// Variance of the number of errors.
    pub variance: f64,
    /// Largest single probability.
    pub max_prob: f64,
    /// Most likely error count; the smallest one on ties.
    pub mode: usize,
    /// Largest error count with a nonzero entry.
    pub support: usize,
}

impl PgfSummary {
    /// Compute the summary of `pgf`, where `pgf[k]` is `P(k errors)`.
    ///
    /// ```
    /// use qpgf_pgf::PgfSummary;
    ///
    /// let summary = PgfSummary::from_pgf(&[0.25, 0.5, 0.25, 0.0]);
    /// assert_eq!(summary.mode, 1);
    /// assert_eq!(summary.support, 2);
    /// assert_eq!(summary.mean, 1.0);
    /// assert_eq!(summary.variance, 0.5);
    /// ```
    pub fn from_pgf(pgf: &[f64]) -> Self {
        let (mean, variance) = moments(pgf);

        let mut mode = 0;
        let mut max_prob = pgf.first().copied().unwrap_or(0.0);
        for (k, &p) in pgf.iter().enumerate().skip(1) {
            if p > max_prob {
                max_prob = p;
                mode = k;
            }
        }

        let support = pgf.iter().rposition(|&p| p != 0.0).unwrap_or(0);

        Self {
            mean,
            variance,
            max_prob,
            mode,
            support,
        }
    }
}

/// Mean and variance of the distribution `pgf`.
pub fn moments(pgf: &[f64]) -> (f64, f64) {
    let (first, second) = pgf
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(m1, m2), (k, &p)| {
            let k = k as f64;
            (m1 + k * p, m2 + k * k * p)
        });
    (first, second - first * first)
}

/// Total probability carried by entries strictly below `threshold`.
///
/// ```
/// use qpgf_pgf::tail_probability;
///
/// let tail = tail_probability(&[0.9, 0.095, 0.005], 0.01);
/// assert_eq!(tail, 0.005);
/// ```
pub fn tail_probability(pgf: &[f64], threshold: f64) -> f64 {
    pgf.iter().filter(|&&p| p < threshold).sum()
}
