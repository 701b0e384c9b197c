//! Total-error PGF of a gate sequence.

use qpgf_ir::{ErrorRateTable, GateOp};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PgfError, PgfResult};
use crate::fft::convolve;
use crate::summary::moments;

/// Distribution of the total number of qubit-local errors in a circuit.
///
/// `pgf[k]` is the probability of exactly `k` errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarPgf {
    pub pgf: Vec<f64>,
    pub mean: f64,
    pub variance: f64,
}

impl ScalarPgf {
    /// The error-free distribution.
    pub fn certain() -> Self {
        Self {
            pgf: vec![1.0],
            mean: 0.0,
            variance: 0.0,
        }
    }

    /// Probability of exactly `k` errors.
    pub fn probability(&self, k: usize) -> f64 {
        self.pgf.get(k).copied().unwrap_or(0.0)
    }

    /// Largest error count with a stored entry.
    pub fn max_errors(&self) -> usize {
        self.pgf.len().saturating_sub(1)
    }
}

/// Error probability of `op`, looked up by its name.
pub(crate) fn error_rate(op: &GateOp, error_rates: &ErrorRateTable) -> PgfResult<f64> {
    error_rates
        .get(op.name())
        .ok_or_else(|| PgfError::MissingErrorRate(op.name().to_string()))
}

/// Build the total-error PGF of `ops`.
///
/// Each operation is an independent Bernoulli source: it contributes no
/// error with probability `1 - p` and one error on each of its qubits with
/// probability `p`. The per-operation distributions are convolved in order.
/// Trailing entries that are exactly zero are dropped.
///
/// ```
/// use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
/// use qpgf_pgf::build_pgf;
///
/// let ops = vec![GateOp::new("CZ", [QubitId(0), QubitId(1)]).unwrap()];
/// let rates = ErrorRateTable::from_pairs([("CZ", 0.01)]).unwrap();
///
/// let result = build_pgf(&ops, &rates).unwrap();
/// assert_eq!(result.pgf.len(), 3);
/// assert!((result.pgf[2] - 0.01).abs() < 1e-12);
/// assert!((result.mean - 0.02).abs() < 1e-12);
/// ```
pub fn build_pgf(ops: &[GateOp], error_rates: &ErrorRateTable) -> PgfResult<ScalarPgf> {
    let mut pgf = vec![1.0];

    for op in ops {
        let p = error_rate(op, error_rates)?;
        let k = op.num_qubits();
        let mut local = vec![0.0; k + 1];
        local[0] = 1.0 - p;
        local[k] = p;

        pgf = convolve(&pgf, &local);
        trace!(gate = op.name(), p, len = pgf.len(), "convolved gate");
    }

    while pgf.len() > 1 && pgf.last() == Some(&0.0) {
        pgf.pop();
    }

    let (mean, variance) = moments(&pgf);
    debug!(ops = ops.len(), len = pgf.len(), mean, variance, "built scalar PGF");

    Ok(ScalarPgf {
        pgf,
        mean,
        variance,
    })
}
