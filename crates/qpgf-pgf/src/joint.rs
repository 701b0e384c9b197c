//! Joint per-qubit error-count distribution.

use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, trace};

use crate::error::{PgfError, PgfResult};
use crate::scalar::error_rate;

/// Joint distribution of per-qubit error counts.
///
/// Keys are tuples of length [`num_qubits`](Self::num_qubits); entry `i`
/// counts the errors that landed on qubit `i`. Values are probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct JointPgf {
    num_qubits: usize,
    dist: FxHashMap<Vec<u32>, f64>,
}

impl JointPgf {
    /// The error-free distribution over `num_qubits` qubits.
    pub fn certain(num_qubits: usize) -> Self {
        let mut dist = FxHashMap::default();
        dist.insert(vec![0; num_qubits], 1.0);
        Self { num_qubits, dist }
    }

    /// Number of qubits tracked.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of stored outcomes.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Whether no outcome is stored.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Probability of the exact per-qubit outcome `counts`.
    pub fn probability(&self, counts: &[u32]) -> f64 {
        self.dist.get(counts).copied().unwrap_or(0.0)
    }

    /// Outcomes and probabilities, sorted by outcome.
    pub fn entries(&self) -> Vec<(&[u32], f64)> {
        let mut entries: Vec<_> = self
            .dist
            .iter()
            .map(|(counts, &p)| (counts.as_slice(), p))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Error-count distribution of a single qubit.
    ///
    /// The array runs from 0 to the largest count observed for that qubit.
    pub fn marginal(&self, qubit: QubitId) -> PgfResult<Vec<f64>> {
        let i = qubit.index();
        if i >= self.num_qubits {
            return Err(PgfError::QubitOutOfRange {
                qubit: qubit.0,
                num_qubits: self.num_qubits,
            });
        }
        Ok(self.collapse(|counts| counts[i] as usize))
    }

    /// Marginals of every tracked qubit, in qubit order.
    pub fn marginals(&self) -> Vec<Vec<f64>> {
        (0..self.num_qubits)
            .map(|i| self.collapse(|counts| counts[i] as usize))
            .collect()
    }

    /// Distribution of the total error count across all qubits.
    pub fn total(&self) -> Vec<f64> {
        self.collapse(|counts| counts.iter().map(|&c| c as usize).sum())
    }

    fn collapse(&self, bucket: impl Fn(&[u32]) -> usize) -> Vec<f64> {
        let max = self.dist.keys().map(|k| bucket(k)).max().unwrap_or(0);
        let mut out = vec![0.0; max + 1];
        for (counts, &p) in &self.dist {
            out[bucket(counts)] += p;
        }
        out
    }
}

impl Serialize for JointPgf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("JointPgf", 2)?;
        state.serialize_field("num_qubits", &self.num_qubits)?;
        state.serialize_field("entries", &self.entries())?;
        state.end()
    }
}

/// Build the joint per-qubit PGF of `ops`.
///
/// The number of tracked qubits is one more than the largest qubit index
/// referenced (zero for an empty sequence). Each operation either leaves the
/// counts unchanged with probability `1 - p` or adds one error to each of its
/// qubits with probability `p`.
///
/// ```
/// use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
/// use qpgf_pgf::build_joint_pgf;
///
/// let ops = vec![
///     GateOp::single("X", QubitId(0)),
///     GateOp::new("CZ", [QubitId(0), QubitId(1)]).unwrap(),
/// ];
/// let rates = ErrorRateTable::from_pairs([("X", 0.1), ("CZ", 0.2)]).unwrap();
///
/// let joint = build_joint_pgf(&ops, &rates).unwrap();
/// assert_eq!(joint.num_qubits(), 2);
/// assert!((joint.probability(&[2, 1]) - 0.02).abs() < 1e-12);
/// assert_eq!(joint.marginal(QubitId(1)).unwrap().len(), 2);
/// ```
pub fn build_joint_pgf(ops: &[GateOp], error_rates: &ErrorRateTable) -> PgfResult<JointPgf> {
    let num_qubits = ops
        .iter()
        .flat_map(GateOp::qubits)
        .map(|q| q.index() + 1)
        .max()
        .unwrap_or(0);
    let mut joint = JointPgf::certain(num_qubits);

    for op in ops {
        let p = error_rate(op, error_rates)?;
        let mut next =
            FxHashMap::with_capacity_and_hasher(joint.dist.len() * 2, Default::default());

        for (counts, &prob) in &joint.dist {
            *next.entry(counts.clone()).or_insert(0.0) += prob * (1.0 - p);
            // A zero-rate gate adds no reachable outcome.
            if p > 0.0 {
                let mut hit = counts.clone();
                for q in op.qubits() {
                    hit[q.index()] += 1;
                }
                *next.entry(hit).or_insert(0.0) += prob * p;
            }
        }

        joint.dist = next;
        trace!(gate = op.name(), p, outcomes = joint.dist.len(), "joint step");
    }

    debug!(
        ops = ops.len(),
        num_qubits,
        outcomes = joint.dist.len(),
        "built joint PGF"
    );
    Ok(joint)
}
