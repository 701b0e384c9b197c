//! Property tests for the scalar and joint PGF builders.

use proptest::prelude::*;
use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
use qpgf_pgf::{build_joint_pgf, build_pgf};

const NUM_QUBITS: u32 = 4;

fn rates() -> ErrorRateTable {
    ErrorRateTable::from_pairs([
        ("ID", 0.0),
        ("X", 0.01),
        ("SX", 0.2),
        ("RZ", 0.05),
        ("CZ", 0.3),
        ("ECR", 0.07),
    ])
    .unwrap()
}

fn arb_op() -> impl Strategy<Value = GateOp> {
    let one_q = (
        prop::sample::select(vec!["ID", "X", "SX", "RZ"]),
        0..NUM_QUBITS,
    )
        .prop_map(|(name, q)| GateOp::single(name, QubitId(q)));
    let two_q = (
        prop::sample::select(vec!["CZ", "ECR"]),
        0..NUM_QUBITS,
        1..NUM_QUBITS,
    )
        .prop_map(|(name, a, d)| {
            GateOp::new(name, [QubitId(a), QubitId((a + d) % NUM_QUBITS)]).unwrap()
        });
    prop_oneof![one_q, two_q]
}

fn assert_close(a: &[f64], b: &[f64], tol: f64) -> Result<(), TestCaseError> {
    let len = a.len().max(b.len());
    for k in 0..len {
        let x = a.get(k).copied().unwrap_or(0.0);
        let y = b.get(k).copied().unwrap_or(0.0);
        prop_assert!((x - y).abs() < tol, "entry {}: {} vs {}", k, x, y);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_scalar_is_a_distribution(ops in prop::collection::vec(arb_op(), 0..60)) {
        let result = build_pgf(&ops, &rates()).unwrap();
        let sum: f64 = result.pgf.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(result.pgf.iter().all(|&p| p >= -1e-12));
        prop_assert!(result.pgf.len() <= 1 + ops.iter().map(GateOp::num_qubits).sum::<usize>());
        prop_assert!(result.variance >= -1e-9);
    }

    #[test]
    fn prop_scalar_mean_is_sum_of_gate_means(ops in prop::collection::vec(arb_op(), 0..60)) {
        let table = rates();
        let result = build_pgf(&ops, &table).unwrap();
        let expected: f64 = ops
            .iter()
            .map(|op| op.num_qubits() as f64 * table.get(op.name()).unwrap())
            .sum();
        prop_assert!((result.mean - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_scalar_order_independent(
        (ops, shuffled) in prop::collection::vec(arb_op(), 0..40)
            .prop_flat_map(|ops| (Just(ops.clone()), Just(ops).prop_shuffle())),
    ) {
        let original = build_pgf(&ops, &rates()).unwrap();
        let permuted = build_pgf(&shuffled, &rates()).unwrap();
        assert_close(&original.pgf, &permuted.pgf, 1e-9)?;
        prop_assert!((original.mean - permuted.mean).abs() < 1e-9);
    }

    #[test]
    fn prop_joint_total_matches_scalar(ops in prop::collection::vec(arb_op(), 0..14)) {
        let scalar = build_pgf(&ops, &rates()).unwrap();
        let joint = build_joint_pgf(&ops, &rates()).unwrap();
        assert_close(&scalar.pgf, &joint.total(), 1e-9)?;
    }

    #[test]
    fn prop_marginal_matches_ops_on_qubit(
        ops in prop::collection::vec(arb_op(), 1..14),
        q in 0..NUM_QUBITS,
    ) {
        let joint = build_joint_pgf(&ops, &rates()).unwrap();
        let qubit = QubitId(q);
        prop_assume!(qubit.index() < joint.num_qubits());

        // Every op touching the qubit adds exactly one error to it, so the
        // marginal is the scalar PGF of those ops narrowed to that qubit.
        let local: Vec<GateOp> = ops
            .iter()
            .filter(|op| op.touches(qubit))
            .map(|op| GateOp::single(op.name(), qubit))
            .collect();
        let expected = build_pgf(&local, &rates()).unwrap();
        assert_close(&joint.marginal(qubit).unwrap(), &expected.pgf, 1e-9)?;
    }
}
