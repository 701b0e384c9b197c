//! End-to-end tests: circuit text → basis translation → error distributions.

use qpgf_compile::translate;
use qpgf_ir::{ErrorRateTable, QubitId};
use qpgf_pgf::{PgfSummary, build_joint_pgf, build_pgf, tail_probability};
use qpgf_qasm::parse;

const SAMPLE_CIRCUIT: &str = r#"OPENQASM 3.0;
include "stdgates.inc";
qubit[3] q;
h q[0];
cx q[0], q[1];
x q[1];
y q[2];
z q[0];
s q[1];
t q[2];
rx(1.57) q[0];
ry(1.57) q[1];
rz(1.57) q[2];
u(0.5, 0.5, 0.5) q[0];
cx q[1], q[2];
"#;

fn heron_rates() -> ErrorRateTable {
    ErrorRateTable::from_pairs([
        ("CZ", 2.7e-3),
        ("ID", 2.5e-4),
        ("RX", 2.5e-4),
        ("RZ", 1.0e-5),
        ("RZZ", 3.0e-3),
        ("SX", 2.5e-4),
        ("X", 2.5e-4),
    ])
    .unwrap()
}

#[test]
fn test_no_error_probability_is_mode_independent() {
    let ops = parse(SAMPLE_CIRCUIT).unwrap();

    let mut unit_rates = heron_rates();
    let unit = translate(&ops, "heron", "unit", &mut unit_rates).unwrap();
    let mut decomp_rates = heron_rates();
    let decomp = translate(&ops, "heron", "decomp", &mut decomp_rates).unwrap();

    let unit_pgf = build_pgf(&unit, &unit_rates).unwrap();
    let decomp_pgf = build_pgf(&decomp, &decomp_rates).unwrap();

    assert_eq!(unit.len(), ops.len());
    assert!(decomp.len() > unit.len());
    assert!((unit_pgf.pgf[0] - decomp_pgf.pgf[0]).abs() < 1e-12);
    assert!(decomp_pgf.mean >= unit_pgf.mean);
}

#[test]
fn test_joint_marginals_cover_every_qubit() {
    let ops = parse(SAMPLE_CIRCUIT).unwrap();
    let mut rates = heron_rates();
    let native = translate(&ops, "HERON", "unit", &mut rates).unwrap();

    let scalar = build_pgf(&native, &rates).unwrap();
    let joint = build_joint_pgf(&native, &rates).unwrap();
    assert_eq!(joint.num_qubits(), 3);

    let total = joint.total();
    for (a, b) in scalar.pgf.iter().zip(&total) {
        assert!((a - b).abs() < 1e-12);
    }

    let marginal_means: f64 = (0..3)
        .map(|q| PgfSummary::from_pgf(&joint.marginal(QubitId(q)).unwrap()).mean)
        .sum();
    assert!((marginal_means - scalar.mean).abs() < 1e-12);
}

#[test]
fn test_missing_native_rate_surfaces_at_pgf_stage() {
    let ops = parse("qubit[1] q;\nx q[0];\nsx q[0];\n").unwrap();
    let mut rates = ErrorRateTable::from_pairs([("X", 1e-3)]).unwrap();
    let native = translate(&ops, "eagle", "unit", &mut rates).unwrap();
    let err = build_pgf(&native, &rates).unwrap_err();
    assert_eq!(err.to_string(), "Missing error rate for gate: SX");
}

#[test]
fn test_summary_of_low_noise_circuit() {
    let ops = parse(SAMPLE_CIRCUIT).unwrap();
    let mut rates = heron_rates();
    let native = translate(&ops, "heron", "decomp", &mut rates).unwrap();
    let result = build_pgf(&native, &rates).unwrap();

    let summary = PgfSummary::from_pgf(&result.pgf);
    assert_eq!(summary.mode, 0);
    assert!(summary.max_prob > 0.9);
    assert!((summary.mean - result.mean).abs() < 1e-15);

    let tail = tail_probability(&result.pgf, 0.01);
    assert!(tail > 0.0 && tail < 0.1);
}
