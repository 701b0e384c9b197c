//! Basis translation.

use std::fmt;
use std::str::FromStr;

use qpgf_ir::{ErrorRateTable, GateOp};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CompileError, CompileResult};
use crate::target::Architecture;

/// Suffix of the synthetic composite gate emitted in [`DecompMode::Unit`].
pub const SYNTHETIC_SUFFIX: &str = "_DECOMP";

/// How non-native gates are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecompMode {
    /// One synthetic `<NAME>_DECOMP` gate carrying the aggregate error rate.
    #[default]
    Unit,
    /// Every primitive of the decomposition, in order.
    Decomp,
}

impl DecompMode {
    /// Mode name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DecompMode::Unit => "unit",
            DecompMode::Decomp => "decomp",
        }
    }
}

impl fmt::Display for DecompMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecompMode {
    type Err = CompileError;

    fn from_str(s: &str) -> CompileResult<Self> {
        match s {
            "unit" => Ok(DecompMode::Unit),
            "decomp" => Ok(DecompMode::Decomp),
            _ => Err(CompileError::UnsupportedMode(s.to_string())),
        }
    }
}

/// Name of the synthetic composite gate standing in for `gate`.
pub fn synthetic_name(gate: &str) -> String {
    format!("{gate}{SYNTHETIC_SUFFIX}")
}

/// Translate gate operations to an architecture's native basis.
///
/// `architecture` is parsed case-insensitively and `mode` must match a
/// [`DecompMode::name`] exactly; both are validated before any operation is looked at. In unit mode the synthetic
/// composite rates are added to `error_rates`.
pub fn translate(
    ops: &[GateOp],
    architecture: &str,
    mode: &str,
    error_rates: &mut ErrorRateTable,
) -> CompileResult<Vec<GateOp>> {
    let architecture: Architecture = architecture.parse()?;
    let mode: DecompMode = mode.parse()?;
    BasisTranslator::new(architecture, mode).run(ops, error_rates)
}

/// Basis translator for one architecture and mode.
///
/// Native gates are copied through unchanged. Gates with a decomposition
/// rule are either expanded ([`DecompMode::Decomp`]) or replaced by a
/// synthetic composite ([`DecompMode::Unit`]) whose error probability is
/// `1 - Π(1 - p_i)` over the primitives' rates. Anything else is an error.
#[derive(Debug, Clone, Copy)]
pub struct BasisTranslator {
    architecture: Architecture,
    mode: DecompMode,
}

impl BasisTranslator {
    /// Create a translator.
    pub fn new(architecture: Architecture, mode: DecompMode) -> Self {
        Self { architecture, mode }
    }

    /// Target architecture.
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Decomposition mode.
    pub fn mode(&self) -> DecompMode {
        self.mode
    }

    /// Translate `ops`, recording synthetic rates in `error_rates`.
    ///
    /// On failure `error_rates` is left untouched.
    pub fn run(
        &self,
        ops: &[GateOp],
        error_rates: &mut ErrorRateTable,
    ) -> CompileResult<Vec<GateOp>> {
        let config = self.architecture.config();
        let mut translated = Vec::with_capacity(ops.len());
        let mut synthetic = ErrorRateTable::new();

        for op in ops {
            if config.is_native(op.name()) {
                translated.push(op.clone());
                continue;
            }

            let rule = config
                .decomposition(op.name())
                .ok_or_else(|| CompileError::UnsupportedGate(op.name().to_string()))?;
            let primitives = rule.apply(op)?;

            match self.mode {
                DecompMode::Decomp => translated.extend(primitives),
                DecompMode::Unit => {
                    let name = synthetic_name(op.name());
                    if !synthetic.contains(&name) {
                        let p = composite_error_rate(op.name(), &primitives, error_rates)?;
                        trace!(gate = %name, p, "synthetic composite rate");
                        synthetic.insert(&name, p)?;
                    }
                    translated.push(op.renamed(name));
                }
            }
        }

        let added = synthetic.len();
        for (name, p) in synthetic.iter() {
            error_rates.insert(name, p)?;
        }

        debug!(
            architecture = %self.architecture,
            mode = %self.mode,
            input_ops = ops.len(),
            output_ops = translated.len(),
            synthetic_rates = added,
            "basis translation complete"
        );

        Ok(translated)
    }
}

/// Probability that at least one primitive fails, assuming independence.
fn composite_error_rate(
    decomposed: &str,
    primitives: &[GateOp],
    error_rates: &ErrorRateTable,
) -> CompileResult<f64> {
    let mut survive = 1.0;
    for primitive in primitives {
        let p = error_rates
            .get(primitive.name())
            .ok_or_else(|| CompileError::MissingErrorRate {
                gate: primitive.name().to_string(),
                decomposed: decomposed.to_string(),
            })?;
        survive *= 1.0 - p;
    }
    let p = 1.0 - survive;
    if p >= 1.0 {
        let names: Vec<&str> = primitives.iter().map(GateOp::name).collect();
        return Err(CompileError::CompositeRateSaturated {
            gate: decomposed.to_string(),
            primitives: names.join(", "),
        });
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpgf_ir::{Angle, QubitId};
    use std::f64::consts::PI;

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

    fn h0() -> GateOp {
        GateOp::single("H", QubitId(0))
    }

    #[test]
    fn test_native_gates_pass_through() {
        let ops = vec![
            GateOp::single("SX", QubitId(0)).with_raw_param("ignored"),
            GateOp::new("CZ", [QubitId(0), QubitId(1)]).unwrap(),
        ];
        let mut rates = heron_rates();
        let out = translate(&ops, "HERON", "unit", &mut rates).unwrap();
        assert_eq!(out, ops);
        assert_eq!(rates, heron_rates());
    }

    #[test]
    fn test_hadamard_decomp_mode() {
        let mut rates = heron_rates();
        let out = translate(&[h0()], "HERON", "decomp", &mut rates).unwrap();
        let names: Vec<_> = out.iter().map(GateOp::name).collect();
        assert_eq!(names, ["RZ", "SX", "RZ"]);
        assert_eq!(out[0].angle(), Some(Angle::Literal(PI)));
        assert!(out[1].param().is_none());
        assert_eq!(out[2].angle(), Some(Angle::Literal(PI)));
        assert_eq!(rates.len(), heron_rates().len());
    }

    #[test]
    fn test_hadamard_unit_mode() {
        let mut rates = heron_rates();
        let out = translate(&[h0()], "HERON", "unit", &mut rates).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name(), "H_DECOMP");
        assert_eq!(out[0].qubits(), [QubitId(0)]);

        let p_rz = rates.get("RZ").unwrap();
        let p_sx = rates.get("SX").unwrap();
        let expected = 1.0 - (1.0 - p_rz).powi(2) * (1.0 - p_sx);
        assert!((rates.get("H_DECOMP").unwrap() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_unit_mode_two_qubit_composite() {
        let mut rates = ErrorRateTable::from_pairs([("ECR", 7.0e-3)]).unwrap();
        let cx = GateOp::new("CX", [QubitId(1), QubitId(3)]).unwrap();
        let out = translate(&[cx.clone(), cx], "eagle", "unit", &mut rates).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|op| op.name() == "CX_DECOMP"));
        assert_eq!(out[0].qubits(), [QubitId(1), QubitId(3)]);
        assert!((rates.get("CX_DECOMP").unwrap() - 7.0e-3).abs() < 1e-15);
    }

    #[test]
    fn test_unknown_architecture() {
        let mut rates = heron_rates();
        let err = translate(&[h0()], "FALCON", "unit", &mut rates).unwrap_err();
        assert_eq!(err, CompileError::UnknownArchitecture("FALCON".into()));
    }

    #[test]
    fn test_unsupported_mode() {
        let mut rates = heron_rates();
        let err = translate(&[], "HERON", "lumped", &mut rates).unwrap_err();
        assert_eq!(err, CompileError::UnsupportedMode("lumped".into()));
    }

    #[test]
    fn test_unsupported_gate() {
        let mut rates = heron_rates();
        let swap = GateOp::new("SWAP", [QubitId(0), QubitId(1)]).unwrap();
        let err = translate(&[swap], "HERON", "decomp", &mut rates).unwrap_err();
        assert_eq!(err, CompileError::UnsupportedGate("SWAP".into()));

        // RX is native on Heron but has no rule on Eagle.
        let rx = GateOp::single("RX", QubitId(0)).with_raw_param("0.1");
        let err = translate(&[rx], "EAGLE", "decomp", &mut rates).unwrap_err();
        assert_eq!(err, CompileError::UnsupportedGate("RX".into()));
    }

    #[test]
    fn test_missing_primitive_rate() {
        let mut rates = ErrorRateTable::from_pairs([("RZ", 0.0)]).unwrap();
        let err = translate(&[h0()], "HERON", "unit", &mut rates).unwrap_err();
        assert_eq!(
            err,
            CompileError::MissingErrorRate {
                gate: "SX".into(),
                decomposed: "H".into(),
            }
        );
    }

    #[test]
    fn test_saturated_composite_rate() {
        let near_one =
            ErrorRateTable::from_pairs([("RZ", 0.99999999), ("SX", 0.9999999999)]).unwrap();
        let mut rates = near_one.clone();
        let err = translate(&[h0()], "HERON", "unit", &mut rates).unwrap_err();
        assert_eq!(
            err,
            CompileError::CompositeRateSaturated {
                gate: "H".into(),
                primitives: "RZ, SX, RZ".into(),
            }
        );
        assert_eq!(rates, near_one);

        let out = translate(&[h0()], "HERON", "decomp", &mut rates).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_failure_leaves_rates_untouched() {
        let mut rates = heron_rates();
        let ops = vec![
            h0(),
            GateOp::single("U", QubitId(0)).with_raw_param("0.1, oops, 0.3"),
        ];
        let err = translate(&ops, "HERON", "unit", &mut rates).unwrap_err();
        assert_eq!(
            err,
            CompileError::MalformedParameter {
                gate: "U".into(),
                param: "0.1, oops, 0.3".into(),
            }
        );
        assert!(!rates.contains("H_DECOMP"));
        assert_eq!(rates, heron_rates());
    }

    #[test]
    fn test_decomp_mode_keeps_inherited_placeholder() {
        let mut rates = heron_rates();
        let ry = GateOp::single("RY", QubitId(2)).with_raw_param("0.25");
        let out = BasisTranslator::new(Architecture::Heron, DecompMode::Decomp)
            .run(&[ry], &mut rates)
            .unwrap();
        assert_eq!(out[1].angle(), Some(Angle::Inherited));
        assert_eq!(out[1].angle().unwrap().resolve(0.25), 0.25);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("unit".parse::<DecompMode>().unwrap(), DecompMode::Unit);
        assert_eq!("decomp".parse::<DecompMode>().unwrap(), DecompMode::Decomp);
        for bad in ["", "DECOMP", "Unit", " unit ", "decomp\n"] {
            assert_eq!(
                bad.parse::<DecompMode>().unwrap_err(),
                CompileError::UnsupportedMode(bad.to_string())
            );
        }
        assert_eq!(DecompMode::default(), DecompMode::Unit);
    }

    #[test]
    fn test_output_stays_in_basis_or_synthetic() {
        let ops = vec![
            h0(),
            GateOp::single("Y", QubitId(1)),
            GateOp::single("Z", QubitId(1)),
            GateOp::single("S", QubitId(0)),
            GateOp::single("T", QubitId(0)),
            GateOp::new("CX", [QubitId(0), QubitId(1)]).unwrap(),
            GateOp::single("RY", QubitId(1)).with_raw_param("0.3"),
            GateOp::single("U", QubitId(0)).with_raw_param("0.5, 0.5, 0.5"),
            GateOp::single("X", QubitId(0)),
        ];
        for mode in [DecompMode::Unit, DecompMode::Decomp] {
            let mut rates = heron_rates();
            let translator = BasisTranslator::new(Architecture::Heron, mode);
            let out = translator.run(&ops, &mut rates).unwrap();
            for op in &out {
                let native = Architecture::Heron.config().is_native(op.name());
                let synthetic = op.name().ends_with(SYNTHETIC_SUFFIX);
                assert!(native || (mode == DecompMode::Unit && synthetic), "{op}");
                assert!(rates.contains(op.name()), "{op}");
            }
        }
    }
}
