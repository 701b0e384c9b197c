//! Hardware architectures, native basis sets and decomposition rules.
//!
//! The registry is a closed set of [`Architecture`] variants. Each variant
//! resolves to a statically initialized [`HardwareConfig`] holding the native
//! basis and one [`DecompositionRule`] per non-native gate the architecture
//! can express.
//!
//! # Example
//!
//! ```
//! use qpgf_compile::Architecture;
//!
//! let heron: Architecture = "heron".parse().unwrap();
//! let config = heron.config();
//! assert!(config.is_native("CZ"));
//! assert!(config.decomposition("H").is_some());
//! assert!("falcon".parse::<Architecture>().is_err());
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use qpgf_ir::{Angle, GateOp, IrResult, QubitId};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{CompileError, CompileResult};

/// Supported hardware architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Architecture {
    /// IBM Eagle family (ECR two-qubit gate).
    Eagle,
    /// IBM Heron family (CZ two-qubit gate).
    Heron,
}

impl Architecture {
    /// Every registered architecture.
    pub const ALL: [Architecture; 2] = [Architecture::Eagle, Architecture::Heron];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            Architecture::Eagle => "EAGLE",
            Architecture::Heron => "HERON",
        }
    }

    /// The architecture's hardware configuration.
    pub fn config(self) -> &'static HardwareConfig {
        match self {
            Architecture::Eagle => &EAGLE,
            Architecture::Heron => &HERON,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = CompileError;

    fn from_str(s: &str) -> CompileResult<Self> {
        Architecture::ALL
            .into_iter()
            .find(|arch| arch.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CompileError::UnknownArchitecture(s.to_string()))
    }
}

/// Angles of the universal single-qubit rotation `U(θ, φ, λ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub theta: f64,
    pub phi: f64,
    pub lambda: f64,
}

impl EulerAngles {
    /// Parse exactly three comma-separated numbers.
    ///
    /// ```
    /// use qpgf_compile::EulerAngles;
    ///
    /// let angles = EulerAngles::parse("0.5, -1e-2,3").unwrap();
    /// assert_eq!(angles.lambda, 3.0);
    /// assert!(EulerAngles::parse("pi/2, 0, 0").is_none());
    /// assert!(EulerAngles::parse("0, 0").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut values = text.split(',').map(|part| part.trim().parse::<f64>());
        let theta = values.next()?.ok()?;
        let phi = values.next()?.ok()?;
        let lambda = values.next()?.ok()?;
        if values.next().is_some() {
            return None;
        }
        Some(Self { theta, phi, lambda })
    }
}

/// Rule for a gate with no numeric parameters; receives the source qubits.
pub type FixedRule = fn(&[QubitId]) -> IrResult<Vec<GateOp>>;

/// Rule for the universal rotation; receives the target qubit and its angles.
pub type EulerRule = fn(QubitId, EulerAngles) -> Vec<GateOp>;

/// A pure decomposition of one gate into native primitives.
#[derive(Clone, Copy)]
pub enum DecompositionRule {
    /// Decomposition independent of any numeric parameter.
    Fixed(FixedRule),
    /// Decomposition of `U(θ, φ, λ)`; needs the parsed angles.
    Euler(EulerRule),
}

impl DecompositionRule {
    /// Expand `op` into its primitive sequence.
    ///
    /// For [`DecompositionRule::Euler`] the operation's raw parameter must
    /// parse as three numbers.
    pub fn apply(&self, op: &GateOp) -> CompileResult<Vec<GateOp>> {
        match self {
            DecompositionRule::Fixed(rule) => Ok(rule(op.qubits())?),
            DecompositionRule::Euler(rule) => {
                let angles = op
                    .raw_param()
                    .and_then(EulerAngles::parse)
                    .ok_or_else(|| CompileError::MalformedParameter {
                        gate: op.name().to_string(),
                        param: op
                            .param()
                            .map_or_else(|| "<none>".to_string(), ToString::to_string),
                    })?;
                Ok(rule(op.qubits()[0], angles))
            }
        }
    }
}

impl fmt::Debug for DecompositionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompositionRule::Fixed(_) => f.write_str("Fixed"),
            DecompositionRule::Euler(_) => f.write_str("Euler"),
        }
    }
}

/// Native basis and decomposition table of one architecture.
#[derive(Debug)]
pub struct HardwareConfig {
    basis: FxHashSet<&'static str>,
    decompositions: FxHashMap<&'static str, DecompositionRule>,
}

impl HardwareConfig {
    fn new(
        basis: &[&'static str],
        decompositions: &[(&'static str, DecompositionRule)],
    ) -> Self {
        Self {
            basis: basis.iter().copied().collect(),
            decompositions: decompositions.iter().copied().collect(),
        }
    }

    /// Whether `gate` is executed natively.
    pub fn is_native(&self, gate: &str) -> bool {
        self.basis.contains(gate)
    }

    /// The decomposition rule for `gate`, if one exists.
    pub fn decomposition(&self, gate: &str) -> Option<&DecompositionRule> {
        self.decompositions.get(gate)
    }

    /// Native gate names, sorted.
    pub fn basis(&self) -> Vec<&'static str> {
        let mut gates: Vec<_> = self.basis.iter().copied().collect();
        gates.sort_unstable();
        gates
    }

    /// Names of gates with a decomposition rule, sorted.
    pub fn decomposable(&self) -> Vec<&'static str> {
        let mut gates: Vec<_> = self.decompositions.keys().copied().collect();
        gates.sort_unstable();
        gates
    }
}

static EAGLE: LazyLock<HardwareConfig> = LazyLock::new(|| {
    HardwareConfig::new(
        &["ECR", "ID", "RZ", "SX", "X"],
        &[
            ("H", DecompositionRule::Fixed(h)),
            ("Y", DecompositionRule::Fixed(y)),
            ("Z", DecompositionRule::Fixed(z)),
            ("S", DecompositionRule::Fixed(s)),
            ("T", DecompositionRule::Fixed(t)),
            ("CX", DecompositionRule::Fixed(eagle_cx)),
            ("RY", DecompositionRule::Fixed(eagle_ry)),
            ("U", DecompositionRule::Euler(eagle_u)),
        ],
    )
});

static HERON: LazyLock<HardwareConfig> = LazyLock::new(|| {
    HardwareConfig::new(
        &["CZ", "ID", "RX", "RZ", "RZZ", "SX", "X"],
        &[
            ("H", DecompositionRule::Fixed(h)),
            ("Y", DecompositionRule::Fixed(y)),
            ("Z", DecompositionRule::Fixed(z)),
            ("S", DecompositionRule::Fixed(s)),
            ("T", DecompositionRule::Fixed(t)),
            ("CX", DecompositionRule::Fixed(heron_cx)),
            ("RY", DecompositionRule::Fixed(heron_ry)),
            ("U", DecompositionRule::Euler(heron_u)),
        ],
    )
});

fn rz(q: QubitId, angle: impl Into<Angle>) -> GateOp {
    GateOp::single("RZ", q).with_angle(angle)
}

fn rx(q: QubitId, angle: impl Into<Angle>) -> GateOp {
    GateOp::single("RX", q).with_angle(angle)
}

fn sx(q: QubitId) -> GateOp {
    GateOp::single("SX", q)
}

// Single-qubit rules shared by both architectures.

// H = RZ(π) · SX · RZ(π)
fn h(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![rz(q[0], PI), sx(q[0]), rz(q[0], PI)])
}

// Y = RZ(π/2) · X · RZ(-π/2)
fn y(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![
        rz(q[0], FRAC_PI_2),
        GateOp::single("X", q[0]),
        rz(q[0], -FRAC_PI_2),
    ])
}

fn z(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![rz(q[0], PI)])
}

fn s(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![rz(q[0], FRAC_PI_2)])
}

fn t(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![rz(q[0], FRAC_PI_4)])
}

// Eagle: ECR is the native entangler.

fn eagle_cx(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![GateOp::new("ECR", q.iter().copied())?])
}

// RY(θ) = RZ(π/2) · SX · RZ(θ) · SX · RZ(-π/2)
fn eagle_ry(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![
        rz(q[0], FRAC_PI_2),
        sx(q[0]),
        rz(q[0], Angle::Inherited),
        sx(q[0]),
        rz(q[0], -FRAC_PI_2),
    ])
}

fn eagle_u(q: QubitId, a: EulerAngles) -> Vec<GateOp> {
    vec![
        rz(q, a.phi),
        rz(q, FRAC_PI_2),
        sx(q),
        rz(q, a.theta),
        sx(q),
        rz(q, -FRAC_PI_2),
        rz(q, a.lambda),
    ]
}

// Heron: CZ is the native entangler, RX is native.

fn heron_cx(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![GateOp::new("CZ", q.iter().copied())?])
}

// RY(θ) = RX(π/2) · RZ(θ) · RX(-π/2)
fn heron_ry(q: &[QubitId]) -> IrResult<Vec<GateOp>> {
    Ok(vec![
        rx(q[0], FRAC_PI_2),
        rz(q[0], Angle::Inherited),
        rx(q[0], -FRAC_PI_2),
    ])
}

fn heron_u(q: QubitId, a: EulerAngles) -> Vec<GateOp> {
    vec![
        rz(q, a.phi),
        rx(q, FRAC_PI_2),
        rz(q, a.theta),
        rx(q, -FRAC_PI_2),
        rz(q, a.lambda),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ops: &[GateOp]) -> Vec<&str> {
        ops.iter().map(GateOp::name).collect()
    }

    #[test]
    fn test_architecture_lookup() {
        assert_eq!("EAGLE".parse::<Architecture>().unwrap(), Architecture::Eagle);
        assert_eq!("heron".parse::<Architecture>().unwrap(), Architecture::Heron);
        assert_eq!(
            "osprey".parse::<Architecture>().unwrap_err(),
            CompileError::UnknownArchitecture("osprey".into())
        );
        assert!("".parse::<Architecture>().is_err());
        assert_eq!(
            " heron ".parse::<Architecture>().unwrap_err(),
            CompileError::UnknownArchitecture(" heron ".into())
        );
    }

    #[test]
    fn test_basis_sets() {
        assert_eq!(
            Architecture::Eagle.config().basis(),
            ["ECR", "ID", "RZ", "SX", "X"]
        );
        assert_eq!(
            Architecture::Heron.config().basis(),
            ["CZ", "ID", "RX", "RZ", "RZZ", "SX", "X"]
        );
    }

    #[test]
    fn test_decomposition_outputs_stay_in_basis() {
        let one = GateOp::single("G", QubitId(0));
        let two = GateOp::new("G", [QubitId(0), QubitId(1)]).unwrap();

        for arch in Architecture::ALL {
            let config = arch.config();
            for gate in config.decomposable() {
                let src = if gate == "CX" { two.renamed(gate) } else { one.renamed(gate) };
                let src = if gate == "U" {
                    src.with_raw_param("0.1, 0.2, 0.3")
                } else {
                    src
                };
                let primitives = config.decomposition(gate).unwrap().apply(&src).unwrap();
                assert!(!primitives.is_empty());
                for p in &primitives {
                    assert!(config.is_native(p.name()), "{arch}: {gate} -> {}", p.name());
                }
            }
        }
    }

    #[test]
    fn test_hadamard_rule() {
        let op = GateOp::single("H", QubitId(4));
        let out = Architecture::Heron.config().decomposition("H").unwrap().apply(&op).unwrap();
        assert_eq!(names(&out), ["RZ", "SX", "RZ"]);
        assert_eq!(out[0].angle(), Some(Angle::Literal(PI)));
        assert_eq!(out[1].param(), None);
        assert_eq!(out[2].angle(), Some(Angle::Literal(PI)));
        assert!(out.iter().all(|p| p.qubits() == [QubitId(4)]));
    }

    #[test]
    fn test_ry_forwards_source_angle() {
        let op = GateOp::single("RY", QubitId(0)).with_raw_param("pi/4");

        let eagle = Architecture::Eagle.config().decomposition("RY").unwrap().apply(&op).unwrap();
        assert_eq!(names(&eagle), ["RZ", "SX", "RZ", "SX", "RZ"]);
        assert_eq!(eagle[2].angle(), Some(Angle::Inherited));

        let heron = Architecture::Heron.config().decomposition("RY").unwrap().apply(&op).unwrap();
        assert_eq!(names(&heron), ["RX", "RZ", "RX"]);
        assert_eq!(heron[0].angle(), Some(Angle::Literal(FRAC_PI_2)));
        assert_eq!(heron[1].angle(), Some(Angle::Inherited));
        assert_eq!(heron[2].angle(), Some(Angle::Literal(-FRAC_PI_2)));
    }

    #[test]
    fn test_u_rule_threads_angles() {
        let op = GateOp::single("U", QubitId(1)).with_raw_param("0.1, 0.2, 0.3");
        let out = Architecture::Heron.config().decomposition("U").unwrap().apply(&op).unwrap();
        let angles: Vec<_> = out.iter().map(|p| p.angle().unwrap().resolve(f64::NAN)).collect();
        assert_eq!(angles, [0.2, FRAC_PI_2, 0.1, -FRAC_PI_2, 0.3]);

        let out = Architecture::Eagle.config().decomposition("U").unwrap().apply(&op).unwrap();
        assert_eq!(names(&out), ["RZ", "RZ", "SX", "RZ", "SX", "RZ", "RZ"]);
        assert_eq!(out[0].angle(), Some(Angle::Literal(0.2)));
        assert_eq!(out[3].angle(), Some(Angle::Literal(0.1)));
        assert_eq!(out[6].angle(), Some(Angle::Literal(0.3)));
    }

    #[test]
    fn test_u_rule_rejects_malformed_parameters() {
        let rule = Architecture::Eagle.config().decomposition("U").unwrap();
        for bad in ["0.1, 0.2", "0.1, 0.2, 0.3, 0.4", "a, b, c", "pi, 0, 0", ""] {
            let op = GateOp::single("U", QubitId(0)).with_raw_param(bad);
            assert_eq!(
                rule.apply(&op).unwrap_err(),
                CompileError::MalformedParameter {
                    gate: "U".into(),
                    param: bad.into(),
                }
            );
        }

        let op = GateOp::single("U", QubitId(0));
        assert!(matches!(
            rule.apply(&op).unwrap_err(),
            CompileError::MalformedParameter { ref param, .. } if param == "<none>"
        ));
    }

    #[test]
    fn test_cx_maps_to_native_entangler() {
        let op = GateOp::new("CX", [QubitId(2), QubitId(0)]).unwrap();
        let eagle = Architecture::Eagle.config().decomposition("CX").unwrap().apply(&op).unwrap();
        assert_eq!(names(&eagle), ["ECR"]);
        assert_eq!(eagle[0].qubits(), [QubitId(2), QubitId(0)]);

        let heron = Architecture::Heron.config().decomposition("CX").unwrap().apply(&op).unwrap();
        assert_eq!(names(&heron), ["CZ"]);
    }
}
