//! Gate operations and their parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A rotation angle attached to a decomposition primitive.
///
/// Decomposition rules either fix a literal angle or forward the angle of
/// the gate being decomposed. The two cases are kept apart so that a consumer
/// never mistakes "use this value" for "use the source gate's own angle".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Angle {
    /// A fixed angle in radians.
    Literal(f64),
    /// The angle of the source gate, substituted by the consumer.
    Inherited,
}

impl Angle {
    /// Resolve this angle against the source gate's angle.
    ///
    /// ```
    /// use qpgf_ir::Angle;
    ///
    /// assert_eq!(Angle::Literal(0.5).resolve(1.0), 0.5);
    /// assert_eq!(Angle::Inherited.resolve(1.0), 1.0);
    /// ```
    pub fn resolve(self, source: f64) -> f64 {
        match self {
            Angle::Literal(value) => value,
            Angle::Inherited => source,
        }
    }

    /// Whether this angle is taken from the source gate.
    pub fn is_inherited(self) -> bool {
        matches!(self, Angle::Inherited)
    }
}

impl From<f64> for Angle {
    fn from(value: f64) -> Self {
        Angle::Literal(value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Literal(value) => write!(f, "{value}"),
            Angle::Inherited => write!(f, "<inherited>"),
        }
    }
}

/// The parameter of a gate operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateParam {
    /// Parameter text exactly as written in the circuit source.
    Raw(String),
    /// Angle assigned by a decomposition rule.
    Angle(Angle),
}

impl GateParam {
    /// The raw source text, if this parameter came from the parser.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            GateParam::Raw(text) => Some(text),
            GateParam::Angle(_) => None,
        }
    }

    /// The decomposition angle, if any.
    pub fn as_angle(&self) -> Option<Angle> {
        match self {
            GateParam::Raw(_) => None,
            GateParam::Angle(angle) => Some(*angle),
        }
    }
}

impl fmt::Display for GateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateParam::Raw(text) => write!(f, "{text}"),
            GateParam::Angle(angle) => write!(f, "{angle}"),
        }
    }
}

/// A gate applied to one or two distinct qubits.
///
/// Names are canonicalized to uppercase on construction. A `GateOp` is an
/// immutable value; the builder-style `with_*` methods consume and return it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateOp {
    name: String,
    qubits: Vec<QubitId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<GateParam>,
}

impl GateOp {
    /// Create a gate operation, validating its qubit list.
    ///
    /// Fails unless the operation names one or two pairwise distinct qubits.
    pub fn new(name: impl AsRef<str>, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let name = name.as_ref().to_ascii_uppercase();
        let qubits: Vec<QubitId> = qubits.into_iter().collect();

        if qubits.is_empty() || qubits.len() > 2 {
            return Err(IrError::InvalidQubitCount {
                gate_name: name,
                got: qubits.len(),
            });
        }
        if qubits.len() == 2 && qubits[0] == qubits[1] {
            return Err(IrError::DuplicateQubit {
                qubit: qubits[0],
                gate_name: name,
            });
        }

        Ok(Self {
            name,
            qubits,
            param: None,
        })
    }

    /// Create a single-qubit gate operation.
    pub fn single(name: impl AsRef<str>, qubit: QubitId) -> Self {
        Self {
            name: name.as_ref().to_ascii_uppercase(),
            qubits: vec![qubit],
            param: None,
        }
    }

    /// Create an operation with a new name over the same qubits as `self`.
    ///
    /// The parameter is not carried over.
    #[must_use]
    pub fn renamed(&self, name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_uppercase(),
            qubits: self.qubits.clone(),
            param: None,
        }
    }

    /// Attach a parameter.
    #[must_use]
    pub fn with_param(mut self, param: GateParam) -> Self {
        self.param = Some(param);
        self
    }

    /// Attach raw parameter text.
    #[must_use]
    pub fn with_raw_param(self, text: impl Into<String>) -> Self {
        self.with_param(GateParam::Raw(text.into()))
    }

    /// Attach a decomposition angle.
    #[must_use]
    pub fn with_angle(self, angle: impl Into<Angle>) -> Self {
        self.with_param(GateParam::Angle(angle.into()))
    }

    /// Canonical (uppercase) gate name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qubits in operand order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Number of qubits the operation touches.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// The parameter, if any.
    pub fn param(&self) -> Option<&GateParam> {
        self.param.as_ref()
    }

    /// Raw parameter text, if the parameter came from the parser.
    pub fn raw_param(&self) -> Option<&str> {
        self.param.as_ref().and_then(GateParam::as_raw)
    }

    /// Decomposition angle, if any.
    pub fn angle(&self) -> Option<Angle> {
        self.param.as_ref().and_then(GateParam::as_angle)
    }

    /// Whether the operation touches `qubit`.
    pub fn touches(&self, qubit: QubitId) -> bool {
        self.qubits.contains(&qubit)
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(param) = &self.param {
            write!(f, "({param})")?;
        }
        for (i, qubit) in self.qubits.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{qubit}")?;
        }
        Ok(())
    }
}
