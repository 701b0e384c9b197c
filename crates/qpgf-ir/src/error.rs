//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when constructing IR values.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum IrError {
    /// A gate operation must act on one or two qubits.
    #[error("Gate '{gate_name}' must act on 1 or 2 qubits, got {got}")]
    InvalidQubitCount {
        /// Name of the gate.
        gate_name: String,
        /// Number of qubits provided.
        got: usize,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: String,
    },

    /// Error probability outside `[0, 1)`.
    #[error("Error rate for gate '{gate_name}' must lie in [0, 1), got {value}")]
    InvalidProbability {
        /// Name of the gate.
        gate_name: String,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
