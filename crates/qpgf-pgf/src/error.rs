//! Error types for PGF construction.

use thiserror::Error;

/// Errors that can occur while building or querying a PGF.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PgfError {
    /// A gate in the circuit has no recorded error rate.
    #[error("Missing error rate for gate: {0}")]
    MissingErrorRate(String),

    /// Marginal requested for a qubit the joint PGF does not track.
    #[error("Qubit index {qubit} out of range for joint PGF over {num_qubits} qubits")]
    QubitOutOfRange { qubit: u32, num_qubits: usize },
}

/// Result type for PGF operations.
pub type PgfResult<T> = Result<T, PgfError>;
