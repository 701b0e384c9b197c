//! Error types for the QASM extractor.

use thiserror::Error;

/// Errors that can occur during parsing.
///
/// Unrecognized lines are never an error; only gate invocations that would
/// produce an invalid operation are rejected.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// A two-qubit invocation names the same qubit twice.
    #[error("Duplicate qubit {qubit} in gate '{gate}' at line {line}")]
    DuplicateQubit { line: usize, gate: String, qubit: u32 },

    /// Qubit index too large to address. `index` is the digit text as written.
    #[error("Qubit index {index} out of range at line {line}")]
    IndexOutOfRange { line: usize, index: String },

    /// The invocation does not form a valid gate operation.
    #[error("Invalid gate operation at line {line}: {source}")]
    InvalidOperation {
        line: usize,
        #[source]
        source: qpgf_ir::IrError,
    },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
