//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur during basis translation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] qpgf_ir::IrError),

    /// Architecture name not in the registry.
    #[error("Unknown architecture: '{0}'. Available: EAGLE, HERON")]
    UnknownArchitecture(String),

    /// Gate is neither native nor decomposable on the target.
    #[error("Unsupported gate: '{0}'")]
    UnsupportedGate(String),

    /// Parameter text of a parametrized decomposition could not be parsed.
    #[error("Failed to parse {gate} gate parameters: {param}")]
    MalformedParameter { gate: String, param: String },

    /// A decomposition primitive has no recorded error rate.
    #[error("Missing error rate for sub-gate '{gate}' in decomposition of '{decomposed}'")]
    MissingErrorRate { gate: String, decomposed: String },

    /// `1 - Π(1 - p_i)` over a decomposition's primitives rounds to 1.
    #[error("Composite error rate for '{gate}' rounds to 1 (primitives: {primitives})")]
    CompositeRateSaturated { gate: String, primitives: String },

    /// Decomposition mode string not recognized.
    #[error("Unsupported decomposition mode: '{0}'. Available: unit, decomp")]
    UnsupportedMode(String),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
