//! qpgf Error-Count Distributions
//!
//! This crate turns a hardware-native gate sequence and its per-gate error
//! rates into the probability generating function (PGF) of the number of
//! qubit-local errors.
//!
//! Every gate is modelled as an independent Bernoulli source: with
//! probability `p` it fails and puts one error on each qubit it touches.
//!
//! # Core Components
//!
//! - [`build_pgf`]: total error count, by FFT convolution ([`fft`])
//! - [`build_joint_pgf`]: per-qubit error counts, with [`JointPgf::marginal`]
//!   and [`JointPgf::total`] to collapse them
//! - [`PgfSummary`] and [`tail_probability`] for reporting
//!
//! # Example
//!
//! ```rust
//! use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
//! use qpgf_pgf::{PgfSummary, build_joint_pgf, build_pgf};
//!
//! let ops = vec![
//!     GateOp::single("SX", QubitId(0)),
//!     GateOp::new("CZ", [QubitId(0), QubitId(1)]).unwrap(),
//! ];
//! let rates = ErrorRateTable::from_pairs([("SX", 2.5e-4), ("CZ", 2.7e-3)]).unwrap();
//!
//! let scalar = build_pgf(&ops, &rates).unwrap();
//! let joint = build_joint_pgf(&ops, &rates).unwrap();
//! for (a, b) in scalar.pgf.iter().zip(joint.total()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//!
//! let summary = PgfSummary::from_pgf(&scalar.pgf);
//! assert_eq!(summary.mode, 0);
//! assert_eq!(summary.support, 3);
//! ```

pub mod error;
pub mod fft;
pub mod joint;
pub mod scalar;
pub mod summary;

pub use error::{PgfError, PgfResult};
pub use joint::{JointPgf, build_joint_pgf};
pub use scalar::{ScalarPgf, build_pgf};
pub use summary::{PgfSummary, moments, tail_probability};
