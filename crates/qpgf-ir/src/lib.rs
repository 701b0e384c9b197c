//! qpgf Gate-Operation Model
//!
//! This crate provides the data model shared by every stage of the qpgf
//! pipeline: the parser produces [`GateOp`] sequences, the basis translator
//! rewrites them into a hardware's native gates, and the PGF builders consume
//! them together with an [`ErrorRateTable`].
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits by index
//! - **Gate operations**: [`GateOp`], an immutable `(name, qubits, param)` triple
//! - **Parameters**: [`GateParam`] keeps raw source text apart from
//!   decomposition angles, and [`Angle`] separates literal angles from angles
//!   inherited from the source gate
//! - **Error rates**: [`ErrorRateTable`] maps canonical gate names to
//!   per-gate failure probabilities in `[0, 1)`
//!
//! # Example
//!
//! ```rust
//! use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
//!
//! let cx = GateOp::new("cx", [QubitId(0), QubitId(1)]).unwrap();
//! assert_eq!(cx.name(), "CX");
//! assert_eq!(cx.num_qubits(), 2);
//!
//! let mut rates = ErrorRateTable::new();
//! rates.insert("cx", 0.01).unwrap();
//! assert_eq!(rates.get("CX"), Some(0.01));
//! ```

pub mod error;
pub mod gate;
pub mod qubit;
pub mod rates;

pub use error::{IrError, IrResult};
pub use gate::{Angle, GateOp, GateParam};
pub use qubit::QubitId;
pub use rates::ErrorRateTable;
