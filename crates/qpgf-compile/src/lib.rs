//! qpgf Basis Translation
//!
//! This crate rewrites a parsed gate sequence into the native basis of a
//! target hardware architecture.
//!
//! # Overview
//!
//! ```text
//! Vec<GateOp> (source gates)
//!       │
//!       ▼
//! ┌──────────────────┐
//! │ BasisTranslator  │ ◄── HardwareConfig (basis, decomposition rules)
//! └──────────────────┘
//!       │
//!       ├── native gate       → copied
//!       ├── mode = decomp     → primitive sequence
//!       └── mode = unit       → <NAME>_DECOMP + synthetic error rate
//!       │
//!       ▼
//! Vec<GateOp> (hardware gates)
//! ```
//!
//! # Example
//!
//! ```rust
//! use qpgf_compile::translate;
//! use qpgf_ir::{ErrorRateTable, GateOp, QubitId};
//!
//! let ops = vec![GateOp::single("H", QubitId(0))];
//! let mut rates = ErrorRateTable::from_pairs([("RZ", 0.0), ("SX", 2.5e-4)]).unwrap();
//!
//! let native = translate(&ops, "heron", "decomp", &mut rates).unwrap();
//! assert_eq!(native.len(), 3);
//!
//! let unit = translate(&ops, "heron", "unit", &mut rates).unwrap();
//! assert_eq!(unit[0].name(), "H_DECOMP");
//! assert!((rates.get("H_DECOMP").unwrap() - 2.5e-4).abs() < 1e-15);
//! ```

pub mod error;
pub mod target;
pub mod translation;

pub use error::{CompileError, CompileResult};
pub use target::{Architecture, DecompositionRule, EulerAngles, HardwareConfig};
pub use translation::{BasisTranslator, DecompMode, SYNTHETIC_SUFFIX, synthetic_name, translate};
