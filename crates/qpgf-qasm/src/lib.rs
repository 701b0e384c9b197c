//! `OpenQASM` Gate Extractor for qpgf
//!
//! This crate turns circuit text into the ordered [`GateOp`](qpgf_ir::GateOp)
//! sequence consumed by the basis translator. It is deliberately not a full
//! `OpenQASM` front end: the input is read line by line, and only two kinds
//! of line are recognized.
//!
//! | Line | Handling | Example |
//! |------|----------|---------|
//! | Qubit declaration | skipped | `qubit[5] q;`, `qreg q[5];` |
//! | Gate invocation (1 or 2 qubits) | emitted | `h q[0];`, `cx q[0], q[1];` |
//! | Parameterized invocation | emitted, raw parameter kept | `u(0.5, 0.5, 0.5) q[0];` |
//! | Anything else | skipped | `// comment`, `c[0] = measure q[0];`, `barrier q;` |
//!
//! Gate names are uppercased. Parameter lists are kept as the raw text between
//! the parentheses; interpreting them is up to the translator.
//!
//! # Example
//!
//! ```rust
//! use qpgf_ir::QubitId;
//! use qpgf_qasm::parse;
//!
//! let qasm = r#"
//! OPENQASM 3.0;
//! include "stdgates.inc";
//! qubit[2] q;
//! h q[0];
//! cx q[0], q[1];
//! c[0] = measure q[0];
//! "#;
//!
//! let ops = parse(qasm).unwrap();
//! assert_eq!(ops.len(), 2);
//! assert_eq!(ops[0].name(), "H");
//! assert_eq!(ops[1].qubits(), &[QubitId(0), QubitId(1)]);
//! ```

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::parse;
