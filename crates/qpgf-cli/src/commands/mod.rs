//! CLI command implementations.

pub mod analyze;
pub mod architectures;
pub mod common;
pub mod version;
