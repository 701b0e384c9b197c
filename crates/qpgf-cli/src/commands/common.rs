//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use qpgf_ir::{ErrorRateTable, GateOp};
use qpgf_qasm::parse;

/// Load the gate sequence of a circuit file.
pub fn load_circuit(path: &str) -> Result<Vec<GateOp>> {
    let source = read_file(path)?;
    parse(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))
}

/// Load an error-rate table from a JSON or YAML file.
///
/// The format is chosen by extension (`.json`, `.yaml`, `.yml`); any other
/// extension is read as JSON.
pub fn load_error_rates(path: &str) -> Result<ErrorRateTable> {
    let source = read_file(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid error-rate YAML: {path}")),
        _ => serde_json::from_str(&source)
            .with_context(|| format!("Invalid error-rate JSON: {path}")),
    }
}

/// Write `value` as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T, path: &str) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
}

fn read_file(path: &str) -> Result<String> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}
