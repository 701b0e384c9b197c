//! Per-gate error rates.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IrError, IrResult};

/// Mapping from canonical gate name to error probability.
///
/// Every stored probability lies in `[0, 1)`. Names are canonicalized to
/// uppercase on insertion and lookup, so `"rz"` and `"RZ"` address the same
/// entry.
///
/// The table deserializes from a flat `{ "GATE": p }` map and applies the
/// same validation as [`ErrorRateTable::insert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ErrorRateTable {
    rates: FxHashMap<String, f64>,
}

impl ErrorRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, probability)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> IrResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (name, p) in pairs {
            table.insert(name, p)?;
        }
        Ok(table)
    }

    /// Insert or replace the error rate for a gate.
    ///
    /// Returns the previous rate, if any.
    pub fn insert(&mut self, name: impl AsRef<str>, probability: f64) -> IrResult<Option<f64>> {
        let name = name.as_ref().to_ascii_uppercase();
        if !(0.0..1.0).contains(&probability) {
            return Err(IrError::InvalidProbability {
                gate_name: name,
                value: probability,
            });
        }
        Ok(self.rates.insert(name, probability))
    }

    /// Look up the error rate for a gate.
    pub fn get(&self, name: &str) -> Option<f64> {
        if let Some(p) = self.rates.get(name) {
            return Some(*p);
        }
        self.rates.get(&name.to_ascii_uppercase()).copied()
    }

    /// Whether a rate is recorded for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(name, p)| (name.as_str(), *p))
    }

    /// Entries sorted by gate name.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl TryFrom<BTreeMap<String, f64>> for ErrorRateTable {
    type Error = IrError;

    fn try_from(map: BTreeMap<String, f64>) -> IrResult<Self> {
        Self::from_pairs(map)
    }
}

impl From<ErrorRateTable> for BTreeMap<String, f64> {
    fn from(table: ErrorRateTable) -> Self {
        table.rates.into_iter().collect()
    }
}
