//! Explanation lookup for the top-ranked disease
//!
//! The explanation table is kept separate from the reference table. The two
//! may be maintained independently, so a lookup miss yields
//! [`FALLBACK_EXPLANATION`] rather than an error.

use crate::reference::ReferenceDisease;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Returned when a disease has no entry
pub const FALLBACK_EXPLANATION: &str = "No explanation available.";

/// Disease name to ordered rationale strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExplanationTable {
    entries: AHashMap<String, Vec<String>>,
}

impl ExplanationTable {
    pub fn new(entries: AHashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Derive the table from reference diseases. A later duplicate name
    /// replaces an earlier one.
    pub fn from_references(diseases: &[ReferenceDisease]) -> Self {
        diseases
            .iter()
            .map(|d| (d.name.clone(), d.explanations.clone()))
            .collect()
    }

    /// Explanations for the built-in reference table
    pub fn builtin() -> Self {
        Self::from_references(crate::ReferenceTable::builtin().diseases())
    }

    #[inline]
    pub fn get(&self, disease: &str) -> Option<&[String]> {
        self.entries.get(disease).map(Vec::as_slice)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, disease: &str) -> bool {
        self.entries.contains_key(disease)
    }
}

impl FromIterator<(String, Vec<String>)> for ExplanationTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Rationale for `disease`, verbatim and in stored order, or the single-line
/// fallback when the table has no entry.
pub fn explain(disease: &str, table: &ExplanationTable) -> Vec<String> {
    match table.get(disease) {
        Some(lines) => lines.to_vec(),
        None => vec![FALLBACK_EXPLANATION.to_string()],
    }
}
