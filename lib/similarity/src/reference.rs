//! Reference disease tables
//!
//! The reference table is an ordered list of named prototype vectors. Order is
//! significant: it breaks ranking ties. Tables are built once (from the
//! built-in data or a JSON file) and then only read.

use medirank_core::{Error, FeatureVector, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named prototype vector with the rationale shown when it ranks first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceDisease {
    /// Unique disease name
    pub name: String,
    /// Prototype symptom vector
    pub vector: FeatureVector,
    /// Rationale strings, in display order
    pub explanations: Vec<String>,
}

impl ReferenceDisease {
    pub fn new(
        name: impl Into<String>,
        vector: impl Into<FeatureVector>,
        explanations: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            vector: vector.into(),
            explanations: explanations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered, validated set of reference diseases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceTable {
    /// Table format version
    #[serde(default = "default_version")]
    pub version: u32,
    diseases: Vec<ReferenceDisease>,
}

fn default_version() -> u32 {
    1
}

impl ReferenceTable {
    /// Build a table, validating names, explanations and dimensions
    pub fn new(diseases: Vec<ReferenceDisease>) -> Result<Self> {
        let table = Self {
            version: 1,
            diseases,
        };
        table.validate()?;
        Ok(table)
    }

    /// The nine-disease table the tool ships with.
    pub fn builtin() -> Self {
        Self {
            version: 1,
            diseases: builtin_diseases(),
        }
    }

    /// Parse a JSON table document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: ReferenceTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a JSON table file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the table is usable for ranking:
    /// - at least one disease
    /// - unique, non-empty names
    /// - a non-empty explanation list per disease
    /// - seven-dimensional vectors
    pub fn validate(&self) -> Result<()> {
        if self.diseases.is_empty() {
            return Err(Error::InvalidConfig("reference table is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for disease in &self.diseases {
            if disease.name.trim().is_empty() {
                return Err(Error::InvalidConfig("disease name cannot be empty".to_string()));
            }
            if !seen.insert(disease.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate disease '{}'",
                    disease.name
                )));
            }
            if disease.explanations.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "disease '{}' has no explanations",
                    disease.name
                )));
            }
            disease.vector.check_dim()?;
        }

        Ok(())
    }

    #[inline]
    pub fn diseases(&self) -> &[ReferenceDisease] {
        &self.diseases
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ReferenceDisease> {
        self.diseases.iter().find(|d| d.name == name)
    }
}

fn builtin_diseases() -> Vec<ReferenceDisease> {
    vec![
        ReferenceDisease::new(
            "Dengue DHF",
            [38.5, 45.0, 4.0, 1.0, 0.6, 0.9, 0.9],
            &[
                "Fever and platelet count match dengue profile closely.",
                "Bleeding and high pain levels are consistent with dengue hemorrhagic fever symptoms.",
                "Nausea and fatigue further support dengue likelihood.",
            ],
        ),
        ReferenceDisease::new(
            "Sepsis",
            [39.0, 180.0, 25.0, 0.0, 0.3, 0.6, 0.0],
            &[
                "Elevated WBC and fever align with systemic infection.",
                "Fatigue and moderate pain also support sepsis diagnosis.",
            ],
        ),
        ReferenceDisease::new(
            "Meningitis",
            [39.2, 150.0, 12.0, 0.0, 0.6, 0.9, 0.6],
            &[
                "High fever and pain suggest possible CNS involvement.",
                "Moderate nausea supports meningitis pattern.",
            ],
        ),
        ReferenceDisease::new(
            "Leukemia",
            [38.0, 90.0, 1.2, 1.0, 0.6, 0.9, 0.3],
            &[
                "Low WBC and platelets indicate hematologic abnormality.",
                "Persistent fatigue and moderate pain are common.",
            ],
        ),
        ReferenceDisease::new(
            "Typhoid Fever",
            [38.8, 110.0, 5.0, 0.0, 0.6, 0.3, 0.9],
            &[
                "Fever with GI-related symptoms like nausea aligns with typhoid.",
                "Moderate fatigue and pain reinforce the match.",
            ],
        ),
        ReferenceDisease::new(
            "Malaria",
            [39.5, 70.0, 6.5, 1.0, 0.9, 0.9, 0.9],
            &[
                "High fever, low platelets, and fatigue are classic malaria signs.",
                "Pain and nausea strongly support this diagnosis.",
            ],
        ),
        ReferenceDisease::new(
            "COVID-19",
            [39.0, 140.0, 7.0, 0.0, 0.9, 0.6, 0.3],
            &[
                "Fever and respiratory fatigue common in severe COVID.",
                "Mild nausea and moderate pain also seen in cases.",
            ],
        ),
        ReferenceDisease::new(
            "Hepatitis A",
            [38.0, 160.0, 5.5, 0.0, 0.6, 0.3, 0.9],
            &[
                "Mild fever and fatigue typical in liver inflammation.",
                "GI symptoms like nausea are strong indicators.",
            ],
        ),
        ReferenceDisease::new(
            "Appendicitis",
            [38.2, 250.0, 10.0, 0.0, 0.3, 0.9, 0.6],
            &[
                "High WBC and localized pain consistent with appendicitis.",
                "Fever and slight nausea support early-stage detection.",
            ],
        ),
    ]
}
