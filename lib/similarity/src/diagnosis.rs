//! Encode, rank, explain.

use crate::explain::{explain, ExplanationTable};
use crate::rank::{rank, RankingResult};
use crate::reference::ReferenceTable;
use medirank_core::{FeatureVector, PatientRecord, Result};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one diagnosis request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// Encoded patient vector
    pub patient_vector: FeatureVector,
    /// Every reference disease, best match first
    pub ranking: RankingResult,
    /// Name of the best match
    pub top: String,
    /// Rationale for the best match
    pub explanation: Vec<String>,
}

/// Runs diagnoses against a fixed pair of tables.
///
/// The tables are shared read-only, so a `Diagnoser` can be cloned into
/// worker threads freely.
#[derive(Debug, Clone)]
pub struct Diagnoser {
    references: Arc<ReferenceTable>,
    explanations: Arc<ExplanationTable>,
}

impl Diagnoser {
    pub fn new(references: Arc<ReferenceTable>, explanations: Arc<ExplanationTable>) -> Self {
        Self {
            references,
            explanations,
        }
    }

    /// Built-in tables
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(ReferenceTable::builtin()),
            Arc::new(ExplanationTable::builtin()),
        )
    }

    /// Uses `references` for both ranking and explanations
    pub fn from_references(references: ReferenceTable) -> Self {
        let explanations = ExplanationTable::from_references(references.diseases());
        Self::new(Arc::new(references), Arc::new(explanations))
    }

    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    pub fn explanations(&self) -> &ExplanationTable {
        &self.explanations
    }

    pub fn diagnose(&self, record: &PatientRecord) -> Result<Diagnosis> {
        diagnose(record, &self.references, &self.explanations)
    }

    pub fn diagnose_vector(&self, patient: &FeatureVector) -> Result<Diagnosis> {
        diagnose_vector(patient, &self.references, &self.explanations)
    }
}

/// Encode `record`, rank it against `references` and explain the top match.
///
/// The record is not range-checked here; call [`PatientRecord::validate`] first
/// when the input comes from outside.
pub fn diagnose(
    record: &PatientRecord,
    references: &ReferenceTable,
    explanations: &ExplanationTable,
) -> Result<Diagnosis> {
    let patient = record.encode()?;
    diagnose_vector(&patient, references, explanations)
}

pub fn diagnose_vector(
    patient: &FeatureVector,
    references: &ReferenceTable,
    explanations: &ExplanationTable,
) -> Result<Diagnosis> {
    let ranking = rank(patient, references.diseases())?;
    let top = ranking.top();
    let explanation = explain(&top.disease, explanations);

    tracing::info!(
        "Most likely diagnosis: {} (distance={:.2}, similarity={:.1}%)",
        top.disease,
        top.distance,
        top.similarity
    );
    if !explanations.contains(&top.disease) {
        tracing::warn!("No explanation entry for '{}'", top.disease);
    }

    Ok(Diagnosis {
        patient_vector: patient.clone(),
        top: top.disease.clone(),
        explanation,
        ranking,
    })
}
