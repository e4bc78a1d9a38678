//! Diagnosis report rendering
//!
//! Turns a [`Diagnosis`] into what a front end shows: the input summary, the
//! ranking table with display rounding applied, the top diagnosis and its
//! rationale. Rendered as plain text or serialized as JSON.

use chrono::{DateTime, Utc};
use medirank_core::{PatientRecord, Result};
use medirank_similarity::{Diagnosis, RankingEntry};
use serde::Serialize;
use std::fmt::Write;

/// One row of the ranking table, rounded for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Distance")]
    pub distance: f64,
    #[serde(rename = "Similarity (%)")]
    pub similarity: f64,
}

impl From<&RankingEntry> for ReportRow {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            disease: entry.disease.clone(),
            distance: entry.rounded_distance(),
            similarity: entry.rounded_similarity(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub generated_at: DateTime<Utc>,
    /// Encoded inputs as `(label, value)`, feature order
    pub inputs: Vec<(String, f64)>,
    pub ranking: Vec<ReportRow>,
    pub top_diagnosis: String,
    pub explanation: Vec<String>,
}

impl DiagnosisReport {
    pub fn new(record: &PatientRecord, diagnosis: &Diagnosis) -> Self {
        Self::at(record, diagnosis, Utc::now())
    }

    /// Report with a fixed timestamp
    pub fn at(record: &PatientRecord, diagnosis: &Diagnosis, generated_at: DateTime<Utc>) -> Self {
        Self {
            patient_name: record.patient_name.clone(),
            doctor_name: record.doctor_name.clone(),
            generated_at,
            inputs: diagnosis
                .patient_vector
                .labelled()
                .into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
            ranking: diagnosis.ranking.iter().map(ReportRow::from).collect(),
            top_diagnosis: diagnosis.top.clone(),
            explanation: diagnosis.explanation.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // write! into a String cannot fail
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "MediRank Diagnosis Report")?;
        writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        if let Some(name) = &self.patient_name {
            writeln!(out, "Patient:   {}", name)?;
        }
        if let Some(name) = &self.doctor_name {
            writeln!(out, "Doctor:    {}", name)?;
        }

        writeln!(out)?;
        writeln!(out, "Patient Input Summary")?;
        for (label, value) in &self.inputs {
            writeln!(out, "  {:<9} {}", format!("{}:", label), value)?;
        }

        let name_width = self
            .ranking
            .iter()
            .map(|r| r.disease.len())
            .max()
            .unwrap_or(0)
            .max("Disease".len());

        writeln!(out)?;
        writeln!(out, "Diagnosis Ranking")?;
        writeln!(
            out,
            "  {:<width$}  {:>10}  {:>14}",
            "Disease",
            "Distance",
            "Similarity (%)",
            width = name_width
        )?;
        for row in &self.ranking {
            writeln!(
                out,
                "  {:<width$}  {:>10.2}  {:>14.1}",
                row.disease,
                row.distance,
                row.similarity,
                width = name_width
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Most likely diagnosis: {}", self.top_diagnosis)?;
        writeln!(out)?;
        writeln!(out, "Why this diagnosis?")?;
        for point in &self.explanation {
            writeln!(out, "  - {}", point)?;
        }

        Ok(())
    }
}
