//! Patient input record and the vector encoder.

use crate::ordinal::{Bleeding, Nausea, OrdinalLabel, Severity};
use crate::{Error, FeatureVector, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted fever range in degrees Celsius
pub const FEVER_RANGE: RangeInclusive<f64> = 35.0..=42.0;
/// Accepted platelet count range
pub const PLATELET_RANGE: RangeInclusive<f64> = 10.0..=500.0;
/// Accepted white blood cell count range
pub const WBC_RANGE: RangeInclusive<f64> = 0.5..=30.0;

/// Structured patient input as collected by a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Display only, never part of the feature vector
    #[serde(default)]
    pub patient_name: Option<String>,

    /// Display only, never part of the feature vector
    #[serde(default)]
    pub doctor_name: Option<String>,

    /// Body temperature in Celsius
    pub fever: f64,

    /// Platelet count
    pub platelet: f64,

    /// White blood cell count
    pub wbc: f64,

    #[serde(default)]
    pub bleeding: Bleeding,

    #[serde(default)]
    pub fatigue: Severity,

    #[serde(default)]
    pub pain: Severity,

    #[serde(default)]
    pub nausea: Nausea,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            patient_name: Some("John Doe".to_string()),
            doctor_name: Some("Dr. Zahari".to_string()),
            fever: 38.5,
            platelet: 55.0,
            wbc: 3.0,
            bleeding: Bleeding::No,
            fatigue: Severity::None,
            pain: Severity::None,
            nausea: Nausea::None,
        }
    }
}

impl PatientRecord {
    /// Check the numeric fields against the accepted input ranges.
    ///
    /// All violations are reported together.
    ///
    /// # Errors
    /// `InvalidInput` listing every out-of-range or non-finite field.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let checks = [
            ("fever", self.fever, &FEVER_RANGE),
            ("platelet", self.platelet, &PLATELET_RANGE),
            ("wbc", self.wbc, &WBC_RANGE),
        ];
        for (name, value, range) in checks {
            if !value.is_finite() {
                errors.push(format!("{} must be a finite number", name));
            } else if !range.contains(&value) {
                errors.push(format!(
                    "{} {} out of range [{}, {}]",
                    name,
                    value,
                    range.start(),
                    range.end()
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidInput(errors.join("; ")))
        }
    }

    /// Encode this record. Does not call [`PatientRecord::validate`].
    pub fn encode(&self) -> Result<FeatureVector> {
        encode(
            self.fever,
            self.platelet,
            self.wbc,
            self.bleeding,
            self.fatigue,
            self.pain,
            self.nausea,
        )
    }

    /// `(label, value)` rows of the encoded inputs, in feature order
    pub fn summary(&self) -> Result<Vec<(&'static str, f64)>> {
        Ok(self.encode()?.labelled())
    }
}

/// Build the patient feature vector.
///
/// Numeric values pass through untouched; categorical values go through the
/// ordinal table.
///
/// # Errors
/// `InvalidInput` if a categorical label has no ordinal mapping.
pub fn encode(
    fever: f64,
    platelet: f64,
    wbc: f64,
    bleeding: Bleeding,
    fatigue: Severity,
    pain: Severity,
    nausea: Nausea,
) -> Result<FeatureVector> {
    Ok(FeatureVector::from_array([
        fever,
        platelet,
        wbc,
        bleeding.value()?,
        fatigue.value()?,
        pain.value()?,
        nausea.value()?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sepsis_record() -> PatientRecord {
        PatientRecord {
            fever: 39.0,
            platelet: 180.0,
            wbc: 25.0,
            bleeding: Bleeding::No,
            fatigue: Severity::Mild,
            pain: Severity::Moderate,
            nausea: Nausea::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_sepsis_profile() {
        let v = sepsis_record().encode().unwrap();
        assert_eq!(v.as_slice(), &[39.0, 180.0, 25.0, 0.0, 0.3, 0.6, 0.0]);
    }

    #[test]
    fn test_encode_dengue_profile() {
        let v = encode(
            38.5,
            45.0,
            4.0,
            Bleeding::Yes,
            Severity::Moderate,
            Severity::Severe,
            Nausea::Frequent,
        )
        .unwrap();
        assert_eq!(v.as_slice(), &[38.5, 45.0, 4.0, 1.0, 0.6, 0.9, 0.9]);
    }

    #[test]
    fn test_encode_passes_numeric_through_unvalidated() {
        let record = PatientRecord {
            fever: 50.0,
            platelet: -1.0,
            ..Default::default()
        };
        let v = record.encode().unwrap();
        assert_eq!(v.as_slice()[0], 50.0);
        assert_eq!(v.as_slice()[1], -1.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_encode_deterministic() {
        let record = sepsis_record();
        assert_eq!(record.encode().unwrap(), record.encode().unwrap());
    }

    #[test]
    fn test_default_record_matches_form() {
        let record = PatientRecord::default();
        assert_eq!(record.patient_name.as_deref(), Some("John Doe"));
        assert_eq!(record.doctor_name.as_deref(), Some("Dr. Zahari"));
        assert!(record.validate().is_ok());
        assert_eq!(
            record.encode().unwrap().as_slice(),
            &[38.5, 55.0, 3.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        let low = PatientRecord {
            fever: 35.0,
            platelet: 10.0,
            wbc: 0.5,
            ..Default::default()
        };
        assert!(low.validate().is_ok());

        let high = PatientRecord {
            fever: 42.0,
            platelet: 500.0,
            wbc: 30.0,
            ..Default::default()
        };
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let record = PatientRecord {
            fever: 34.9,
            platelet: 501.0,
            wbc: f64::NAN,
            ..Default::default()
        };
        match record.validate() {
            Err(Error::InvalidInput(msg)) => {
                assert!(msg.contains("fever"));
                assert!(msg.contains("platelet"));
                assert!(msg.contains("wbc must be a finite number"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_labels() {
        let rows = sepsis_record().summary().unwrap();
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Fever", "Platelet", "WBC", "Bleeding", "Fatigue", "Pain", "Nausea"]
        );
        assert_eq!(rows[5], ("Pain", 0.6));
    }

    #[test]
    fn test_record_from_json() {
        let record: PatientRecord = serde_json::from_str(
            r#"{"fever": 39.0, "platelet": 180, "wbc": 25.0,
                "fatigue": "Mild", "pain": "Moderate"}"#,
        )
        .unwrap();
        assert_eq!(
            record,
            PatientRecord {
                patient_name: None,
                doctor_name: None,
                ..sepsis_record()
            }
        );
    }
}
