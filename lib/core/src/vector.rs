use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of features in a patient or reference vector.
pub const FEATURE_DIM: usize = 7;

/// Display labels in feature order.
pub const FEATURE_NAMES: [&str; FEATURE_DIM] = [
    "Fever",
    "Platelet",
    "WBC",
    "Bleeding",
    "Fatigue",
    "Pain",
    "Nausea",
];

/// Fixed-order symptom encoding: `[fever, platelet, wbc, bleeding, fatigue, pain, nausea]`.
///
/// The length is not enforced at construction because reference vectors can come
/// from user-supplied table files. Use [`FeatureVector::check_dim`] before any
/// computation that relies on the seven-feature layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_array(data: [f64; FEATURE_DIM]) -> Self {
        Self { data: data.to_vec() }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Ensure the vector has exactly [`FEATURE_DIM`] components.
    pub fn check_dim(&self) -> Result<()> {
        if self.data.len() != FEATURE_DIM {
            return Err(Error::DimensionMismatch {
                expected: FEATURE_DIM,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Euclidean distance. Both vectors must have the same length.
    pub fn euclidean_distance(&self, other: &FeatureVector) -> Result<f64> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }

        let sum: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok(sum.sqrt())
    }

    /// Label/value pairs in feature order
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES
            .iter()
            .zip(self.data.iter())
            .map(|(name, value)| (*name, *value))
            .collect()
    }
}

impl From<[f64; FEATURE_DIM]> for FeatureVector {
    fn from(data: [f64; FEATURE_DIM]) -> Self {
        Self::from_array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance() {
        let v1 = FeatureVector::new(vec![0.0, 0.0]);
        let v2 = FeatureVector::new(vec![3.0, 4.0]);
        assert!((v1.euclidean_distance(&v2).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_self_distance_is_zero() {
        let v = FeatureVector::from_array([38.5, 45.0, 4.0, 1.0, 0.6, 0.9, 0.9]);
        assert_eq!(v.euclidean_distance(&v).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let v1 = FeatureVector::new(vec![1.0; 7]);
        let v2 = FeatureVector::new(vec![1.0; 6]);
        assert!(matches!(
            v1.euclidean_distance(&v2),
            Err(Error::DimensionMismatch { expected: 7, actual: 6 })
        ));
    }

    #[test]
    fn test_check_dim() {
        assert!(FeatureVector::new(vec![0.0; 7]).check_dim().is_ok());
        assert!(matches!(
            FeatureVector::new(vec![0.0; 8]).check_dim(),
            Err(Error::DimensionMismatch { expected: 7, actual: 8 })
        ));
    }

    #[test]
    fn test_labelled_order() {
        let v = FeatureVector::from_array([39.0, 180.0, 25.0, 0.0, 0.3, 0.6, 0.0]);
        let labelled = v.labelled();
        assert_eq!(labelled.len(), 7);
        assert_eq!(labelled[0], ("Fever", 39.0));
        assert_eq!(labelled[2], ("WBC", 25.0));
        assert_eq!(labelled[6], ("Nausea", 0.0));
    }

    #[test]
    fn test_serde_transparent() {
        let v = FeatureVector::from_array([1.0, 2.0, 3.0, 0.0, 0.3, 0.6, 0.9]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,0.0,0.3,0.6,0.9]");
    }
}
