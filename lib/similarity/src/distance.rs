//! Distance normalization and display rounding
//!
//! Distances come from [`FeatureVector::euclidean_distance`]; this module turns
//! them into similarity percentages relative to the furthest candidate.
//!
//! [`FeatureVector::euclidean_distance`]: medirank_core::FeatureVector::euclidean_distance

use medirank_core::{Error, Result};

/// Decimal places shown for distances
pub const DISTANCE_PLACES: usize = 2;
/// Decimal places shown for similarity percentages
pub const SIMILARITY_PLACES: usize = 1;

/// Largest distance of a candidate set
///
/// # Errors
/// `EmptyReferenceSet` for an empty slice, `DegenerateInput` when a distance is
/// not finite or every distance is zero (normalization would divide by zero).
pub fn max_distance(distances: &[f64]) -> Result<f64> {
    if distances.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }

    if let Some(bad) = distances.iter().find(|d| !d.is_finite()) {
        return Err(Error::DegenerateInput(format!(
            "distance {} is not a finite number",
            bad
        )));
    }

    let max = distances.iter().copied().fold(0.0f64, f64::max);
    if max == 0.0 {
        return Err(Error::DegenerateInput(
            "every reference is at distance 0 from the patient, similarity is undefined"
                .to_string(),
        ));
    }

    Ok(max)
}

/// `(1 - distance / max_distance) * 100`
///
/// `max_distance` must be positive; see [`max_distance`].
#[inline]
pub fn similarity_percentage(distance: f64, max_distance: f64) -> f64 {
    (1.0 - distance / max_distance) * 100.0
}

/// Round to `places` decimals using the exact binary value, so `2.675`
/// (stored as 2.67499...) rounds to `2.67`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
