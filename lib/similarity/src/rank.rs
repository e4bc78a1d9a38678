//! Similarity ranking
//!
//! Scores every reference disease against a patient vector and orders them by
//! similarity percentage.

use crate::distance::{
    max_distance, round_to, similarity_percentage, DISTANCE_PLACES, SIMILARITY_PLACES,
};
use crate::reference::ReferenceDisease;
use medirank_core::{Error, FeatureVector, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

/// One scored reference disease
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    /// Disease name
    pub disease: String,
    /// Euclidean distance to the patient vector
    pub distance: f64,
    /// `(1 - distance / max distance) * 100`, unrounded. Ranking orders by
    /// [`RankingEntry::rounded_similarity`], not by this value.
    pub similarity: f64,
}

impl RankingEntry {
    /// Distance as displayed, 2 decimals
    pub fn rounded_distance(&self) -> f64 {
        round_to(self.distance, DISTANCE_PLACES)
    }

    /// Similarity as displayed, 1 decimal
    pub fn rounded_similarity(&self) -> f64 {
        round_to(self.similarity, SIMILARITY_PLACES)
    }
}

/// Ranked entries, best match first. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankingResult {
    entries: Vec<RankingEntry>,
}

impl RankingResult {
    /// The top diagnosis: first by displayed (1 decimal) similarity.
    ///
    /// Not necessarily the closest disease. When several entries display the
    /// same similarity, reference order wins, so the top entry can be slightly
    /// further away than one ranked below it.
    pub fn top(&self) -> &RankingEntry {
        // rank() refuses to build an empty result
        &self.entries[0]
    }

    #[inline]
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankingEntry> {
        self.entries.iter()
    }

    /// Zero-based rank of `disease`
    pub fn position(&self, disease: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.disease == disease)
    }

    pub fn into_entries(self) -> Vec<RankingEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankingResult {
    type Item = &'a RankingEntry;
    type IntoIter = std::slice::Iter<'a, RankingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank `references` by similarity to `patient`.
///
/// Entries are ordered by displayed (1 decimal) similarity, descending. The sort
/// is stable, so entries with equal displayed similarity keep reference order.
///
/// # Errors
/// - `EmptyReferenceSet` if `references` is empty
/// - `DimensionMismatch` if the patient or any reference is not 7-dimensional
/// - `DegenerateInput` if the largest distance is zero or any distance is not finite
pub fn rank(patient: &FeatureVector, references: &[ReferenceDisease]) -> Result<RankingResult> {
    if references.is_empty() {
        return Err(Error::EmptyReferenceSet);
    }
    patient.check_dim()?;

    let distances = references
        .iter()
        .map(|reference| {
            reference.vector.check_dim()?;
            patient.euclidean_distance(&reference.vector)
        })
        .collect::<Result<Vec<f64>>>()?;

    let max = max_distance(&distances)?;

    let mut entries: Vec<RankingEntry> = references
        .iter()
        .zip(distances)
        .map(|(reference, distance)| RankingEntry {
            disease: reference.name.clone(),
            distance,
            similarity: similarity_percentage(distance, max),
        })
        .collect();

    entries.sort_by_key(|e| Reverse(OrderedFloat(e.rounded_similarity())));

    for (i, entry) in entries.iter().enumerate() {
        tracing::debug!(
            rank = i,
            disease = %entry.disease,
            distance = entry.distance,
            similarity = entry.similarity,
            "ranked reference"
        );
    }

    Ok(RankingResult { entries })
}
