//! # MediRank Similarity
//!
//! Euclidean similarity ranking of reference diseases against a patient vector,
//! with canned explanations for the best match.
//!
//! ## Example
//!
//! ```rust
//! use medirank_similarity::{rank, explain, ReferenceTable, ExplanationTable};
//! use medirank_core::FeatureVector;
//!
//! let references = ReferenceTable::builtin();
//! let explanations = ExplanationTable::builtin();
//!
//! let patient = FeatureVector::from_array([39.0, 180.0, 25.0, 0.0, 0.3, 0.6, 0.0]);
//! let ranking = rank(&patient, references.diseases()).unwrap();
//! assert_eq!(ranking.top().disease, "Sepsis");
//!
//! let why = explain(&ranking.top().disease, &explanations);
//! assert_eq!(why.len(), 2);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Patient    │────>│  Encoder    │────>│   Ranker    │
//! │  record     │     │ (record→v)  │     │ (distance)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │ top
//!                                         ┌──────┴──────┐
//!                                         │  Explain    │
//!                                         └─────────────┘
//! ```

pub mod diagnosis;
pub mod distance;
pub mod explain;
pub mod rank;
pub mod reference;

pub use diagnosis::{diagnose, diagnose_vector, Diagnoser, Diagnosis};
pub use distance::{max_distance, round_to, similarity_percentage, DISTANCE_PLACES, SIMILARITY_PLACES};
pub use explain::{explain, ExplanationTable, FALLBACK_EXPLANATION};
pub use rank::{rank, RankingEntry, RankingResult};
pub use reference::{ReferenceDisease, ReferenceTable};
