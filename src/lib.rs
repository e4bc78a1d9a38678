//! # MediRank
//!
//! Diagnosis support by Euclidean distance-based similarity analysis.
//!
//! A patient's symptoms are encoded into a seven-feature vector, compared with a
//! table of reference disease profiles, and each disease gets a similarity
//! percentage relative to the furthest profile. The best match comes with a
//! short canned rationale.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! medirank --fever 39.0 --platelet 180 --wbc 25 \
//!     --fatigue mild --pain moderate --format text
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use medirank::prelude::*;
//!
//! let record = PatientRecord {
//!     fever: 39.0,
//!     platelet: 180.0,
//!     wbc: 25.0,
//!     bleeding: Bleeding::No,
//!     fatigue: Severity::Mild,
//!     pain: Severity::Moderate,
//!     nausea: Nausea::None,
//!     ..Default::default()
//! };
//! record.validate().unwrap();
//!
//! let diagnosis = Diagnoser::builtin().diagnose(&record).unwrap();
//! assert_eq!(diagnosis.top, "Sepsis");
//! ```
//!
//! ## Crate Structure
//!
//! - `medirank-core` - feature vectors, ordinal mapping, patient records, encoder
//! - `medirank-similarity` - reference tables, ranking, explanations
//! - `medirank` - report rendering and the command line front end
//!
//! ## Not a medical device
//!
//! The reference profiles are illustrative. Nothing here performs real medical
//! inference.

pub mod report;

// Re-export core types
pub use medirank_core::{
    encode, ordinal_value, Bleeding, Error, FeatureVector, Nausea, OrdinalLabel, PatientRecord,
    Result, Severity, FEATURE_DIM, FEATURE_NAMES, ORDINAL_TABLE,
};

// Re-export similarity
pub use medirank_similarity::{
    diagnose, explain, rank, Diagnoser, Diagnosis, ExplanationTable, RankingEntry,
    RankingResult, ReferenceDisease, ReferenceTable, FALLBACK_EXPLANATION,
};

pub use report::{DiagnosisReport, ReportRow};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        diagnose, encode, explain, rank, Bleeding, Diagnoser, Diagnosis, DiagnosisReport,
        Error, ExplanationTable, FeatureVector, Nausea, PatientRecord, RankingEntry,
        RankingResult, ReferenceDisease, ReferenceTable, Result, Severity,
    };
}
