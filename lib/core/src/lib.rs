//! # MediRank Core
//!
//! Core types for the MediRank diagnosis support tool.
//!
//! - [`FeatureVector`] - fixed-order symptom encoding
//! - [`ORDINAL_TABLE`] - categorical label to severity proxy mapping
//! - [`PatientRecord`] - structured patient input with range validation
//! - [`encode`] - patient input to feature vector
//!
//! ## Example
//!
//! ```rust
//! use medirank_core::{encode, Bleeding, Nausea, Severity};
//!
//! let v = encode(39.0, 180.0, 25.0, Bleeding::No, Severity::Mild, Severity::Moderate, Nausea::None)
//!     .unwrap();
//! assert_eq!(v.as_slice(), &[39.0, 180.0, 25.0, 0.0, 0.3, 0.6, 0.0]);
//! ```

pub mod error;
pub mod ordinal;
pub mod patient;
pub mod vector;

pub use error::{Error, Result};
pub use ordinal::{ordinal_value, Bleeding, Nausea, OrdinalLabel, Severity, ORDINAL_TABLE};
pub use patient::{encode, PatientRecord, FEVER_RANGE, PLATELET_RANGE, WBC_RANGE};
pub use vector::{FeatureVector, FEATURE_DIM, FEATURE_NAMES};
