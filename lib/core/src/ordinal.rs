//! Ordinal symptom mapping
//!
//! Categorical symptom labels are projected onto a single numeric severity axis
//! through [`ORDINAL_TABLE`]. The scales share that axis: `Slight` sits at the
//! same value as `Moderate`, and `Frequent` at the same value as `Severe`.
//! The reference vectors were authored against these exact values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label to severity proxy. Every label of every categorical field appears here.
pub const ORDINAL_TABLE: [(&str, f64); 8] = [
    ("None", 0.0),
    ("Mild", 0.3),
    ("Moderate", 0.6),
    ("Severe", 0.9),
    ("Slight", 0.6),
    ("Frequent", 0.9),
    ("Yes", 1.0),
    ("No", 0.0),
];

/// Look up the numeric proxy for a label
///
/// # Errors
/// `InvalidInput` if the label is not in [`ORDINAL_TABLE`].
pub fn ordinal_value(label: &str) -> Result<f64> {
    ORDINAL_TABLE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, value)| *value)
        .ok_or_else(|| Error::InvalidInput(format!("unmapped ordinal label '{}'", label)))
}

/// A categorical field with a closed label set.
pub trait OrdinalLabel: Copy + 'static + fmt::Display + FromStr<Err = Error> {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Every allowed value, in form order (first is the default)
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    /// Numeric proxy from [`ORDINAL_TABLE`]
    fn value(&self) -> Result<f64> {
        ordinal_value(self.label())
    }
}

fn parse_label<T: OrdinalLabel>(s: &str) -> Result<T> {
    let trimmed = s.trim();
    T::all()
        .iter()
        .copied()
        .find(|v| v.label().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| {
            let allowed: Vec<&str> = T::all().iter().map(|v| v.label()).collect();
            Error::InvalidInput(format!(
                "{} must be one of [{}], got '{}'",
                T::FIELD,
                allowed.join(", "),
                s
            ))
        })
}

macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, [$($variant:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl OrdinalLabel for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                parse_label(s)
            }
        }
    };
}

ordinal_enum!(
    /// Presence of bleeding
    Bleeding, "bleeding", [No, Yes]
);

ordinal_enum!(
    /// Four-step severity scale shared by fatigue and pain
    Severity, "severity", [None, Mild, Moderate, Severe]
);

ordinal_enum!(
    /// Nausea frequency
    Nausea, "nausea", [None, Slight, Frequent]
);
