// ABOUTME: Tagged sentinel type for metrics whose computation was not possible
// ABOUTME: Replaces null/NaN sentinels with an explicit Known/InsufficientData split
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Estimate` type threads "insufficient data" through every numeric
//! field of the engine. Callers branch on it explicitly instead of doing
//! arithmetic on a null or NaN stand-in.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when an estimate serializes or displays without a value.
pub const INSUFFICIENT_DATA_LABEL: &str = "insufficient_data";

/// A computed metric: either a known value or explicitly not computable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// The metric was computable from the available entries.
    Known(f64),
    /// Preconditions for the computation were unmet (empty log, missing
    /// weights or calories, baseline out of valid bounds).
    InsufficientData,
}

impl Estimate {
    /// The value, if known.
    #[must_use]
    pub const fn known(self) -> Option<f64> {
        match self {
            Self::Known(value) => Some(value),
            Self::InsufficientData => None,
        }
    }

    /// True when a value is present.
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// True when the computation was not possible.
    #[must_use]
    pub const fn is_insufficient(self) -> bool {
        matches!(self, Self::InsufficientData)
    }

    /// Apply `f` to a known value, propagating `InsufficientData`.
    #[must_use]
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        match self {
            Self::Known(value) => Self::Known(f(value)),
            Self::InsufficientData => Self::InsufficientData,
        }
    }

    /// Combine two estimates; insufficient data in either side wins.
    #[must_use]
    pub fn zip_with<F: FnOnce(f64, f64) -> f64>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Self::Known(a), Self::Known(b)) => Self::Known(f(a, b)),
            _ => Self::InsufficientData,
        }
    }
}

impl From<Option<f64>> for Estimate {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::InsufficientData, Self::Known)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::InsufficientData => write!(f, "insufficient data"),
        }
    }
}

impl Serialize for Estimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => serializer.serialize_f64(*value),
            Self::InsufficientData => serializer.serialize_str(INSUFFICIENT_DATA_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Estimate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Label(String),
        }

        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Number(value)) => Self::Known(value),
            Some(Raw::Label(_)) | None => Self::InsufficientData,
        })
    }
}
