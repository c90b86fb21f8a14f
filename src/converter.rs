// ABOUTME: Pure unit-conversion and rounding primitives shared by all calculators
// ABOUTME: lb/kg, inch/cm, decimal rounding, and the two distinct week-count helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stateless conversion and rounding helpers.
//!
//! Two week-count helpers exist on purpose: the display count
//! ([`weeks_in_log`]) jumps in whole-week steps, while the statistical count
//! ([`decimal_weeks_in_log`]) is continuous. Using the continuous count as
//! the denominator of the weekly rate avoids jitter in the displayed rate
//! when the log length crosses a week boundary.

use chrono::NaiveDate;

use crate::constants::conversions::{CM_PER_INCH, KG_PER_LB};

/// Round `value` to `places` decimal places.
///
/// Returns the input unchanged when it is not a finite number; this helper
/// never panics and never produces a new NaN from a valid input.
#[must_use]
pub fn round_decimal(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    if !factor.is_finite() || factor == 0.0 {
        return value;
    }
    (value * factor).round() / factor
}

/// Convert pounds to kilograms.
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert kilograms to pounds.
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert inches to centimeters.
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimeters to inches.
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Whole weeks spanned by a log, for display: `floor(|days| / 7) + 1`.
///
/// A log whose entries all fall on one day is in week 1.
#[must_use]
pub fn weeks_in_log(earliest: NaiveDate, latest: NaiveDate) -> i64 {
    (latest - earliest).num_days().abs() / 7 + 1
}

/// Continuous week count spanned by a log, for statistics: `|days| / 7`.
#[must_use]
pub fn decimal_weeks_in_log(earliest: NaiveDate, latest: NaiveDate) -> f64 {
    (latest - earliest).num_days().abs() as f64 / 7.0
}
