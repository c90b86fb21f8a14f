// ABOUTME: Goal calorie-intake range calculator with VLCD floor protection
// ABOUTME: Maps TDEE + goal + surplus/deficit preference to boundary offsets and ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goal-intake calculator.
//!
//! Boundary offsets are expressed relative to TDEE: a maintenance log uses a
//! symmetric band, muscle gain adds a surplus band, fat loss subtracts a
//! deficit band. Fat-loss ranges are clamped to an absolute VLCD floor so
//! the engine never recommends an unsafely low intake.

use crate::config::EngineConfig;
use crate::estimate::Estimate;
use crate::models::{Goal, RatePreference, UserProfile};

/// Goal-intake boundary offsets `(lower, upper)` relative to TDEE.
///
/// `None` when the TDEE estimate is missing or outside the valid bounds.
#[must_use]
pub fn goal_intake_boundaries(
    goal: Option<Goal>,
    tdee: Estimate,
    user: &UserProfile,
    config: &EngineConfig,
) -> Option<(f64, f64)> {
    let tdee = valid_tdee(tdee, config)?;

    match goal {
        Some(Goal::MuscleGain) => Some(surplus_band(user, config)),
        Some(Goal::FatLoss) => {
            let (lower, upper) = deficit_band(user, config);
            let (floor_lower, floor_upper) = config.goal_intake.vlcd_floor;
            if tdee - upper < floor_lower {
                // Nominal deficit would land below the VLCD floor; re-derive
                // the offsets so the resulting range is exactly the floor.
                Some((tdee - floor_upper, tdee - floor_lower))
            } else {
                Some((lower, upper))
            }
        }
        // Maintenance, and any unrecognized/unset goal, uses the symmetric
        // matrix threshold band.
        Some(Goal::Maintain) | None => {
            let threshold = config.thresholds.estimated_average_threshold_kcal;
            Some((threshold, threshold))
        }
    }
}

/// Absolute goal-intake window `(lower, upper)` in kcal.
#[must_use]
pub fn goal_intake_window(
    goal: Option<Goal>,
    tdee: Estimate,
    user: &UserProfile,
    config: &EngineConfig,
) -> Option<(f64, f64)> {
    let tdee_value = valid_tdee(tdee, config)?;

    match goal {
        Some(Goal::MuscleGain) => {
            let (lower, upper) = surplus_band(user, config);
            Some((tdee_value + lower, tdee_value + upper))
        }
        Some(Goal::FatLoss) => {
            let (lower, upper) = deficit_band(user, config);
            let (floor_lower, floor_upper) = config.goal_intake.vlcd_floor;
            Some((
                (tdee_value - upper).max(floor_lower),
                (tdee_value - lower).max(floor_upper),
            ))
        }
        Some(Goal::Maintain) | None => {
            let threshold = config.thresholds.estimated_average_threshold_kcal;
            Some((tdee_value - threshold, tdee_value + threshold))
        }
    }
}

/// Display string for the goal-intake range, e.g. `"2300 kcal - 2500 kcal"`.
#[must_use]
pub fn goal_intake_range(
    goal: Option<Goal>,
    tdee: Estimate,
    user: &UserProfile,
    config: &EngineConfig,
) -> Option<String> {
    goal_intake_window(goal, tdee, user, config).map(format_intake_range)
}

/// Format an absolute intake window for display.
#[must_use]
pub fn format_intake_range((lower, upper): (f64, f64)) -> String {
    format!("{} kcal - {} kcal", lower.round(), upper.round())
}

fn valid_tdee(tdee: Estimate, config: &EngineConfig) -> Option<f64> {
    tdee.known().filter(|value| config.tdee_bounds.contains(*value))
}

fn surplus_band(user: &UserProfile, config: &EngineConfig) -> (f64, f64) {
    let table = &config.goal_intake.surplus;
    match user.preferences.nutrition.surplus {
        Some(RatePreference::Moderate) => table.moderate,
        Some(RatePreference::Aggressive | RatePreference::VeryAggressive) => table.aggressive,
        Some(RatePreference::Conservative) | None => table.conservative,
    }
}

fn deficit_band(user: &UserProfile, config: &EngineConfig) -> (f64, f64) {
    let table = &config.goal_intake.deficit;
    match user.preferences.nutrition.deficit {
        Some(RatePreference::Moderate) => table.moderate,
        Some(RatePreference::Aggressive) => table.aggressive,
        Some(RatePreference::VeryAggressive) => table.very_aggressive,
        Some(RatePreference::Conservative) | None => table.conservative,
    }
}
