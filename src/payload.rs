// ABOUTME: Payload assembler orchestrating stats, estimation, ranges, and analyzers
// ABOUTME: Also stamps historical entries with the TDEE/range in effect at creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payload assembly.
//!
//! One synchronous pass: stats, then the TDEE estimate, then the goal-intake
//! window, then the analyzer pipeline, aggregated into a single
//! [`EnergyPayload`]. Invocations are independent and safely parallelizable;
//! [`assemble_batch`] runs many (log, user) pairs across a rayon pool.

use rand::Rng;
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::converter::{lbs_to_kg, round_decimal};
use crate::errors::EngineResult;
use crate::feedback::{run_analyzers, AnalyzerContext};
use crate::goal_intake::{format_intake_range, goal_intake_boundaries, goal_intake_window};
use crate::log_stats::{
    average_weight, calculate_log_stats, calorie_extremes, start_and_latest_dates, weight_extremes,
};
use crate::models::{
    DayEntry, EnergyPayload, LogStats, NutritionLog, UserProfile, WeightChangeCategory,
};
use crate::tdee_estimator::estimate_tdee;

/// Assemble the complete payload for one (log, user) pair.
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::InvalidConfig`] when the injected
/// configuration fails validation. Missing input data never errors; it
/// surfaces as `InsufficientData` fields and absent feedback.
pub fn assemble<R: Rng>(
    log: &NutritionLog,
    user: &UserProfile,
    config: &EngineConfig,
    rng: &mut R,
) -> EngineResult<EnergyPayload> {
    config.validate()?;

    let stats = calculate_log_stats(log, config);
    let tdee = estimate_tdee(log, user, &stats, config);

    // An empty log carries no observed data to justify a goal-specific
    // range; it gets the maintenance-style symmetric band around the
    // baseline until entries arrive.
    let intake_goal = if log.day_entries.is_empty() {
        None
    } else {
        log.goal
    };
    let intake_window = goal_intake_window(intake_goal, tdee, user, config);
    let boundaries = goal_intake_boundaries(intake_goal, tdee, user, config);

    let ctx = AnalyzerContext {
        log,
        user,
        stats: &stats,
        tdee,
        intake_window,
        config,
    };
    let analysis = run_analyzers(&ctx, rng);

    let (start_date, latest_date) = start_and_latest_dates(log);
    let (min_weight, max_weight) = weight_extremes(log);
    let (min_calories, max_calories) = calorie_extremes(log);

    Ok(EnergyPayload {
        estimated_tdee: tdee,
        goal_intake_range: intake_window.map(format_intake_range),
        goal_intake_boundaries: boundaries,
        gain_loss_rate: gain_loss_rate(&stats, user),
        start_date,
        latest_date,
        start_weight: stats.start_weight,
        current_weight: stats.current_weight,
        min_weight,
        max_weight,
        avg_weight: average_weight(log),
        min_calories,
        max_calories,
        avg_calories: stats.avg_kcal_intake,
        analysis,
    })
}

/// Assemble payloads for many logs in parallel.
///
/// Per-item configuration failures degrade that item only; the batch always
/// returns one result per input pair, in input order.
#[must_use]
pub fn assemble_batch(
    pairs: &[(NutritionLog, UserProfile)],
    config: &EngineConfig,
) -> Vec<EngineResult<EnergyPayload>> {
    pairs
        .par_iter()
        .map(|(log, user)| assemble(log, user, config, &mut rand::thread_rng()))
        .collect()
}

/// Back-fill historical entries with the payload's TDEE and boundaries.
///
/// Idempotent: only entries whose creation fields are unset are stamped;
/// an already-stamped entry is never overwritten, so re-running the sync on
/// merged entry lists preserves historical values.
pub fn stamp_entries(entries: &mut [DayEntry], payload: &EnergyPayload) {
    for entry in entries {
        if entry.creation_estimated_tdee.is_none() {
            entry.creation_estimated_tdee = payload.estimated_tdee.known();
        }
        if entry.goal_intake_boundaries.is_none() {
            entry.goal_intake_boundaries = payload.goal_intake_boundaries;
        }
    }
}

/// Display string for the observed weekly rate, converted to the user's
/// unit system at presentation time only.
fn gain_loss_rate(stats: &LogStats, user: &UserProfile) -> Option<String> {
    let category = stats.weight_change_category?;
    let rate_lbs = stats.weekly_weight_change.known()?;

    let verb = match category {
        WeightChangeCategory::Gained => "Gaining",
        WeightChangeCategory::Lost => "Losing",
        WeightChangeCategory::Maintained => return Some("Maintaining current weight".to_owned()),
    };

    let (value, unit) = if user.preferences.general.is_imperial {
        (rate_lbs, "lbs")
    } else {
        (round_decimal(lbs_to_kg(rate_lbs), 1), "kg")
    };
    Some(format!("{verb} {value} {unit} per week"))
}
