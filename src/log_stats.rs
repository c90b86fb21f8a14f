// ABOUTME: Derives LogStats summaries from a nutrition log
// ABOUTME: Order-independent: sorts a working copy by id, aggregates via folds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log statistics calculator.
//!
//! Pure function of `log.day_entries`. Entries are not guaranteed to arrive
//! chronologically, so every computation sorts a working copy by id or folds
//! over the whole set; nothing relies on incidental input order.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::converter::{decimal_weeks_in_log, round_decimal};
use crate::estimate::Estimate;
use crate::models::{DayEntry, Goal, LogStats, NutritionLog, WeightChangeCategory};

/// Which end of the log a weight window anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowAnchor {
    Start,
    End,
}

/// Compute the full statistics summary for one log.
#[must_use]
pub fn calculate_log_stats(log: &NutritionLog, config: &EngineConfig) -> LogStats {
    let mut entries: Vec<&DayEntry> = log.day_entries.iter().collect();
    entries.sort_by_key(|e| e.id);

    let start_weight = windowed_weight_average(&entries, WindowAnchor::Start, config);
    let current_weight = windowed_weight_average(&entries, WindowAnchor::End, config);

    let weight_difference = start_weight.zip_with(current_weight, |start, current| start - current);
    let weight_change_category = classify_weight_change(weight_difference, config);

    let weeks_stat = weeks_for_statistics(&entries);
    let weekly_weight_change =
        weight_difference.map(|diff| round_decimal(diff.abs() / weeks_stat, 1));

    let weekly_percent_change = weekly_weight_change.zip_with(start_weight, |weekly, start| {
        round_decimal(weekly / start, 3)
    });
    let weekly_percent_change = guard_finite(weekly_percent_change);

    let total_percent_weight_change = weight_difference.zip_with(start_weight, |diff, start| {
        round_decimal(diff.abs() / start * 100.0, 1)
    });
    let total_percent_weight_change = guard_finite(total_percent_weight_change);

    let avg_kcal_intake = average_intake(&entries);

    let meets_mdet = log.complete_entry_count() >= config.thresholds.mdet;
    let weight_change_on_track_for_goal = on_track_for_goal(log.goal, weight_change_category);

    LogStats {
        meets_mdet,
        start_weight,
        current_weight,
        weight_difference_start_to_current: weight_difference,
        weight_change_category,
        weight_change_on_track_for_goal,
        weekly_weight_change,
        weekly_percent_change,
        total_percent_weight_change,
        avg_kcal_intake,
    }
}

/// Average weight over up to `weight_window_entries` weighted entries that
/// fall within `weight_window_days` of the anchor entry.
fn windowed_weight_average(
    sorted_entries: &[&DayEntry],
    anchor: WindowAnchor,
    config: &EngineConfig,
) -> Estimate {
    let anchor_entry = match anchor {
        WindowAnchor::Start => sorted_entries.first(),
        WindowAnchor::End => sorted_entries.last(),
    };
    let Some(anchor_entry) = anchor_entry else {
        return Estimate::InsufficientData;
    };
    let anchor_date = anchor_entry.date;

    let in_window = |entry: &&&DayEntry| {
        (entry.date - anchor_date).num_days().abs() < config.thresholds.weight_window_days
    };

    let weights: Vec<f64> = match anchor {
        WindowAnchor::Start => sorted_entries
            .iter()
            .filter(|e| e.weight.is_some())
            .filter(in_window)
            .take(config.thresholds.weight_window_entries)
            .filter_map(|e| e.weight)
            .collect(),
        WindowAnchor::End => sorted_entries
            .iter()
            .rev()
            .filter(|e| e.weight.is_some())
            .filter(in_window)
            .take(config.thresholds.weight_window_entries)
            .filter_map(|e| e.weight)
            .collect(),
    };

    if weights.is_empty() {
        return Estimate::InsufficientData;
    }
    Estimate::Known(weights.iter().sum::<f64>() / weights.len() as f64)
}

/// Statistical week count: continuous, floored at one week, else rounded to
/// one decimal. The floor keeps the weekly-rate denominator from exploding
/// on short logs.
fn weeks_for_statistics(sorted_entries: &[&DayEntry]) -> f64 {
    let (Some(first), Some(last)) = (sorted_entries.first(), sorted_entries.last()) else {
        return 1.0;
    };
    let decimal = decimal_weeks_in_log(first.date, last.date);
    if decimal < 1.0 {
        1.0
    } else {
        round_decimal(decimal, 1)
    }
}

fn classify_weight_change(
    weight_difference: Estimate,
    config: &EngineConfig,
) -> Option<WeightChangeCategory> {
    let diff = weight_difference.known()?;
    if diff.abs() <= config.thresholds.weight_maintenance_threshold_lbs {
        Some(WeightChangeCategory::Maintained)
    } else if diff < 0.0 {
        // start < current
        Some(WeightChangeCategory::Gained)
    } else {
        Some(WeightChangeCategory::Lost)
    }
}

fn on_track_for_goal(goal: Option<Goal>, category: Option<WeightChangeCategory>) -> bool {
    matches!(
        (goal, category),
        (Some(Goal::Maintain), Some(WeightChangeCategory::Maintained))
            | (Some(Goal::MuscleGain), Some(WeightChangeCategory::Gained))
            | (Some(Goal::FatLoss), Some(WeightChangeCategory::Lost))
    )
}

fn average_intake(entries: &[&DayEntry]) -> Estimate {
    let calories: Vec<f64> = entries.iter().filter_map(|e| e.calories).collect();
    if calories.is_empty() {
        return Estimate::InsufficientData;
    }
    Estimate::Known(round_decimal(
        calories.iter().sum::<f64>() / calories.len() as f64,
        0,
    ))
}

/// Division by a zero start weight yields an infinity; report it as
/// insufficient data rather than leaking a non-finite value.
fn guard_finite(estimate: Estimate) -> Estimate {
    match estimate {
        Estimate::Known(value) if value.is_finite() => estimate,
        _ => Estimate::InsufficientData,
    }
}

/// Minimum and maximum recorded weight, order-independent.
#[must_use]
pub fn weight_extremes(log: &NutritionLog) -> (Estimate, Estimate) {
    fold_extremes(log.day_entries.iter().filter_map(|e| e.weight))
}

/// Minimum and maximum recorded daily intake, order-independent.
#[must_use]
pub fn calorie_extremes(log: &NutritionLog) -> (Estimate, Estimate) {
    fold_extremes(log.day_entries.iter().filter_map(|e| e.calories))
}

fn fold_extremes(values: impl Iterator<Item = f64>) -> (Estimate, Estimate) {
    let folded = values.fold(None, |acc: Option<(f64, f64)>, value| {
        Some(acc.map_or((value, value), |(min, max)| {
            (min.min(value), max.max(value))
        }))
    });
    folded.map_or(
        (Estimate::InsufficientData, Estimate::InsufficientData),
        |(min, max)| (Estimate::Known(min), Estimate::Known(max)),
    )
}

/// Mean recorded weight over all weighted entries.
#[must_use]
pub fn average_weight(log: &NutritionLog) -> Estimate {
    let weights: Vec<f64> = log.day_entries.iter().filter_map(|e| e.weight).collect();
    if weights.is_empty() {
        return Estimate::InsufficientData;
    }
    Estimate::Known(round_decimal(
        weights.iter().sum::<f64>() / weights.len() as f64,
        1,
    ))
}

/// Dates of the earliest and latest entries by id, via min/max folds.
#[must_use]
pub fn start_and_latest_dates(log: &NutritionLog) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let earliest = log.day_entries.iter().min_by_key(|e| e.id).map(|e| e.date);
    let latest = log.day_entries.iter().max_by_key(|e| e.id).map(|e| e.date);
    (earliest, latest)
}
