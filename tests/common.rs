// ABOUTME: Shared builders for integration tests: logs, entries, and profiles
// ABOUTME: Linear weight/calorie schedules keep matrix-cell expectations hand-checkable
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, dead_code)]

use chrono::{Duration, NaiveDate};
use energy_balance::models::{DayEntry, Goal, NutritionLog, UserProfile};

/// Fixed base date for deterministic logs.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Entry on day `day` (offset from the base date) with sequential ids.
pub fn entry(day: i64, weight: Option<f64>, calories: Option<f64>) -> DayEntry {
    DayEntry::new(1_700_000_000_000 + day, base_date() + Duration::days(day), weight, calories)
}

/// Log with `days` consecutive complete entries: weight follows
/// `start_weight + daily_delta * day`, calories are constant.
pub fn linear_log(
    goal: Option<Goal>,
    start_tdee: Option<f64>,
    days: i64,
    start_weight: f64,
    daily_delta: f64,
    calories: f64,
) -> NutritionLog {
    let mut log = NutritionLog::new("test log".to_owned(), goal, start_tdee);
    for day in 0..days {
        log.day_entries.push(entry(
            day,
            Some(daily_delta.mul_add(day as f64, start_weight)),
            Some(calories),
        ));
    }
    log
}

/// Profile with no biometrics and default preferences.
pub fn bare_user() -> UserProfile {
    UserProfile::new()
}

/// Profile with a baseline TDEE set.
pub fn user_with_tdee(tdee: f64) -> UserProfile {
    let mut user = UserProfile::new();
    user.estimated_tdee = Some(tdee);
    user
}
