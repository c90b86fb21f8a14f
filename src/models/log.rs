// ABOUTME: Nutrition log models: day entries, goals, and the log container
// ABOUTME: Entries are not guaranteed chronological; calculators sort working copies
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body-composition goal attached to a log at creation time.
///
/// The goal is set once and read-only afterward; that invariant is enforced
/// by the surrounding system, not by this engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose body fat (caloric deficit)
    FatLoss,
    /// Gain muscle (caloric surplus)
    MuscleGain,
    /// Maintain current weight (caloric balance)
    Maintain,
}

/// One day of self-reported weight and calorie intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayEntry {
    /// Creation timestamp in epoch milliseconds; doubles as the sort key.
    pub id: i64,
    /// Calendar date the entry describes.
    pub date: NaiveDate,
    /// Morning body weight in pounds. Zero counts as present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Total calorie intake in kcal. Zero counts as present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// TDEE estimate in effect when the entry was recorded; back-filled once
    /// by the stamping operation and never overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_estimated_tdee: Option<f64>,
    /// Goal-intake boundary offsets in effect when the entry was recorded;
    /// back-filled once by the stamping operation and never overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_intake_boundaries: Option<(f64, f64)>,
}

impl DayEntry {
    /// Create an entry with only the tracked fields set.
    #[must_use]
    pub const fn new(id: i64, date: NaiveDate, weight: Option<f64>, calories: Option<f64>) -> Self {
        Self {
            id,
            date,
            weight,
            calories,
            creation_estimated_tdee: None,
            goal_intake_boundaries: None,
        }
    }

    /// An entry is complete iff both weight and calories are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.weight.is_some() && self.calories.is_some()
    }
}

/// A user's nutrition log: a goal plus an unordered set of day entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Display title chosen by the user.
    pub title: String,
    /// Body-composition goal; `None` behaves like maintenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    /// Baseline TDEE captured when the log was created, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_tdee: Option<f64>,
    /// Day entries in arbitrary order.
    pub day_entries: Vec<DayEntry>,
}

impl NutritionLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new(title: String, goal: Option<Goal>, start_tdee: Option<f64>) -> Self {
        Self {
            title,
            goal,
            start_tdee,
            day_entries: Vec::new(),
        }
    }

    /// Count of entries with both weight and calories present.
    #[must_use]
    pub fn complete_entry_count(&self) -> usize {
        self.day_entries.iter().filter(|e| e.is_complete()).count()
    }
}
