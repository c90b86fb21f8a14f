// ABOUTME: Output payload models: feedback items, category groups, and EnergyPayload
// ABOUTME: One payload per engine invocation; serialization is the caller's concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Category tag assigned to feedback by the pipeline, not by analyzers.
///
/// The declaration order here is the stable, caller-visible order groups
/// appear in [`EnergyPayload::analysis`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Calorie-intake adherence feedback
    Calories,
    /// Weight-change and rate feedback
    Weight,
    /// General encouragement fallback
    General,
}

/// One piece of categorized advice produced by an analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    /// Short heading for display.
    pub title: String,
    /// Full advice text.
    pub message: String,
}

/// Feedback items grouped under one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisCategory {
    /// The category tag.
    pub category: FeedbackCategory,
    /// Feedback items in analyzer order.
    pub feedback: Vec<Feedback>,
}

/// Complete engine output for one (log, profile) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyPayload {
    /// Final estimated TDEE after adaptive adjustment.
    pub estimated_tdee: Estimate,
    /// Display string for the goal intake range, e.g. `"2300 kcal - 2500 kcal"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_intake_range: Option<String>,
    /// Goal-intake boundary offsets `(lower, upper)` relative to TDEE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_intake_boundaries: Option<(f64, f64)>,
    /// Display string for the observed weekly rate, in the user's units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_loss_rate: Option<String>,
    /// Date of the earliest entry by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Date of the latest entry by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<NaiveDate>,
    /// Windowed start weight (lbs).
    pub start_weight: Estimate,
    /// Windowed current weight (lbs).
    pub current_weight: Estimate,
    /// Minimum recorded weight (lbs).
    pub min_weight: Estimate,
    /// Maximum recorded weight (lbs).
    pub max_weight: Estimate,
    /// Mean recorded weight (lbs).
    pub avg_weight: Estimate,
    /// Minimum recorded daily intake (kcal).
    pub min_calories: Estimate,
    /// Maximum recorded daily intake (kcal).
    pub max_calories: Estimate,
    /// Mean recorded daily intake (kcal).
    pub avg_calories: Estimate,
    /// Analyzer output grouped by category in stable order.
    pub analysis: Vec<AnalysisCategory>,
}
