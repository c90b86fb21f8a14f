// ABOUTME: Data model module for the energy-balance engine
// ABOUTME: Nutrition logs, user profiles, derived stats, and the output payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine data models.
//!
//! Logs and profiles arrive already materialized from the surrounding
//! system's persistence layer; stats and payloads are ephemeral and
//! recomputed on every call.

/// Nutrition log and day-entry models
pub mod log;
/// Output payload and feedback models
pub mod payload;
/// User profile subset consumed by the engine
pub mod profile;
/// Derived per-log statistics
pub mod stats;

pub use log::{DayEntry, Goal, NutritionLog};
pub use payload::{AnalysisCategory, EnergyPayload, Feedback, FeedbackCategory};
pub use profile::{
    GeneralPreferences, NutritionPreferences, RatePreference, UserPreferences, UserProfile,
};
pub use stats::{LogStats, WeightChangeCategory};
