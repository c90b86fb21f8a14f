// ABOUTME: User profile subset consumed by the engine
// ABOUTME: Baseline TDEE, height/weight, and surplus/deficit rate preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How aggressively the user wants to run a surplus or deficit.
///
/// `VeryAggressive` is only meaningful for deficits; surplus lookups treat
/// it as `Aggressive`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RatePreference {
    /// Smallest surplus/deficit band (default when unset)
    Conservative,
    /// Middle band
    Moderate,
    /// Large band
    Aggressive,
    /// Largest deficit band (deficit only)
    VeryAggressive,
}

/// Nutrition-specific preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NutritionPreferences {
    /// Preferred surplus band for muscle-gain logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surplus: Option<RatePreference>,
    /// Preferred deficit band for fat-loss logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficit: Option<RatePreference>,
}

/// Display preferences that affect presentation only, never the math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneralPreferences {
    /// True for imperial display units (lbs), false for metric (kg).
    pub is_imperial: bool,
}

impl Default for GeneralPreferences {
    fn default() -> Self {
        Self { is_imperial: true }
    }
}

/// All user preferences the engine reads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Surplus/deficit band selection.
    pub nutrition: NutritionPreferences,
    /// Unit-system selection.
    pub general: GeneralPreferences,
}

/// Subset of the user profile the engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque user identifier assigned by the surrounding system.
    pub id: Uuid,
    /// Profile-level baseline TDEE, used when the log carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_tdee: Option<f64>,
    /// Height in inches, used by the BMI analyzer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    /// Profile weight in pounds, used as a BMI fallback when the log has no
    /// usable weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f64>,
    /// User preferences.
    pub preferences: UserPreferences,
}

impl UserProfile {
    /// Create a profile with a fresh id and no biometrics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            estimated_tdee: None,
            height_inches: None,
            weight_lbs: None,
            preferences: UserPreferences::default(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}
