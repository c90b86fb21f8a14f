// ABOUTME: Injectable, immutable engine configuration with validated defaults
// ABOUTME: MDET, maintenance band, matrix threshold, TDEE bounds, and intake tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine Configuration
//!
//! Every threshold and boundary table the calculators consult lives here as
//! one immutable structure the caller constructs once and injects by
//! reference. This replaces global mutable constant modules and makes
//! deterministic testing with overridden constants possible.

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Data-sufficiency and classification thresholds.
    pub thresholds: ThresholdConfig,
    /// Valid range for baseline and final TDEE estimates.
    pub tdee_bounds: TdeeBoundsConfig,
    /// Goal-intake boundary tables.
    pub goal_intake: GoalIntakeConfig,
}

/// Thresholds used by the stats calculator and the decision matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Minimum Day-Entry Threshold: complete entries required before
    /// statistics are considered meaningful.
    pub mdet: usize,
    /// Start-to-current differences at or below this magnitude (lbs)
    /// classify as maintained.
    pub weight_maintenance_threshold_lbs: f64,
    /// Baseline-vs-average-intake differences at or below this magnitude
    /// (kcal) take the "approximately equal" branch of the decision matrix.
    /// The boundary itself is inclusive on the approximately-equal side.
    pub estimated_average_threshold_kcal: f64,
    /// Window length in days for the start/current weight averages.
    pub weight_window_days: i64,
    /// Maximum weighted entries averaged per start/current window.
    pub weight_window_entries: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            mdet: 14,
            weight_maintenance_threshold_lbs: 1.0,
            estimated_average_threshold_kcal: 100.0,
            weight_window_days: 7,
            weight_window_entries: 7,
        }
    }
}

/// Inclusive validity bounds for TDEE values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdeeBoundsConfig {
    /// Minimum physiologically plausible TDEE (kcal/day).
    pub min_valid_tdee: f64,
    /// Maximum physiologically plausible TDEE (kcal/day).
    pub max_valid_tdee: f64,
}

impl TdeeBoundsConfig {
    /// True when `tdee` lies within the inclusive valid range.
    #[must_use]
    pub fn contains(&self, tdee: f64) -> bool {
        (self.min_valid_tdee..=self.max_valid_tdee).contains(&tdee)
    }
}

impl Default for TdeeBoundsConfig {
    fn default() -> Self {
        Self {
            min_valid_tdee: 750.0,
            max_valid_tdee: 7500.0,
        }
    }
}

/// Surplus boundary offsets `(lower, upper)` in kcal above TDEE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurplusTable {
    /// Conservative surplus band (default).
    pub conservative: (f64, f64),
    /// Moderate surplus band.
    pub moderate: (f64, f64),
    /// Aggressive surplus band.
    pub aggressive: (f64, f64),
}

impl Default for SurplusTable {
    fn default() -> Self {
        Self {
            conservative: (100.0, 300.0),
            moderate: (300.0, 500.0),
            aggressive: (500.0, 750.0),
        }
    }
}

/// Deficit boundary offsets `(lower, upper)` in kcal below TDEE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeficitTable {
    /// Conservative deficit band (default).
    pub conservative: (f64, f64),
    /// Moderate deficit band.
    pub moderate: (f64, f64),
    /// Aggressive deficit band.
    pub aggressive: (f64, f64),
    /// Very-aggressive deficit band.
    pub very_aggressive: (f64, f64),
}

impl Default for DeficitTable {
    fn default() -> Self {
        Self {
            conservative: (250.0, 500.0),
            moderate: (500.0, 750.0),
            aggressive: (750.0, 1000.0),
            very_aggressive: (1000.0, 1250.0),
        }
    }
}

/// Goal-intake boundary tables and the VLCD protection floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalIntakeConfig {
    /// Surplus bands for muscle-gain logs.
    pub surplus: SurplusTable,
    /// Deficit bands for fat-loss logs.
    pub deficit: DeficitTable,
    /// Absolute intake floor `(lower, upper)` in kcal; fat-loss ranges never
    /// recommend below this regardless of the nominal deficit preference.
    pub vlcd_floor: (f64, f64),
}

impl Default for GoalIntakeConfig {
    fn default() -> Self {
        Self {
            surplus: SurplusTable::default(),
            deficit: DeficitTable::default(),
            vlcd_floor: (600.0, 700.0),
        }
    }
}

impl EngineConfig {
    /// Validate thresholds and tables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when a threshold is
    /// non-positive, the TDEE bounds are inverted, or any boundary pair has
    /// its lower bound above its upper bound.
    pub fn validate(&self) -> EngineResult<()> {
        if self.thresholds.mdet == 0 {
            return Err(EngineError::invalid_config("mdet must be at least 1"));
        }
        if self.thresholds.weight_maintenance_threshold_lbs < 0.0 {
            return Err(EngineError::invalid_config(
                "weight maintenance threshold must be non-negative",
            ));
        }
        if self.thresholds.estimated_average_threshold_kcal < 0.0 {
            return Err(EngineError::invalid_config(
                "estimated average threshold must be non-negative",
            ));
        }
        if self.thresholds.weight_window_days <= 0 || self.thresholds.weight_window_entries == 0 {
            return Err(EngineError::invalid_config(
                "weight window must span at least one day and one entry",
            ));
        }
        if self.tdee_bounds.min_valid_tdee >= self.tdee_bounds.max_valid_tdee {
            return Err(EngineError::invalid_config(
                "min valid TDEE must be below max valid TDEE",
            ));
        }

        let pairs = [
            self.goal_intake.surplus.conservative,
            self.goal_intake.surplus.moderate,
            self.goal_intake.surplus.aggressive,
            self.goal_intake.deficit.conservative,
            self.goal_intake.deficit.moderate,
            self.goal_intake.deficit.aggressive,
            self.goal_intake.deficit.very_aggressive,
            self.goal_intake.vlcd_floor,
        ];
        if pairs.iter().any(|(lower, upper)| lower > upper) {
            return Err(EngineError::invalid_config(
                "boundary tables must have lower <= upper",
            ));
        }

        Ok(())
    }
}
