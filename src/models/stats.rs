// ABOUTME: Derived per-log statistics consumed by the estimator and analyzers
// ABOUTME: Ephemeral, recomputed on every call, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Direction of weight change between log start and current.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightChangeCategory {
    /// Current weight is above start weight beyond the maintenance band.
    Gained,
    /// Current weight is below start weight beyond the maintenance band.
    Lost,
    /// Start-to-current difference is within the maintenance band.
    Maintained,
}

/// Summary statistics derived from one nutrition log.
///
/// Every numeric field is an [`Estimate`] so that "not computable" is
/// explicit rather than encoded as zero or NaN. `weight_change_category`
/// is `None` when the start/current weights could not be computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogStats {
    /// True once the count of complete entries reaches the MDET threshold.
    pub meets_mdet: bool,
    /// Mean of the first window of weighted entries (lbs).
    pub start_weight: Estimate,
    /// Mean of the last window of weighted entries (lbs).
    pub current_weight: Estimate,
    /// Signed `start - current` (lbs); negative means the user gained.
    pub weight_difference_start_to_current: Estimate,
    /// Trend classification of the start-to-current difference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_change_category: Option<WeightChangeCategory>,
    /// True iff the observed trend agrees with the log's goal. False when
    /// the goal is unset or the trend could not be determined.
    pub weight_change_on_track_for_goal: bool,
    /// Magnitude of weekly weight change (lbs/week, 1 decimal).
    pub weekly_weight_change: Estimate,
    /// Weekly change as a fraction of start weight (3 decimals).
    pub weekly_percent_change: Estimate,
    /// Total change as a percent of start weight (1 decimal).
    pub total_percent_weight_change: Estimate,
    /// Mean calorie intake over entries with calories present (whole kcal).
    pub avg_kcal_intake: Estimate,
}
