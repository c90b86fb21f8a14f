// ABOUTME: Adaptive baseline-estimate (ABE) algorithm for TDEE estimation
// ABOUTME: 3x3 decision matrix over baseline vs observed intake and weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TDEE estimator.
//!
//! Blends a baseline TDEE estimate with the observed mean intake and weight
//! trend. No adjustment is ever applied without sufficient data: below the
//! MDET threshold a valid baseline passes through untouched, and with an
//! invalid baseline the observed mean intake itself becomes the estimate.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::config::EngineConfig;
use crate::constants::energy::{DAYS_PER_WEEK, KCAL_PER_LB_BODY_MASS};
use crate::estimate::Estimate;
use crate::models::{LogStats, NutritionLog, UserProfile, WeightChangeCategory};

/// Estimate TDEE for one log and user.
///
/// Faults inside the computation degrade to `InsufficientData` and are
/// reported through tracing; they never propagate to the caller.
#[must_use]
pub fn estimate_tdee(
    log: &NutritionLog,
    user: &UserProfile,
    stats: &LogStats,
    config: &EngineConfig,
) -> Estimate {
    match catch_unwind(AssertUnwindSafe(|| {
        estimate_inner(log, user, stats, config)
    })) {
        Ok(estimate) => estimate,
        Err(_) => {
            tracing::error!(
                log_title = %log.title,
                "TDEE estimator fault; degrading to insufficient data"
            );
            Estimate::InsufficientData
        }
    }
}

fn estimate_inner(
    log: &NutritionLog,
    user: &UserProfile,
    stats: &LogStats,
    config: &EngineConfig,
) -> Estimate {
    // Baseline estimate: log-level capture wins over the profile value.
    // Out-of-bounds baselines are treated as absent.
    let baseline = log
        .start_tdee
        .or(user.estimated_tdee)
        .filter(|be| config.tdee_bounds.contains(*be));

    if log.day_entries.is_empty() || !stats.meets_mdet {
        return baseline.map_or(Estimate::InsufficientData, |be| Estimate::Known(be.round()));
    }

    let Some(be) = baseline else {
        // MDET met, baseline invalid: the observed mean intake is the
        // estimate, skipping the comparison matrix entirely.
        return stats.avg_kcal_intake.map(f64::round);
    };

    let Estimate::Known(mu) = stats.avg_kcal_intake else {
        return Estimate::Known(be.round());
    };
    let Some(trend) = stats.weight_change_category else {
        return Estimate::Known(be.round());
    };

    // Non-negative magnitude; the sign is baked into the matrix branch.
    let weekly_rate_lbs = stats.weekly_weight_change.known().unwrap_or(0.0);
    let daily_imbalance = weekly_rate_lbs * KCAL_PER_LB_BODY_MASS / DAYS_PER_WEEK;

    let near = (be - mu).abs() <= config.thresholds.estimated_average_threshold_kcal;

    let final_tdee = if near {
        match trend {
            WeightChangeCategory::Gained => (be.min(mu) - daily_imbalance).round(),
            WeightChangeCategory::Lost => (be.max(mu) + daily_imbalance).round(),
            WeightChangeCategory::Maintained => ((be + mu) / 2.0).round(),
        }
    } else if be > mu {
        match trend {
            WeightChangeCategory::Gained => {
                let abe = mu - 0.25 * (be - mu);
                (abe - daily_imbalance).round()
            }
            WeightChangeCategory::Lost => {
                let abe = ((be + mu) / 2.0).round();
                (abe + daily_imbalance).round()
            }
            WeightChangeCategory::Maintained => mu.round(),
        }
    } else {
        match trend {
            WeightChangeCategory::Gained => {
                let abe = ((be + mu) / 2.0).round();
                (abe - daily_imbalance).round()
            }
            WeightChangeCategory::Lost => {
                let abe = mu + 0.25 * (mu - be);
                (abe + daily_imbalance).round()
            }
            WeightChangeCategory::Maintained => mu.round(),
        }
    };

    tracing::debug!(
        baseline = be,
        mean_intake = mu,
        ?trend,
        near,
        daily_imbalance,
        final_tdee,
        "selected decision-matrix branch"
    );

    Estimate::Known(final_tdee)
}
