// ABOUTME: Feedback analyzer pipeline with per-analyzer fault boundaries
// ABOUTME: Analyzers run independently over shared stats; one fault never aborts the rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feedback analyzers.
//!
//! Each analyzer is a pure function from the shared context to zero or one
//! [`Feedback`] item, re-validating its own preconditions so it can also be
//! invoked outside the standard pipeline. The pipeline wraps every analyzer
//! in its own fault boundary: a panic degrades that analyzer alone to "no
//! output" and is reported through tracing.
//!
//! Phrase selection inside analyzers is uniformly random through the
//! injected RNG; numeric branching stays fully deterministic.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::EngineConfig;
use crate::estimate::Estimate;
use crate::models::{
    AnalysisCategory, Feedback, FeedbackCategory, LogStats, NutritionLog, UserProfile,
};

/// Calorie-adherence analyzer
pub mod adherence;
/// Total weight change / BMI analyzer
pub mod bmi;
/// General encouragement fallback
pub mod general;
/// Weekly-rate analyzer
pub mod weekly_rate;
/// Overall weight-change analyzer
pub mod weight_change;

/// Shared read-only input for all analyzers.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerContext<'a> {
    /// The log under analysis.
    pub log: &'a NutritionLog,
    /// The owning user's profile subset.
    pub user: &'a UserProfile,
    /// Statistics derived from the log.
    pub stats: &'a LogStats,
    /// Final estimated TDEE.
    pub tdee: Estimate,
    /// Absolute goal-intake window `(lower, upper)` in kcal, if computable.
    pub intake_window: Option<(f64, f64)>,
    /// Engine configuration.
    pub config: &'a EngineConfig,
}

/// Run all analyzers in the fixed pipeline order and group their output.
///
/// Category order is stable: Calories, then Weight, then General. The
/// general fallback is included only when no other analyzer produced output.
pub fn run_analyzers<R: Rng>(ctx: &AnalyzerContext<'_>, rng: &mut R) -> Vec<AnalysisCategory> {
    let calorie_items: Vec<Feedback> = [guarded("calorie_adherence", || {
        adherence::analyze(ctx, rng)
    })]
    .into_iter()
    .flatten()
    .collect();

    let weight_items: Vec<Feedback> = [
        guarded("overall_weight_change", || {
            weight_change::analyze(ctx, rng)
        }),
        guarded("total_change_bmi", || bmi::analyze(ctx, rng)),
        guarded("weekly_rate", || weekly_rate::analyze(ctx, rng)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut analysis = Vec::new();
    if !calorie_items.is_empty() {
        analysis.push(AnalysisCategory {
            category: FeedbackCategory::Calories,
            feedback: calorie_items,
        });
    }
    if !weight_items.is_empty() {
        analysis.push(AnalysisCategory {
            category: FeedbackCategory::Weight,
            feedback: weight_items,
        });
    }

    if analysis.is_empty() {
        if let Some(item) = guarded("general_fallback", || Some(general::analyze(rng))) {
            analysis.push(AnalysisCategory {
                category: FeedbackCategory::General,
                feedback: vec![item],
            });
        }
    }

    analysis
}

/// Fault boundary around one analyzer: a panic degrades to no output for
/// that analyzer only and is reported, never propagated.
fn guarded<F: FnOnce() -> Option<Feedback>>(name: &str, analyzer: F) -> Option<Feedback> {
    match catch_unwind(AssertUnwindSafe(analyzer)) {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(analyzer = name, "analyzer fault; skipping its output");
            None
        }
    }
}

/// Uniform random choice among pre-formatted phrasings.
pub(crate) fn choose<R: Rng>(rng: &mut R, options: &[String]) -> String {
    options.choose(rng).cloned().unwrap_or_default()
}
