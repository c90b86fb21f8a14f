// ABOUTME: Integration tests for the feedback analyzer pipeline
// ABOUTME: Per-analyzer preconditions, branch selection, grouping, and the general fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::bare_user;
use energy_balance::config::EngineConfig;
use energy_balance::estimate::Estimate;
use energy_balance::feedback::{
    adherence, bmi, general, run_analyzers, weekly_rate, weight_change, AnalyzerContext,
};
use energy_balance::models::{
    FeedbackCategory, Goal, LogStats, NutritionLog, UserProfile, WeightChangeCategory,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Fully-populated stats for an on-track fat-loss log.
fn full_stats() -> LogStats {
    LogStats {
        meets_mdet: true,
        start_weight: Estimate::Known(160.0),
        current_weight: Estimate::Known(156.0),
        weight_difference_start_to_current: Estimate::Known(4.0),
        weight_change_category: Some(WeightChangeCategory::Lost),
        weight_change_on_track_for_goal: true,
        weekly_weight_change: Estimate::Known(2.0),
        weekly_percent_change: Estimate::Known(0.013),
        total_percent_weight_change: Estimate::Known(2.5),
        avg_kcal_intake: Estimate::Known(2500.0),
    }
}

fn empty_stats() -> LogStats {
    LogStats {
        meets_mdet: false,
        start_weight: Estimate::InsufficientData,
        current_weight: Estimate::InsufficientData,
        weight_difference_start_to_current: Estimate::InsufficientData,
        weight_change_category: None,
        weight_change_on_track_for_goal: false,
        weekly_weight_change: Estimate::InsufficientData,
        weekly_percent_change: Estimate::InsufficientData,
        total_percent_weight_change: Estimate::InsufficientData,
        avg_kcal_intake: Estimate::InsufficientData,
    }
}

struct Fixture {
    log: NutritionLog,
    user: UserProfile,
    stats: LogStats,
    config: EngineConfig,
}

impl Fixture {
    fn fat_loss() -> Self {
        Self {
            log: NutritionLog::new("cut".to_owned(), Some(Goal::FatLoss), Some(3000.0)),
            user: bare_user(),
            stats: full_stats(),
            config: EngineConfig::default(),
        }
    }

    fn ctx(&self) -> AnalyzerContext<'_> {
        AnalyzerContext {
            log: &self.log,
            user: &self.user,
            stats: &self.stats,
            tdee: Estimate::Known(3000.0),
            intake_window: Some((2400.0, 2600.0)),
            config: &self.config,
        }
    }
}

// === Calorie adherence ===

#[test]
fn test_adherence_reports_shortfall_below_window() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.avg_kcal_intake = Estimate::Known(2000.0);

    let feedback = adherence::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert_eq!(feedback.title, "Calorie Intake");
    assert!(feedback.message.contains("2000"), "{}", feedback.message);
    assert!(feedback.message.contains("400"), "{}", feedback.message);
    assert!(
        feedback.message.contains("2400 kcal - 2600 kcal"),
        "{}",
        feedback.message
    );
}

#[test]
fn test_adherence_reports_excess_above_window() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.avg_kcal_intake = Estimate::Known(3000.0);

    let feedback = adherence::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("3000"), "{}", feedback.message);
    assert!(feedback.message.contains("400"), "{}", feedback.message);
}

#[test]
fn test_adherence_praises_inside_window() {
    let fixture = Fixture::fat_loss();
    let feedback = adherence::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("inside"), "{}", feedback.message);
}

#[test]
fn test_adherence_silent_without_preconditions() {
    let mut no_intake = Fixture::fat_loss();
    no_intake.stats.avg_kcal_intake = Estimate::InsufficientData;
    assert!(adherence::analyze(&no_intake.ctx(), &mut rng()).is_none());

    let no_window = Fixture::fat_loss();
    let mut ctx = no_window.ctx();
    ctx.intake_window = None;
    assert!(adherence::analyze(&ctx, &mut rng()).is_none());

    let no_tdee = Fixture::fat_loss();
    let mut ctx = no_tdee.ctx();
    ctx.tdee = Estimate::InsufficientData;
    assert!(adherence::analyze(&ctx, &mut rng()).is_none());
}

// === Overall weight change ===

#[test]
fn test_weight_change_on_track_praises_direction() {
    let fixture = Fixture::fat_loss();
    let feedback = weight_change::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert_eq!(feedback.title, "Weight Change");
    assert!(feedback.message.contains("losing"), "{}", feedback.message);
}

#[test]
fn test_weight_change_off_track_recommends_adjustment() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.weight_change_category = Some(WeightChangeCategory::Gained);
    fixture.stats.weight_change_on_track_for_goal = false;

    let feedback = weight_change::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("gaining"), "{}", feedback.message);
    assert!(feedback.message.contains("lower end"), "{}", feedback.message);
}

#[test]
fn test_weight_change_silent_below_mdet_or_without_goal() {
    let mut below_mdet = Fixture::fat_loss();
    below_mdet.stats.meets_mdet = false;
    assert!(weight_change::analyze(&below_mdet.ctx(), &mut rng()).is_none());

    let mut no_goal = Fixture::fat_loss();
    no_goal.log.goal = None;
    assert!(weight_change::analyze(&no_goal.ctx(), &mut rng()).is_none());

    let mut no_category = Fixture::fat_loss();
    no_category.stats.weight_change_category = None;
    assert!(weight_change::analyze(&no_category.ctx(), &mut rng()).is_none());
}

// === Weekly rate ===

#[test]
fn test_weekly_rate_below_optimal_window() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.weekly_percent_change = Estimate::Known(0.001);

    let feedback = weekly_rate::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert_eq!(feedback.title, "Weekly Rate");
    assert!(feedback.message.contains("0.1%"), "{}", feedback.message);
}

#[test]
fn test_weekly_rate_inside_optimal_window() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.weekly_percent_change = Estimate::Known(0.01);

    let feedback = weekly_rate::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(
        feedback.message.contains("inside the optimal window"),
        "{}",
        feedback.message
    );
}

#[test]
fn test_weekly_rate_above_optimal_window() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats.weekly_percent_change = Estimate::Known(0.02);

    let feedback = weekly_rate::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("2%"), "{}", feedback.message);
}

#[test]
fn test_weekly_rate_silent_for_maintenance_or_off_track() {
    let mut maintain = Fixture::fat_loss();
    maintain.log.goal = Some(Goal::Maintain);
    assert!(weekly_rate::analyze(&maintain.ctx(), &mut rng()).is_none());

    let mut off_track = Fixture::fat_loss();
    off_track.stats.weight_change_on_track_for_goal = false;
    assert!(weekly_rate::analyze(&off_track.ctx(), &mut rng()).is_none());
}

// === Total weight change / BMI ===

#[test]
fn test_bmi_warns_underweight_cutter() {
    let mut fixture = Fixture::fat_loss();
    fixture.user.height_inches = Some(65.0);
    fixture.stats.current_weight = Estimate::Known(100.0);

    let feedback = bmi::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert_eq!(feedback.title, "Total Weight Change");
    assert!(feedback.message.contains("underweight"), "{}", feedback.message);
}

#[test]
fn test_bmi_warns_obese_bulker() {
    let mut fixture = Fixture::fat_loss();
    fixture.log.goal = Some(Goal::MuscleGain);
    fixture.stats.weight_change_category = Some(WeightChangeCategory::Gained);
    fixture.user.height_inches = Some(65.0);
    fixture.stats.current_weight = Estimate::Known(250.0);

    let feedback = bmi::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("obese"), "{}", feedback.message);
}

#[test]
fn test_bmi_silent_in_normal_range_without_significant_change() {
    let mut fixture = Fixture::fat_loss();
    fixture.user.height_inches = Some(67.0);
    fixture.stats.current_weight = Estimate::Known(150.0);

    assert!(bmi::analyze(&fixture.ctx(), &mut rng()).is_none());
}

#[test]
fn test_bmi_flags_clinically_significant_total_change() {
    let mut fixture = Fixture::fat_loss();
    fixture.user.height_inches = Some(67.0);
    fixture.stats.current_weight = Estimate::Known(150.0);
    fixture.stats.total_percent_weight_change = Estimate::Known(16.0);

    let feedback = bmi::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(
        feedback.message.contains("clinically significant"),
        "{}",
        feedback.message
    );
}

#[test]
fn test_bmi_silent_without_height_or_for_maintenance() {
    let no_height = Fixture::fat_loss();
    assert!(bmi::analyze(&no_height.ctx(), &mut rng()).is_none());

    let mut maintain = Fixture::fat_loss();
    maintain.log.goal = Some(Goal::Maintain);
    maintain.user.height_inches = Some(65.0);
    assert!(bmi::analyze(&maintain.ctx(), &mut rng()).is_none());
}

#[test]
fn test_bmi_falls_back_to_start_weight() {
    let mut fixture = Fixture::fat_loss();
    fixture.user.height_inches = Some(65.0);
    fixture.stats.current_weight = Estimate::InsufficientData;
    fixture.stats.start_weight = Estimate::Known(100.0);

    let feedback = bmi::analyze(&fixture.ctx(), &mut rng()).unwrap();
    assert!(feedback.message.contains("underweight"), "{}", feedback.message);
}

// === Pipeline grouping ===

#[test]
fn test_pipeline_groups_calories_then_weight() {
    let fixture = Fixture::fat_loss();
    let analysis = run_analyzers(&fixture.ctx(), &mut rng());

    assert_eq!(analysis.len(), 2);
    assert_eq!(analysis[0].category, FeedbackCategory::Calories);
    assert_eq!(analysis[0].feedback.len(), 1);
    assert_eq!(analysis[1].category, FeedbackCategory::Weight);
    // Weight change and weekly rate fire; BMI stays silent without height.
    assert_eq!(analysis[1].feedback.len(), 2);
}

#[test]
fn test_pipeline_falls_back_to_general_when_nothing_fires() {
    let mut fixture = Fixture::fat_loss();
    fixture.stats = empty_stats();
    let mut ctx = fixture.ctx();
    ctx.tdee = Estimate::InsufficientData;
    ctx.intake_window = None;

    let analysis = run_analyzers(&ctx, &mut rng());
    assert_eq!(analysis.len(), 1);
    assert_eq!(analysis[0].category, FeedbackCategory::General);
    assert_eq!(analysis[0].feedback.len(), 1);
    assert_eq!(analysis[0].feedback[0].title, "Keep Logging");
}

#[test]
fn test_general_fallback_is_deterministic_under_a_fixed_seed() {
    let first = general::analyze(&mut ChaCha8Rng::seed_from_u64(7));
    let second = general::analyze(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(first.message, second.message);
}
