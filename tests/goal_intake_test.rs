// ABOUTME: Integration tests for the goal-intake calculator
// ABOUTME: Surplus/deficit preference tables, maintenance band, and VLCD clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::bare_user;
use energy_balance::config::EngineConfig;
use energy_balance::estimate::Estimate;
use energy_balance::goal_intake::{
    goal_intake_boundaries, goal_intake_range, goal_intake_window,
};
use energy_balance::models::{Goal, RatePreference, UserProfile};

fn user_with_deficit(preference: RatePreference) -> UserProfile {
    let mut user = bare_user();
    user.preferences.nutrition.deficit = Some(preference);
    user
}

fn user_with_surplus(preference: RatePreference) -> UserProfile {
    let mut user = bare_user();
    user.preferences.nutrition.surplus = Some(preference);
    user
}

// === Invalid TDEE ===

#[test]
fn test_no_range_without_a_valid_tdee() {
    let config = EngineConfig::default();
    let user = bare_user();

    for tdee in [Estimate::InsufficientData, Estimate::Known(500.0), Estimate::Known(9000.0)] {
        assert_eq!(goal_intake_window(Some(Goal::FatLoss), tdee, &user, &config), None);
        assert_eq!(goal_intake_boundaries(Some(Goal::FatLoss), tdee, &user, &config), None);
        assert_eq!(goal_intake_range(Some(Goal::FatLoss), tdee, &user, &config), None);
    }
}

// === Maintenance ===

#[test]
fn test_maintenance_uses_symmetric_band() {
    let config = EngineConfig::default();
    let user = bare_user();
    let tdee = Estimate::Known(2500.0);

    assert_eq!(
        goal_intake_window(Some(Goal::Maintain), tdee, &user, &config),
        Some((2400.0, 2600.0))
    );
    assert_eq!(
        goal_intake_boundaries(Some(Goal::Maintain), tdee, &user, &config),
        Some((100.0, 100.0))
    );
    // Unset goal behaves like maintenance.
    assert_eq!(
        goal_intake_window(None, tdee, &user, &config),
        Some((2400.0, 2600.0))
    );
}

// === Muscle gain ===

#[test]
fn test_surplus_defaults_to_conservative() {
    let config = EngineConfig::default();
    let tdee = Estimate::Known(2500.0);

    assert_eq!(
        goal_intake_window(Some(Goal::MuscleGain), tdee, &bare_user(), &config),
        Some((2600.0, 2800.0))
    );
    assert_eq!(
        goal_intake_range(Some(Goal::MuscleGain), tdee, &bare_user(), &config).as_deref(),
        Some("2600 kcal - 2800 kcal")
    );
}

#[test]
fn test_surplus_preference_selects_band() {
    let config = EngineConfig::default();
    let tdee = Estimate::Known(2500.0);

    let moderate = user_with_surplus(RatePreference::Moderate);
    assert_eq!(
        goal_intake_window(Some(Goal::MuscleGain), tdee, &moderate, &config),
        Some((2800.0, 3000.0))
    );

    // There is no very-aggressive surplus tier; it maps to aggressive.
    for preference in [RatePreference::Aggressive, RatePreference::VeryAggressive] {
        let user = user_with_surplus(preference);
        assert_eq!(
            goal_intake_window(Some(Goal::MuscleGain), tdee, &user, &config),
            Some((3000.0, 3250.0))
        );
    }
}

// === Fat loss ===

#[test]
fn test_deficit_preference_selects_band() {
    let config = EngineConfig::default();
    let tdee = Estimate::Known(3000.0);

    assert_eq!(
        goal_intake_window(Some(Goal::FatLoss), tdee, &bare_user(), &config),
        Some((2500.0, 2750.0))
    );

    let moderate = user_with_deficit(RatePreference::Moderate);
    assert_eq!(
        goal_intake_window(Some(Goal::FatLoss), tdee, &moderate, &config),
        Some((2250.0, 2500.0))
    );
    assert_eq!(
        goal_intake_boundaries(Some(Goal::FatLoss), tdee, &moderate, &config),
        Some((500.0, 750.0))
    );

    let very_aggressive = user_with_deficit(RatePreference::VeryAggressive);
    assert_eq!(
        goal_intake_window(Some(Goal::FatLoss), tdee, &very_aggressive, &config),
        Some((1750.0, 2000.0))
    );
}

#[test]
fn test_vlcd_floor_clamps_low_tdee_deficits() {
    let config = EngineConfig::default();
    let user = user_with_deficit(RatePreference::VeryAggressive);

    // Every TDEE low enough to undercut the floor collapses to the same
    // absolute window.
    for tdee in [750.0, 800.0, 820.0] {
        assert_eq!(
            goal_intake_range(Some(Goal::FatLoss), Estimate::Known(tdee), &user, &config)
                .as_deref(),
            Some("600 kcal - 700 kcal"),
            "tdee={tdee}"
        );
    }
}

#[test]
fn test_vlcd_clamped_boundaries_rederive_offsets() {
    let config = EngineConfig::default();
    let user = user_with_deficit(RatePreference::VeryAggressive);

    // Offsets are re-derived so tdee minus boundary reproduces the floor.
    assert_eq!(
        goal_intake_boundaries(Some(Goal::FatLoss), Estimate::Known(750.0), &user, &config),
        Some((50.0, 150.0))
    );
    assert_eq!(
        goal_intake_boundaries(Some(Goal::FatLoss), Estimate::Known(820.0), &user, &config),
        Some((120.0, 220.0))
    );
}

#[test]
fn test_deficit_above_floor_is_untouched() {
    let config = EngineConfig::default();
    let user = user_with_deficit(RatePreference::Conservative);

    // Both ends of 1350 - (250, 500) stay above the floor, so the nominal
    // band survives unchanged.
    assert_eq!(
        goal_intake_window(Some(Goal::FatLoss), Estimate::Known(1350.0), &user, &config),
        Some((850.0, 1100.0))
    );
}
