// ABOUTME: Physiological constants used by the energy-balance estimation engine
// ABOUTME: Energy density, unit conversion factors, BMI cutoffs, and weekly rate windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Physiological constants grounded in nutrition science.
//!
//! Configurable thresholds (maintenance band, MDET, goal-intake tables) live
//! in [`crate::config`]; the values here are fixed facts of physiology and
//! unit systems.

/// Energy equivalence of body mass.
pub mod energy {
    /// Approximate energy content of one pound of body mass (kcal).
    ///
    /// Reference: Wishnofsky, M. (1958). Caloric equivalents of gained or
    /// lost weight. *American Journal of Clinical Nutrition*, 6(5), 542-546.
    pub const KCAL_PER_LB_BODY_MASS: f64 = 3500.0;

    /// Days per week, used when spreading a weekly rate over daily intake.
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Unit conversion factors.
pub mod conversions {
    /// Kilograms per pound (exact, international avoirdupois pound).
    pub const KG_PER_LB: f64 = 0.453_592_37;

    /// Centimeters per inch (exact).
    pub const CM_PER_INCH: f64 = 2.54;
}

/// Body Mass Index classification cutoffs.
///
/// Reference: WHO Expert Consultation (2004). Appropriate body-mass index
/// for Asian populations. *The Lancet*, 363(9403), 157-163.
pub mod bmi {
    /// Below this BMI a person is classified underweight.
    pub const UNDERWEIGHT_CEILING: f64 = 18.5;

    /// Below this BMI (and at/above underweight) a person is normal weight.
    pub const NORMAL_CEILING: f64 = 25.0;

    /// Below this BMI (and at/above normal) a person is overweight;
    /// at/above it, obese.
    pub const OVERWEIGHT_CEILING: f64 = 30.0;

    /// Imperial BMI formula scale factor: BMI = 703 * lbs / inches^2.
    pub const IMPERIAL_SCALE: f64 = 703.0;

    /// Total weight change beyond this percent of start weight is flagged
    /// as clinically significant.
    pub const SIGNIFICANT_TOTAL_CHANGE_PERCENT: f64 = 15.0;
}

/// Optimal weekly weight-change windows, as fractions of body weight.
///
/// Fat-loss window follows the 0.5-1.5 %/week guidance for preserving lean
/// mass; muscle-gain window follows the slower 0.063-0.38 %/week guidance
/// for limiting fat accrual.
pub mod weekly_rate {
    /// Minimum optimal fat-loss rate (fraction of body weight per week).
    pub const FAT_LOSS_OPTIMAL_MIN: f64 = 0.005;

    /// Maximum optimal fat-loss rate (fraction of body weight per week).
    pub const FAT_LOSS_OPTIMAL_MAX: f64 = 0.015;

    /// Minimum optimal muscle-gain rate (fraction of body weight per week).
    pub const MUSCLE_GAIN_OPTIMAL_MIN: f64 = 0.000_63;

    /// Maximum optimal muscle-gain rate (fraction of body weight per week).
    pub const MUSCLE_GAIN_OPTIMAL_MAX: f64 = 0.003_8;
}
