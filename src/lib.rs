// ABOUTME: Adaptive energy-balance estimation engine library root
// ABOUTME: TDEE estimation, goal intake ranges, and categorized feedback analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Energy Balance
//!
//! Adaptive energy-balance estimation engine for body-composition coaching.
//! Given a user's self-reported weight and calorie-intake history, the
//! engine estimates Total Daily Energy Expenditure (TDEE), derives a goal
//! calorie-intake range, and generates categorized textual feedback.
//!
//! The engine is a pure, synchronous computation over data already
//! materialized in memory: no I/O, no shared mutable state. Each invocation
//! is independent and safely parallelizable across logs and users.
//!
//! ```
//! use energy_balance::config::EngineConfig;
//! use energy_balance::models::{DayEntry, Goal, NutritionLog, UserProfile};
//! use energy_balance::payload::assemble;
//!
//! let log = NutritionLog::new("Summer cut".to_owned(), Some(Goal::FatLoss), Some(2800.0));
//! let user = UserProfile::new();
//! let config = EngineConfig::default();
//! let payload = assemble(&log, &user, &config, &mut rand::thread_rng()).unwrap();
//! assert_eq!(payload.estimated_tdee.known(), Some(2800.0));
//! ```

/// Injectable engine configuration
pub mod config;
/// Physiological constants
pub mod constants;
/// Unit conversion and rounding primitives
pub mod converter;
/// Engine error types
pub mod errors;
/// The Known/InsufficientData sentinel type
pub mod estimate;
/// Feedback analyzer pipeline
pub mod feedback;
/// Goal calorie-intake range calculator
pub mod goal_intake;
/// Log statistics calculator
pub mod log_stats;
/// Data models
pub mod models;
/// Payload assembly and historical-entry stamping
pub mod payload;
/// Adaptive baseline-estimate TDEE algorithm
pub mod tdee_estimator;

pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use estimate::Estimate;
pub use models::{
    AnalysisCategory, DayEntry, EnergyPayload, Feedback, FeedbackCategory, Goal, LogStats,
    NutritionLog, UserProfile, WeightChangeCategory,
};
pub use payload::{assemble, assemble_batch, stamp_entries};
