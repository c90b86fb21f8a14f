// ABOUTME: Configuration module for the energy-balance engine
// ABOUTME: Re-exports the injectable engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Engine thresholds and goal-intake tables
pub mod engine;

pub use engine::{
    DeficitTable, EngineConfig, GoalIntakeConfig, SurplusTable, TdeeBoundsConfig, ThresholdConfig,
};
