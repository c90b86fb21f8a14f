// ABOUTME: Engine error types for configuration and internal computation faults
// ABOUTME: Insufficient data is NOT an error here; that is the Estimate sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling for the estimation engine.
//!
//! Two things can go wrong that are genuinely errors: a caller injects an
//! invalid configuration, or an unexpected computation fault escapes a
//! calculator. Missing input data is an expected condition and flows through
//! [`crate::estimate::Estimate`] instead.

use thiserror::Error;

/// Errors produced by the estimation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A threshold or table in the injected configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// An unexpected runtime fault inside a calculator that could not be
    /// attributed to missing data.
    #[error("internal computation fault: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an internal computation fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let config = EngineError::invalid_config("mdet must be at least 1");
        assert_eq!(
            config.to_string(),
            "invalid engine configuration: mdet must be at least 1"
        );

        let fault = EngineError::internal("stats overflow");
        assert_eq!(fault.to_string(), "internal computation fault: stats overflow");
    }
}
