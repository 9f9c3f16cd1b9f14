// ABOUTME: Configuration error types for analytics threshold validation
// ABOUTME: Defines error variants for invalid ranges, inconsistent thresholds, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analytics threshold validation.

use challenge_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., negative momentum threshold)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Thresholds that must be ordered are not (e.g., goal above rapid improvement)
    #[error("Inconsistent thresholds: {0}")]
    InconsistentThresholds(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
