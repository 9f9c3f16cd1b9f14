// ABOUTME: Configuration module for challenge-intelligence crate
// ABOUTME: Re-exports analytics threshold configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics thresholds (badges, score bounds, improvement zones)
pub mod analytics;

/// Configuration validation errors
pub mod error;

pub use analytics::AnalyticsConfig;
pub use error::ConfigError;
