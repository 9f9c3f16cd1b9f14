// ABOUTME: Constants for progression analytics organized by domain
// ABOUTME: Badge thresholds, score bounds, rounding precision, and date format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values for the analytics configuration. The intelligence crate reads
//! them through `AnalyticsConfig::default()`; nothing here is mutable.

/// Momentum badge thresholds
pub mod momentum {
    /// Momentum strictly above this value earns the "Acceleration" badge;
    /// strictly below its negation earns "Adjustment phase"
    pub const BADGE_THRESHOLD_PCT: f64 = 2.0;
}

/// Per-metric progression badge thresholds (detail view)
pub mod progress_badges {
    /// Progression at or above this percentage is a rapid improvement
    pub const RAPID_IMPROVEMENT_PCT: f64 = 20.0;
    /// Progression at or above this percentage (and below rapid) reaches the goal
    pub const GOAL_REACHED_PCT: f64 = 10.0;
}

/// Evolution score constants
pub mod evolution {
    /// Evolution scores are clamped to `[-SCORE_BOUND_PCT, SCORE_BOUND_PCT]`
    pub const SCORE_BOUND_PCT: f64 = 100.0;
    /// Maximum number of metrics reported as improvement zones
    pub const MAX_IMPROVEMENT_ZONES: usize = 3;
}

/// Rounding precision for published values
pub mod precision {
    /// Scores, momentum, and group averages use one decimal
    pub const SCORE_DECIMALS: i32 = 1;
    /// Forecast interpolation uses three decimals
    pub const FORECAST_DECIMALS: i32 = 3;
}

/// Date handling
pub mod dates {
    /// Calendar date format of measurement rows (ISO 8601, lexicographically sortable)
    pub const ROW_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Unit conversions
pub mod units {
    /// Seconds per minute, used to display duration metrics in minutes
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
