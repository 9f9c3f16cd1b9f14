// ABOUTME: Analytics configuration for badge thresholds and evolution score bounds
// ABOUTME: Configures momentum badges, progression badges, score clamping, and improvement zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration
//!
//! Thresholds used to classify progression. Defaults come from
//! `challenge_core::constants`; the dashboard binary may override them.

use challenge_core::constants::{evolution, momentum, progress_badges};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Analytics Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Momentum above this earns "Acceleration", below its negation "Adjustment phase"
    pub momentum_badge_threshold: f64,
    /// Per-metric progression at or above this is a rapid improvement
    pub rapid_improvement_pct: f64,
    /// Per-metric progression at or above this reaches the goal
    pub goal_reached_pct: f64,
    /// Evolution scores are clamped to plus or minus this bound
    pub score_bound: f64,
    /// Maximum number of improvement zones reported per person
    pub max_improvement_zones: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            momentum_badge_threshold: momentum::BADGE_THRESHOLD_PCT,
            rapid_improvement_pct: progress_badges::RAPID_IMPROVEMENT_PCT,
            goal_reached_pct: progress_badges::GOAL_REACHED_PCT,
            score_bound: evolution::SCORE_BOUND_PCT,
            max_improvement_zones: evolution::MAX_IMPROVEMENT_ZONES,
        }
    }
}

impl AnalyticsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is negative, non-finite, or the
    /// progression badge thresholds are not ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.momentum_badge_threshold.is_finite() || self.momentum_badge_threshold < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Momentum badge threshold must be a finite, non-negative percentage",
            ));
        }

        if !self.score_bound.is_finite() || self.score_bound <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "Score bound must be a finite, positive percentage",
            ));
        }

        if !self.goal_reached_pct.is_finite() || !self.rapid_improvement_pct.is_finite() {
            return Err(ConfigError::InvalidRange(
                "Progression badge thresholds must be finite",
            ));
        }

        if self.goal_reached_pct > self.rapid_improvement_pct {
            return Err(ConfigError::InconsistentThresholds(
                "Goal reached threshold must not exceed rapid improvement threshold",
            ));
        }

        if self.max_improvement_zones == 0 {
            return Err(ConfigError::InvalidRange(
                "At least one improvement zone must be reported",
            ));
        }

        Ok(())
    }
}
