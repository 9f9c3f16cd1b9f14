// ABOUTME: Progression percentages, least-squares trend fitting, and next-value projection
// ABOUTME: Holds the single polarity-aware delta primitive shared by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: point counts are small

use challenge_core::models::{MeasurementRow, MetricKey};
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;

/// A point used for trend fitting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Abscissa (1-based reading index)
    pub x: f64,
    /// Measured value
    pub y: f64,
}

/// Ordinary least squares line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Slope of the regression line (rate of change per index)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
}

impl TrendLine {
    /// Evaluate the line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Change from `from` to `to`, positive when it is an improvement
#[must_use]
pub fn directional_delta(from: f64, to: f64, lower_is_better: bool) -> f64 {
    if lower_is_better {
        from - to
    } else {
        to - from
    }
}

/// Polarity-aware progression in percent between two readings
///
/// Returns `None` when `first` is exactly zero: progression from a zero
/// baseline is unmeasurable.
#[must_use]
#[allow(clippy::float_cmp)] // Exact zero is the only undefined baseline
pub fn progression_between(first: f64, last: f64, lower_is_better: bool) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some(directional_delta(first, last, lower_is_better) / first.abs() * 100.0)
}

/// Progression between the first and last present values of a sequence
///
/// Absent values are ignored, not interpolated.
#[must_use]
pub fn progression_pct(values: &[Option<f64>], lower_is_better: bool) -> Option<f64> {
    let mut present = values.iter().flatten();
    let first = *present.next()?;
    let last = *present.next_back()?;
    progression_between(first, last, lower_is_better)
}

/// Fit an ordinary least squares line
///
/// Returns `None` with fewer than two points or when every `x` is identical.
#[must_use]
#[allow(clippy::float_cmp)] // Only an exactly singular system is rejected
pub fn linear_trend(points: &[TrendPoint]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    let sum_xy: f64 = points.iter().map(|p| p.x * p.y).sum();
    let sum_xx: f64 = points.iter().map(|p| p.x * p.x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some(TrendLine { slope, intercept })
}

/// Project the next raw value of a metric from its trend
///
/// Points are `(position + 1, value)` for rows carrying the metric; the
/// projection is evaluated one index past the number of kept points. No
/// polarity correction is applied.
#[must_use]
pub fn project_next_value(rows: &[MeasurementRow], metric: MetricKey) -> Option<f64> {
    let points: Vec<TrendPoint> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            row.value(metric).map(|y| TrendPoint {
                x: (index + 1) as f64,
                y,
            })
        })
        .collect();

    let trend = linear_trend(&points)?;
    Some(trend.predict((points.len() + 1) as f64))
}

/// Badge shown next to a single metric's progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBadge {
    /// Progression at or above the rapid improvement threshold
    #[serde(rename = "rapid improvement")]
    RapidImprovement,
    /// Progression at or above the goal threshold
    #[serde(rename = "goal reached")]
    GoalReached,
}

impl ProgressBadge {
    /// Classify with the default thresholds (20% and 10%)
    #[must_use]
    pub fn from_progress(progress: Option<f64>) -> Option<Self> {
        Self::classify(progress, &AnalyticsConfig::default())
    }

    /// Classify with configured thresholds
    #[must_use]
    pub fn classify(progress: Option<f64>, config: &AnalyticsConfig) -> Option<Self> {
        let progress = progress?;
        if progress >= config.rapid_improvement_pct {
            Some(Self::RapidImprovement)
        } else if progress >= config.goal_reached_pct {
            Some(Self::GoalReached)
        } else {
            None
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RapidImprovement => "rapid improvement",
            Self::GoalReached => "goal reached",
        }
    }
}

/// Round half away from zero to `decimals` places; negative zero becomes zero
#[must_use]
#[allow(clippy::float_cmp)] // Folds -0.0 into 0.0
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Arithmetic mean, `None` when empty
#[must_use]
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
