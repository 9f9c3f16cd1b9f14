// ABOUTME: Static registry of the eight tracked challenge metrics
// ABOUTME: Defines MetricKey, MetricUnit, Metric polarity, display conversion, and formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::SECONDS_PER_MINUTE;
use crate::errors::AppError;

/// Identifier of a tracked metric
///
/// Serialized with the keys used by the measurement snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKey {
    /// Dips (repetitions)
    #[serde(rename = "dips")]
    Dips,
    /// Push-ups (repetitions)
    #[serde(rename = "pompes")]
    PushUps,
    /// Pronated grip pull-ups (repetitions)
    #[serde(rename = "traction_pro")]
    PronatedPullUps,
    /// Supinated grip pull-ups (repetitions)
    #[serde(rename = "traction_sup")]
    SupinatedPullUps,
    /// Plank hold (stored in seconds)
    #[serde(rename = "planche_sec")]
    Plank,
    /// Superman hold (stored in seconds)
    #[serde(rename = "superman_sec")]
    Superman,
    /// 100 m sprint time (seconds)
    #[serde(rename = "sprint_100m_sec")]
    Sprint100m,
    /// 5 km run time (stored in seconds)
    #[serde(rename = "run_5km_sec")]
    Run5km,
}

impl MetricKey {
    /// Snapshot key of this metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dips => "dips",
            Self::PushUps => "pompes",
            Self::PronatedPullUps => "traction_pro",
            Self::SupinatedPullUps => "traction_sup",
            Self::Plank => "planche_sec",
            Self::Superman => "superman_sec",
            Self::Sprint100m => "sprint_100m_sec",
            Self::Run5km => "run_5km_sec",
        }
    }

    /// Registry entry for this key
    #[must_use]
    pub fn metric(self) -> &'static Metric {
        // Registry order matches declaration order
        &METRICS[self as usize]
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
            .map(|metric| metric.key)
            .ok_or_else(|| AppError::invalid_format(format!("Unknown metric key: {s}")))
    }
}

/// Display unit of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    /// Repetitions
    Reps,
    /// Minutes
    Min,
    /// Seconds
    Sec,
    /// Kilograms
    Kg,
}

impl MetricUnit {
    /// Short unit label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reps => "reps",
            Self::Min => "min",
            Self::Sec => "sec",
            Self::Kg => "kg",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry entry describing one tracked metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    /// Metric identifier
    pub key: MetricKey,
    /// Display label
    pub label: &'static str,
    /// Display unit
    pub unit: MetricUnit,
    /// Whether a numeric decrease is an improvement (timed runs)
    pub lower_is_better: bool,
}

impl Metric {
    /// Convert a stored value to its display unit
    ///
    /// Holds and the 5 km run are recorded in seconds but shown in minutes.
    #[must_use]
    pub fn to_display_value(&self, raw: f64) -> f64 {
        match self.key {
            MetricKey::Plank | MetricKey::Superman | MetricKey::Run5km => {
                raw / SECONDS_PER_MINUTE
            }
            _ => raw,
        }
    }
}

/// The eight tracked metrics in canonical order
pub static METRICS: [Metric; 8] = [
    Metric {
        key: MetricKey::Dips,
        label: "Dips",
        unit: MetricUnit::Reps,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::PushUps,
        label: "Push-ups",
        unit: MetricUnit::Reps,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::PronatedPullUps,
        label: "Pronated pull-ups",
        unit: MetricUnit::Reps,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::SupinatedPullUps,
        label: "Supinated pull-ups",
        unit: MetricUnit::Reps,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::Plank,
        label: "Plank",
        unit: MetricUnit::Min,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::Superman,
        label: "Superman",
        unit: MetricUnit::Min,
        lower_is_better: false,
    },
    Metric {
        key: MetricKey::Sprint100m,
        label: "100m",
        unit: MetricUnit::Sec,
        lower_is_better: true,
    },
    Metric {
        key: MetricKey::Run5km,
        label: "5km",
        unit: MetricUnit::Min,
        lower_is_better: true,
    },
];

/// All metrics in the canonical iteration order
#[must_use]
pub fn list_metrics() -> &'static [Metric] {
    &METRICS
}

/// Find a metric by its snapshot key
///
/// Unknown keys return `None`; callers skip them.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static Metric> {
    METRICS.iter().find(|metric| metric.key.as_str() == key)
}

/// Format a display value with its unit
///
/// Minutes are rendered as `XmYY`, or `Ys` under one minute.
#[must_use]
pub fn format_metric(value: Option<f64>, unit: MetricUnit) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return "-".to_owned();
    };

    match unit {
        MetricUnit::Sec => format!("{value:.1} s"),
        MetricUnit::Min => {
            let total_seconds = (value * SECONDS_PER_MINUTE).round() as i64;
            let minutes = total_seconds.div_euclid(60);
            let seconds = total_seconds.rem_euclid(60);
            if minutes <= 0 {
                format!("{seconds}s")
            } else {
                format!("{minutes}m{seconds:02}")
            }
        }
        MetricUnit::Kg => format!("{value:.1} kg"),
        MetricUnit::Reps => format!("{value:.0}"),
    }
}
