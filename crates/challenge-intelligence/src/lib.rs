// ABOUTME: Progress analytics engine for challenge measurement rows
// ABOUTME: Progression math, step variations, evolution scores, group KPIs, and forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Challenge Intelligence
//!
//! Pure analytics over an immutable snapshot of [`MeasurementRow`]s. Every
//! function is deterministic, performs no I/O, and degrades to `None`, `0`, or
//! an empty collection when the data cannot answer a question.
//!
//! ## Modules
//!
//! - **filter**: person, record type, and date range selection
//! - **progression**: progression percentages, linear trends, projections
//! - **step_variation**: consecutive deltas, rankings, and records
//! - **evolution**: evolution score, momentum, badges, and personal series
//! - **group**: group KPIs and the group average series
//! - **forecast**: forecast line interpolation
//! - **charts**: per-metric chart series merging actuals with the forecast line
//!
//! [`MeasurementRow`]: challenge_core::models::MeasurementRow

/// Analytics thresholds and validation
pub mod config;

/// Row selection by person, record type, and date range
pub mod filter;

/// Progression percentages, linear trend fitting, and projections
pub mod progression;

/// Chronological per-person grouping shared by the analyzers
pub mod series;

/// Consecutive-reading deltas, rankings, and global records
pub mod step_variation;

/// Evolution score, momentum, badges, and personal evolution series
pub mod evolution;

/// Group KPIs and group average evolution series
pub mod group;

/// Linear forecast interpolation between first reading and final target
pub mod forecast;

/// Per-metric chart series for the personal view
pub mod charts;

pub use charts::{build_metric_charts, ChartPoint, MetricChart};
pub use config::{AnalyticsConfig, ConfigError};
pub use evolution::{
    EvolutionEngine, MetricProgression, MetricStat, MomentumBadge, PersonEvolutionSummary,
    SeriesPoint,
};
pub use filter::{filter_rows, RowFilter};
pub use forecast::{interpolate_forecast, ForecastLine};
pub use group::{GroupAggregator, GroupKpis};
pub use progression::{
    directional_delta, linear_trend, progression_between, progression_pct, project_next_value,
    round_to, ProgressBadge, TrendLine, TrendPoint,
};
pub use step_variation::{GlobalRecord, MetricProgressionSummary, StepVariation, StepVariationAnalyzer};
