// ABOUTME: Linear forecast line between the first realised reading and the final target
// ABOUTME: Interpolates the on-track value of a metric at any date within that window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day counts are small

use challenge_core::constants::dates::ROW_DATE_FORMAT;
use challenge_core::constants::precision::FORECAST_DECIMALS;
use challenge_core::models::{MeasurementRow, MetricKey, RecordType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progression::round_to;
use crate::series::sort_by_date;

/// Straight line from a baseline reading to a forecast target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastLine {
    /// Metric the line belongs to
    pub metric_key: MetricKey,
    /// Date of the first realised reading
    pub baseline_date: NaiveDate,
    /// First realised value
    pub baseline_value: f64,
    /// Date of the last forecast reading
    pub target_date: NaiveDate,
    /// Last forecast value
    pub target_value: f64,
}

impl ForecastLine {
    /// Build the line from one person's realised and forecast rows
    ///
    /// Returns `None` when either endpoint is missing or has an unparseable date.
    #[must_use]
    pub fn for_metric(rows: &[MeasurementRow], metric: MetricKey) -> Option<Self> {
        let mut sorted: Vec<&MeasurementRow> = rows.iter().collect();
        sort_by_date(&mut sorted);

        let target = sorted
            .iter()
            .rev()
            .filter(|row| row.record_type == RecordType::Previsionnel)
            .find_map(|row| row.value(metric).map(|value| (row.date.as_str(), value)));
        let baseline = sorted
            .iter()
            .filter(|row| row.record_type == RecordType::Realisation)
            .find_map(|row| row.value(metric).map(|value| (row.date.as_str(), value)));

        let ((baseline_date, baseline_value), (target_date, target_value)) = (baseline?, target?);
        let line = Self {
            metric_key: metric,
            baseline_date: parse_row_date(baseline_date)?,
            baseline_value,
            target_date: parse_row_date(target_date)?,
            target_value,
        };
        debug!(metric = %metric, baseline = %line.baseline_date, target = %line.target_date, "Built forecast line");
        Some(line)
    }

    /// Apply a transform to both endpoint values (e.g. display unit conversion)
    #[must_use]
    pub fn map_values(self, transform: impl Fn(f64) -> f64) -> Self {
        Self {
            baseline_value: transform(self.baseline_value),
            target_value: transform(self.target_value),
            ..self
        }
    }

    /// Interpolated value at `date`, rounded to three decimals
    ///
    /// Dates outside `[baseline, target]` give `None`. When the target is not
    /// after the baseline, only the target date itself yields the target value.
    #[must_use]
    pub fn value_at(&self, date: &str) -> Option<f64> {
        let query = parse_row_date(date)?;

        if self.target_date <= self.baseline_date {
            return (query == self.target_date).then_some(self.target_value);
        }
        if query < self.baseline_date || query > self.target_date {
            return None;
        }

        let elapsed = (query - self.baseline_date).num_days() as f64;
        let span = (self.target_date - self.baseline_date).num_days() as f64;
        let t = elapsed / span;
        Some(round_to(
            (self.target_value - self.baseline_value).mul_add(t, self.baseline_value),
            FORECAST_DECIMALS,
        ))
    }
}

/// On-track value of a metric at `date` for one person's rows
#[must_use]
pub fn interpolate_forecast(rows: &[MeasurementRow], metric: MetricKey, date: &str) -> Option<f64> {
    ForecastLine::for_metric(rows, metric)?.value_at(date)
}

fn parse_row_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, ROW_DATE_FORMAT).ok()
}
