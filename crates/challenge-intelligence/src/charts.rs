// ABOUTME: Per-metric chart series for one person, in display units
// ABOUTME: Merges realised readings with the interpolated forecast line on shared dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use challenge_core::models::{list_metrics, MeasurementRow, MetricKey, MetricUnit, RecordType};
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastLine;
use crate::series::{distinct_dates, sort_by_date};

/// One date of a metric chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// ISO date
    pub date: String,
    /// Realised value in display units
    pub realisation: Option<f64>,
    /// On-track forecast value in display units
    pub previsionnel: Option<f64>,
}

/// Chart series of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChart {
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Metric display label
    pub metric_label: String,
    /// Metric display unit
    pub unit: MetricUnit,
    /// Points from the first realised reading onwards
    pub points: Vec<ChartPoint>,
}

/// Chart series of every metric for one person's rows
///
/// Columns of record types absent from `visible` are left empty. Leading
/// dates before the first realised value are trimmed, or before the first
/// non-empty point when the person has no realised value for the metric.
#[must_use]
pub fn build_metric_charts(rows: &[MeasurementRow], visible: &[RecordType]) -> Vec<MetricChart> {
    let dates = distinct_dates(rows);
    let mut realised: Vec<&MeasurementRow> = rows.iter().filter(|row| row.is_realisation()).collect();
    sort_by_date(&mut realised);

    let show_realisation = visible.contains(&RecordType::Realisation);
    let show_forecast = visible.contains(&RecordType::Previsionnel);

    list_metrics()
        .iter()
        .map(|metric| {
            let line = ForecastLine::for_metric(rows, metric.key)
                .map(|line| line.map_values(|value| metric.to_display_value(value)));

            let points: Vec<ChartPoint> = dates
                .iter()
                .map(|date| {
                    let realisation = realised
                        .iter()
                        .find(|row| row.date == *date)
                        .and_then(|row| row.value(metric.key))
                        .map(|value| metric.to_display_value(value));
                    let previsionnel = line.as_ref().and_then(|line| line.value_at(date));

                    ChartPoint {
                        date: (*date).to_owned(),
                        realisation: realisation.filter(|_| show_realisation),
                        previsionnel: previsionnel.filter(|_| show_forecast),
                    }
                })
                .collect();

            let first_kept = points
                .iter()
                .position(|point| point.realisation.is_some())
                .or_else(|| {
                    points
                        .iter()
                        .position(|point| point.realisation.is_some() || point.previsionnel.is_some())
                });

            MetricChart {
                metric_key: metric.key,
                metric_label: metric.label.to_owned(),
                unit: metric.unit,
                points: first_kept.map_or_else(Vec::new, |start| points[start..].to_vec()),
            }
        })
        .collect()
}
