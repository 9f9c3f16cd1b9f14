// ABOUTME: Consecutive-reading deltas per person and metric with ranking helpers
// ABOUTME: Finds best and worst transitions, latest transitions, and all-time records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Step variation analysis
//!
//! A step variation is the delta between two chronologically consecutive
//! readings of one metric for one person, sign-corrected so that a positive
//! delta is always an improvement. Rankings keep the first variation seen on
//! ties.

use challenge_core::models::{list_metrics, Metric, MetricKey, MetricUnit, MeasurementRow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progression::directional_delta;
use crate::series::{metric_series_by_person, DatedValue};

/// Delta between two consecutive readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepVariation {
    /// Person identifier
    pub person: String,
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Metric display label
    pub metric_label: String,
    /// Metric display unit
    pub unit: MetricUnit,
    /// Whether lower values are better for this metric
    pub lower_is_better: bool,
    /// Date of the earlier reading
    pub from_date: String,
    /// Date of the later reading
    pub to_date: String,
    /// Earlier raw value
    pub from_value: f64,
    /// Later raw value
    pub to_value: f64,
    /// Polarity-corrected change, positive is an improvement
    pub delta: f64,
}

impl StepVariation {
    fn between(metric: &Metric, person: &str, from: DatedValue<'_>, to: DatedValue<'_>) -> Self {
        Self {
            person: person.to_owned(),
            metric_key: metric.key,
            metric_label: metric.label.to_owned(),
            unit: metric.unit,
            lower_is_better: metric.lower_is_better,
            from_date: from.date.to_owned(),
            to_date: to.date.to_owned(),
            from_value: from.value,
            to_value: to.value,
            delta: directional_delta(from.value, to.value, metric.lower_is_better),
        }
    }
}

/// Best absolute reading of a metric across everyone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalRecord {
    /// Record holder
    pub person: String,
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Metric display label
    pub metric_label: String,
    /// Metric display unit
    pub unit: MetricUnit,
    /// Raw record value
    pub value: f64,
    /// Date of the record
    pub date: String,
}

/// Best and worst transition of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricProgressionSummary {
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Metric display label
    pub metric_label: String,
    /// Metric display unit
    pub unit: MetricUnit,
    /// Largest delta, `None` without variations
    pub best: Option<StepVariation>,
    /// Smallest delta, `None` without variations
    pub worst: Option<StepVariation>,
}

/// Step variation analyzer over realised rows
pub struct StepVariationAnalyzer;

impl StepVariationAnalyzer {
    /// Every consecutive transition, metric by metric in registry order
    #[must_use]
    pub fn all_step_variations(rows: &[MeasurementRow]) -> Vec<StepVariation> {
        let mut output = Vec::new();

        for metric in list_metrics() {
            for (person, values) in metric_series_by_person(rows, metric.key) {
                output.extend(
                    values
                        .windows(2)
                        .map(|pair| StepVariation::between(metric, person, pair[0], pair[1])),
                );
            }
        }

        debug!(variations = output.len(), "Computed step variations");
        output
    }

    /// Most recent transition per person and metric
    #[must_use]
    pub fn last_step_variations(rows: &[MeasurementRow]) -> Vec<StepVariation> {
        let mut output = Vec::new();

        for metric in list_metrics() {
            for (person, values) in metric_series_by_person(rows, metric.key) {
                if let [.., from, to] = values.as_slice() {
                    output.push(StepVariation::between(metric, person, *from, *to));
                }
            }
        }

        output
    }

    /// Largest improvement over the full history
    #[must_use]
    pub fn best_global_progression(rows: &[MeasurementRow]) -> Option<StepVariation> {
        max_by_delta(Self::all_step_variations(rows))
    }

    /// Largest improvement among the latest transitions
    #[must_use]
    pub fn best_recent_progression(rows: &[MeasurementRow]) -> Option<StepVariation> {
        max_by_delta(Self::last_step_variations(rows))
    }

    /// Largest regression over the full history
    #[must_use]
    pub fn worst_regression(rows: &[MeasurementRow]) -> Option<StepVariation> {
        min_by_delta(Self::all_step_variations(rows))
    }

    /// Best absolute reading per metric, respecting polarity
    ///
    /// Metrics nobody recorded are omitted. Ties keep the first row in input order.
    #[must_use]
    pub fn global_records(rows: &[MeasurementRow]) -> Vec<GlobalRecord> {
        let realised: Vec<&MeasurementRow> = rows.iter().filter(|row| row.is_realisation()).collect();

        list_metrics()
            .iter()
            .filter_map(|metric| {
                let (row, value) = realised
                    .iter()
                    .filter_map(|row| row.value(metric.key).map(|value| (*row, value)))
                    .reduce(|best, current| {
                        let better = if metric.lower_is_better {
                            current.1 < best.1
                        } else {
                            current.1 > best.1
                        };
                        if better {
                            current
                        } else {
                            best
                        }
                    })?;

                Some(GlobalRecord {
                    person: row.person.clone(),
                    metric_key: metric.key,
                    metric_label: metric.label.to_owned(),
                    unit: metric.unit,
                    value,
                    date: row.date.clone(),
                })
            })
            .collect()
    }

    /// Best and worst transition of every metric
    #[must_use]
    pub fn best_and_worst_by_metric(rows: &[MeasurementRow]) -> Vec<MetricProgressionSummary> {
        let all = Self::all_step_variations(rows);

        list_metrics()
            .iter()
            .map(|metric| {
                let scoped: Vec<StepVariation> = all
                    .iter()
                    .filter(|variation| variation.metric_key == metric.key)
                    .cloned()
                    .collect();

                MetricProgressionSummary {
                    metric_key: metric.key,
                    metric_label: metric.label.to_owned(),
                    unit: metric.unit,
                    best: max_by_delta(scoped.iter().cloned()),
                    worst: min_by_delta(scoped),
                }
            })
            .collect()
    }
}

/// Replace only on strict improvement so the first maximum wins
fn max_by_delta(variations: impl IntoIterator<Item = StepVariation>) -> Option<StepVariation> {
    variations
        .into_iter()
        .reduce(|best, current| if current.delta > best.delta { current } else { best })
}

fn min_by_delta(variations: impl IntoIterator<Item = StepVariation>) -> Option<StepVariation> {
    variations
        .into_iter()
        .reduce(|worst, current| if current.delta < worst.delta { current } else { worst })
}
