// ABOUTME: Evolution score, recent momentum, badges, and improvement zones per person
// ABOUTME: Builds the as-of evolution series by walking dates with a monotonic row cursor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Evolution score engine
//!
//! The evolution score of a person is the mean of the first-to-last
//! progression of every metric with at least two realised readings, clamped
//! and rounded to one decimal. Momentum looks only at the latest transition.

use challenge_core::constants::precision::SCORE_DECIMALS;
use challenge_core::models::{list_metrics, MeasurementRow, MetricKey, RecordType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::progression::{mean, progression_between, progression_pct, round_to};
use crate::series::{distinct_dates, index_by_person, metric_values, person_realisation_rows};

/// Progression figures of one metric for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    /// Metric identifier
    pub metric_key: MetricKey,
    /// First present reading
    pub first: f64,
    /// Last present reading
    pub last: f64,
    /// Second-to-last present reading
    pub previous: f64,
    /// First-to-last progression, 0 from a zero baseline
    pub progress_pct: f64,
    /// Previous-to-last progression, 0 from a zero baseline
    pub recent_pct: f64,
}

/// Stats of every metric with at least two present readings in `rows`
///
/// `rows` must already be in chronological order. A zero baseline counts as
/// no progression so the metric still weighs in every average.
#[must_use]
pub fn metric_stats(rows: &[&MeasurementRow]) -> Vec<MetricStat> {
    list_metrics()
        .iter()
        .filter_map(|metric| {
            let values = metric_values(rows, metric.key);
            let first = *values.first()?;
            let [.., previous, last] = values.as_slice() else {
                return None;
            };
            Some(MetricStat {
                metric_key: metric.key,
                first,
                last: *last,
                previous: *previous,
                progress_pct: progression_between(first, *last, metric.lower_is_better)
                    .unwrap_or(0.0),
                recent_pct: progression_between(*previous, *last, metric.lower_is_better)
                    .unwrap_or(0.0),
            })
        })
        .collect()
}

/// Momentum classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumBadge {
    /// Momentum above the threshold
    Acceleration,
    /// Momentum within the threshold band
    Stable,
    /// Momentum below the negated threshold
    #[serde(rename = "Adjustment phase")]
    AdjustmentPhase,
}

impl MomentumBadge {
    /// Classify with the default threshold of 2%
    #[must_use]
    pub fn from_momentum(momentum: f64) -> Self {
        Self::classify(momentum, AnalyticsConfig::default().momentum_badge_threshold)
    }

    /// Classify with an explicit threshold; the boundaries themselves are stable
    #[must_use]
    pub fn classify(momentum: f64, threshold: f64) -> Self {
        if momentum > threshold {
            Self::Acceleration
        } else if momentum < -threshold {
            Self::AdjustmentPhase
        } else {
            Self::Stable
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acceleration => "Acceleration",
            Self::Stable => "Stable",
            Self::AdjustmentPhase => "Adjustment phase",
        }
    }
}

/// A dated score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// ISO date
    pub date: String,
    /// Score at that date
    pub score: f64,
}

/// Summary row of the group table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEvolutionSummary {
    /// Person identifier
    pub person: String,
    /// Evolution score (0 when not computable)
    pub score: f64,
    /// Recent momentum
    pub recent_momentum: f64,
    /// Momentum badge
    pub badge: MomentumBadge,
}

/// Total and latest progression of one metric for the detail view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProgression {
    /// Metric identifier
    pub metric_key: MetricKey,
    /// First-to-last progression
    pub total: Option<f64>,
    /// Progression over the latest transition
    pub recent: Option<f64>,
}

/// Evolution score engine with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct EvolutionEngine {
    config: AnalyticsConfig,
}

impl EvolutionEngine {
    /// Create an engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom thresholds
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Evolution score over chronological realised rows, `None` if no metric qualifies
    #[must_use]
    pub fn score_from_rows(&self, rows: &[&MeasurementRow]) -> Option<f64> {
        let progressions: Vec<f64> = metric_stats(rows)
            .iter()
            .map(|stat| stat.progress_pct)
            .collect();
        let average = mean(&progressions)?;
        let bound = self.config.score_bound;
        Some(round_to(average.clamp(-bound, bound), SCORE_DECIMALS))
    }

    /// Evolution score of a person, 0 when not computable
    #[must_use]
    pub fn evolution_score(&self, rows: &[MeasurementRow], person: &str) -> f64 {
        let scoped = person_realisation_rows(rows, person);
        self.score_from_rows(&scoped).unwrap_or(0.0)
    }

    /// Mean progression over the latest transition, restricted to metrics
    /// present on the latest row and on some earlier row
    #[must_use]
    pub fn momentum_from_rows(rows: &[&MeasurementRow]) -> f64 {
        let Some((latest_row, earlier)) = rows.split_last() else {
            return 0.0;
        };

        let recent: Vec<f64> = list_metrics()
            .iter()
            .filter_map(|metric| {
                let latest = latest_row.value(metric.key)?;
                let previous = earlier.iter().rev().find_map(|row| row.value(metric.key))?;
                Some(progression_between(previous, latest, metric.lower_is_better).unwrap_or(0.0))
            })
            .collect();

        mean(&recent).map_or(0.0, |average| round_to(average, SCORE_DECIMALS))
    }

    /// Recent momentum of a person
    #[must_use]
    pub fn recent_momentum(&self, rows: &[MeasurementRow], person: &str) -> f64 {
        let scoped = person_realisation_rows(rows, person);
        Self::momentum_from_rows(&scoped)
    }

    /// Momentum badge with the configured threshold
    #[must_use]
    pub fn badge(&self, momentum: f64) -> MomentumBadge {
        MomentumBadge::classify(momentum, self.config.momentum_badge_threshold)
    }

    /// Labels of the most regressed metrics, worst first
    #[must_use]
    pub fn improvement_zones(&self, rows: &[MeasurementRow], person: &str) -> Vec<String> {
        let scoped = person_realisation_rows(rows, person);
        let mut regressions: Vec<(MetricKey, f64)> = metric_stats(&scoped)
            .into_iter()
            .map(|stat| (stat.metric_key, stat.progress_pct))
            .filter(|(_, pct)| *pct < 0.0)
            .collect();
        regressions.sort_by(|a, b| a.1.total_cmp(&b.1));

        regressions
            .into_iter()
            .take(self.config.max_improvement_zones)
            .map(|(key, _)| key.metric().label.to_owned())
            .collect()
    }

    /// As-of evolution series over chronological realised rows
    ///
    /// At each distinct date the score is recomputed over every row up to and
    /// including that date; dates without a computable score are skipped.
    #[must_use]
    pub fn series_from_rows(&self, rows: &[&MeasurementRow]) -> Vec<SeriesPoint> {
        let dates = distinct_dates(rows.iter().copied());
        let mut series = Vec::new();
        let mut cursor = 0;

        for date in dates {
            while cursor < rows.len() && rows[cursor].date.as_str() <= date {
                cursor += 1;
            }
            if let Some(score) = self.score_from_rows(&rows[..cursor]) {
                series.push(SeriesPoint {
                    date: date.to_owned(),
                    score,
                });
            }
        }

        series
    }

    /// As-of evolution series of a person
    #[must_use]
    pub fn person_evolution_series(&self, rows: &[MeasurementRow], person: &str) -> Vec<SeriesPoint> {
        let scoped = person_realisation_rows(rows, person);
        self.series_from_rows(&scoped)
    }

    /// Difference between the last and first point of the personal series
    #[must_use]
    pub fn total_variation(&self, rows: &[MeasurementRow], person: &str) -> f64 {
        match self.person_evolution_series(rows, person).as_slice() {
            [first, .., last] => round_to(last.score - first.score, SCORE_DECIMALS),
            _ => 0.0,
        }
    }

    /// Score, momentum, and badge of every person with realised rows, by name
    #[must_use]
    pub fn person_summaries(&self, rows: &[MeasurementRow]) -> Vec<PersonEvolutionSummary> {
        let mut people = index_by_person(rows, RecordType::Realisation);
        people.sort_by(|a, b| a.person.cmp(b.person));

        let summaries: Vec<PersonEvolutionSummary> = people
            .iter()
            .map(|group| {
                let recent_momentum = Self::momentum_from_rows(&group.rows);
                PersonEvolutionSummary {
                    person: group.person.to_owned(),
                    score: self.score_from_rows(&group.rows).unwrap_or(0.0),
                    recent_momentum,
                    badge: self.badge(recent_momentum),
                }
            })
            .collect();

        debug!(people = summaries.len(), "Computed person evolution summaries");
        summaries
    }

    /// Total and latest progression of one metric for a person
    #[must_use]
    pub fn metric_progression(
        rows: &[MeasurementRow],
        person: &str,
        metric: MetricKey,
    ) -> MetricProgression {
        let scoped = person_realisation_rows(rows, person);
        let values: Vec<Option<f64>> = scoped.iter().map(|row| row.value(metric)).collect();
        let lower_is_better = metric.metric().lower_is_better;
        let present = metric_values(&scoped, metric);

        let recent = match present.as_slice() {
            [.., previous, last] => progression_between(*previous, *last, lower_is_better),
            _ => None,
        };

        MetricProgression {
            metric_key: metric,
            total: progression_pct(&values, lower_is_better),
            recent,
        }
    }
}
