// ABOUTME: Group-level KPIs and the carried-forward group average evolution series
// ABOUTME: Rolls per-person evolution results up across everyone in the scoped rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use challenge_core::constants::precision::SCORE_DECIMALS;
use challenge_core::models::{list_metrics, MeasurementRow, RecordType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::evolution::{metric_stats, EvolutionEngine, SeriesPoint};
use crate::progression::{mean, round_to};
use crate::series::{distinct_dates, index_by_person, latest_value};

/// Headline figures of the group view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupKpis {
    /// (person, metric) pairs whose latest transition improved
    pub positive_recent_count: usize,
    /// Mean first-to-last progression over every (person, metric) pair
    pub average_progression_pct: f64,
    /// (person, metric) pairs whose latest reading reached the latest target
    pub goals_reached: usize,
}

/// Aggregates evolution results across people
#[derive(Debug, Clone, Default)]
pub struct GroupAggregator {
    engine: EvolutionEngine,
}

impl GroupAggregator {
    /// Create an aggregator with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with custom thresholds
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self {
            engine: EvolutionEngine::with_config(config),
        }
    }

    /// Group KPIs over realised and forecast rows
    ///
    /// A goal counts only when both the latest realised value and the latest
    /// target are present; a missing side is neither a hit nor a miss.
    #[must_use]
    pub fn group_kpis(&self, rows: &[MeasurementRow]) -> GroupKpis {
        let realised = index_by_person(rows, RecordType::Realisation);
        let forecasts = index_by_person(rows, RecordType::Previsionnel);

        let mut positive_recent_count = 0;
        let mut progressions = Vec::new();
        let mut goals_reached = 0;

        for group in &realised {
            for stat in metric_stats(&group.rows) {
                progressions.push(stat.progress_pct);
                if stat.recent_pct > 0.0 {
                    positive_recent_count += 1;
                }
            }

            let targets = forecasts
                .iter()
                .find(|forecast| forecast.person == group.person)
                .map(|forecast| forecast.rows.as_slice())
                .unwrap_or_default();

            goals_reached += list_metrics()
                .iter()
                .filter(|metric| {
                    let (Some(latest), Some(target)) = (
                        latest_value(&group.rows, metric.key),
                        latest_value(targets, metric.key),
                    ) else {
                        return false;
                    };
                    if metric.lower_is_better {
                        latest <= target
                    } else {
                        latest >= target
                    }
                })
                .count();
        }

        let average_progression_pct =
            mean(&progressions).map_or(0.0, |average| round_to(average, SCORE_DECIMALS));

        debug!(
            people = realised.len(),
            positive_recent_count, goals_reached, "Computed group KPIs"
        );

        GroupKpis {
            positive_recent_count,
            average_progression_pct,
            goals_reached,
        }
    }

    /// Group average evolution series over the union of realised dates
    ///
    /// Each person contributes their latest series point on or before the
    /// date (last observation carried forward) and nothing before their first
    /// scorable date. Dates where nobody has scored yet average to 0.
    #[must_use]
    pub fn group_average_series(&self, rows: &[MeasurementRow]) -> Vec<SeriesPoint> {
        let dates = distinct_dates(rows.iter().filter(|row| row.is_realisation()));
        let person_series: Vec<Vec<SeriesPoint>> = index_by_person(rows, RecordType::Realisation)
            .iter()
            .map(|group| self.engine.series_from_rows(&group.rows))
            .collect();
        let mut cursors = vec![0_usize; person_series.len()];

        dates
            .into_iter()
            .map(|date| {
                let mut scores = Vec::with_capacity(person_series.len());
                for (series, cursor) in person_series.iter().zip(cursors.iter_mut()) {
                    while *cursor < series.len() && series[*cursor].date.as_str() <= date {
                        *cursor += 1;
                    }
                    if *cursor > 0 {
                        scores.push(series[*cursor - 1].score);
                    }
                }

                SeriesPoint {
                    date: date.to_owned(),
                    score: mean(&scores).map_or(0.0, |average| round_to(average, SCORE_DECIMALS)),
                }
            })
            .collect()
    }
}
