// ABOUTME: Group and personal dashboard reports composed from the analytics engine
// ABOUTME: Applies the view filters, then assembles KPIs, rankings, series, and per-metric detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard composition
//!
//! Group KPIs, the average series, and the summary table always cover
//! everyone and both record types within the date range, so goals keep their
//! targets. The person and record type selection narrows only the records
//! and step-variation highlights. The personal view ignores the selection for
//! its data and uses the record types only to decide which chart columns are
//! shown.

use challenge_core::errors::{AppError, AppResult};
use challenge_core::models::{
    list_metrics, person_gage, MeasurementRow, MetricKey, MetricUnit, PersonMeta, RecordType,
};
use challenge_intelligence::{
    build_metric_charts, interpolate_forecast, project_next_value, AnalyticsConfig,
    EvolutionEngine, GlobalRecord, GroupAggregator, GroupKpis, MetricChart,
    MetricProgressionSummary, MomentumBadge, PersonEvolutionSummary, ProgressBadge, RowFilter,
    SeriesPoint, StepVariation, StepVariationAnalyzer,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::snapshot::{people, Snapshot};

/// Filters selected in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilters {
    /// Selected people, empty for everyone
    pub people: Vec<String>,
    /// Selected record types
    pub record_types: Vec<RecordType>,
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            record_types: RecordType::ALL.to_vec(),
            from: None,
            to: None,
        }
    }
}

impl DashboardFilters {
    fn date_filter(&self) -> RowFilter {
        RowFilter {
            from: self.from.clone(),
            to: self.to.clone(),
            ..RowFilter::default()
        }
    }

    /// Every row within the date range, for group KPIs and series
    #[must_use]
    pub fn group_scope(&self, rows: &[MeasurementRow]) -> Vec<MeasurementRow> {
        self.date_filter().apply(rows)
    }

    /// Rows matching every filter, for records and step-variation highlights
    #[must_use]
    pub fn selection_scope(&self, rows: &[MeasurementRow]) -> Vec<MeasurementRow> {
        self.date_filter()
            .with_people(self.people.iter().cloned())
            .with_record_types(&self.record_types)
            .apply(rows)
    }

    /// Every row of one person within the date range
    #[must_use]
    pub fn personal_scope(&self, rows: &[MeasurementRow], person: &str) -> Vec<MeasurementRow> {
        self.date_filter().with_person(person).apply(rows)
    }

    /// Realised rows of one person within the date range, sorted by date
    #[must_use]
    pub fn personal_realisation_scope(
        &self,
        rows: &[MeasurementRow],
        person: &str,
    ) -> Vec<MeasurementRow> {
        let mut scoped = self
            .date_filter()
            .with_person(person)
            .with_record_types(&[RecordType::Realisation])
            .apply(rows);
        scoped.sort_by(|a, b| a.date.cmp(&b.date));
        scoped
    }
}

/// Everything shown on the group page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Headline KPIs
    pub kpis: GroupKpis,
    /// Group average evolution series
    pub average_series: Vec<SeriesPoint>,
    /// Per-person score, momentum, and badge
    pub summaries: Vec<PersonEvolutionSummary>,
    /// Best absolute reading per metric
    pub records: Vec<GlobalRecord>,
    /// Best and worst transition per metric
    pub best_and_worst: Vec<MetricProgressionSummary>,
    /// Largest improvement over the whole history
    pub best_global_progression: Option<StepVariation>,
    /// Largest improvement among latest transitions
    pub best_recent_progression: Option<StepVariation>,
    /// Largest regression over the whole history
    pub worst_regression: Option<StepVariation>,
}

/// Per-metric block of the personal page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDetail {
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Metric display label
    pub metric_label: String,
    /// Metric display unit
    pub unit: MetricUnit,
    /// Latest realised value in display units
    pub latest: Option<f64>,
    /// First-to-last progression
    pub total_progress_pct: Option<f64>,
    /// Progression over the latest transition
    pub recent_progress_pct: Option<f64>,
    /// Projected next raw value from the linear trend
    pub projection: Option<f64>,
    /// Badge earned by the total progression
    pub badge: Option<ProgressBadge>,
    /// Chart series
    pub chart: MetricChart,
}

/// Everything shown on the personal page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalReport {
    /// Person identifier
    pub person: String,
    /// Forfeit promised by the person, if any
    pub gage: Option<String>,
    /// Evolution score
    pub score: f64,
    /// Difference between the last and first point of the series
    pub total_variation: f64,
    /// Recent momentum
    pub recent_momentum: f64,
    /// Momentum badge
    pub badge: MomentumBadge,
    /// Labels of the most regressed metrics
    pub improvement_zones: Vec<String>,
    /// Personal evolution series
    pub series: Vec<SeriesPoint>,
    /// Per-metric detail
    pub metrics: Vec<MetricDetail>,
}

/// Forecast value of one metric at one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Person identifier
    pub person: String,
    /// Metric identifier
    pub metric_key: MetricKey,
    /// Queried date
    pub date: String,
    /// On-track raw value, `None` outside the forecast window
    pub value: Option<f64>,
}

/// Composes dashboard reports with one set of analytics thresholds
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: AnalyticsConfig,
    engine: EvolutionEngine,
    aggregator: GroupAggregator,
}

impl Dashboard {
    /// Create a dashboard with the given thresholds
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            engine: EvolutionEngine::with_config(config.clone()),
            aggregator: GroupAggregator::with_config(config.clone()),
            config,
        }
    }

    /// Group page over the filtered rows
    #[must_use]
    pub fn group_report(&self, rows: &[MeasurementRow], filters: &DashboardFilters) -> GroupReport {
        let group = filters.group_scope(rows);
        let selected = filters.selection_scope(rows);
        info!(
            rows = group.len(),
            selected = selected.len(),
            "Building group report"
        );

        GroupReport {
            kpis: self.aggregator.group_kpis(&group),
            average_series: self.aggregator.group_average_series(&group),
            summaries: self.engine.person_summaries(&group),
            records: StepVariationAnalyzer::global_records(&selected),
            best_and_worst: StepVariationAnalyzer::best_and_worst_by_metric(&selected),
            best_global_progression: StepVariationAnalyzer::best_global_progression(&selected),
            best_recent_progression: StepVariationAnalyzer::best_recent_progression(&selected),
            worst_regression: StepVariationAnalyzer::worst_regression(&selected),
        }
    }

    /// Personal page of one person
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the person has no row in the snapshot
    pub fn personal_report(
        &self,
        snapshot: &Snapshot,
        filters: &DashboardFilters,
        person: &str,
    ) -> AppResult<PersonalReport> {
        if !snapshot.rows.iter().any(|row| row.person == person) {
            return Err(AppError::not_found(format!("Person '{person}'")));
        }
        Ok(self.build_personal_report(
            &snapshot.rows,
            &snapshot.people_meta,
            filters,
            person,
        ))
    }

    /// Personal pages of everyone in the selection, in name order
    #[must_use]
    pub fn personal_reports(
        &self,
        snapshot: &Snapshot,
        filters: &DashboardFilters,
    ) -> Vec<PersonalReport> {
        let names = people(&filters.selection_scope(&snapshot.rows));
        info!(people = names.len(), "Building personal reports");

        names
            .par_iter()
            .map(|person| {
                self.build_personal_report(&snapshot.rows, &snapshot.people_meta, filters, person)
            })
            .collect()
    }

    /// On-track value of a metric at a date for one person
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown metric key or a person without rows
    pub fn forecast(
        &self,
        rows: &[MeasurementRow],
        person: &str,
        metric: &str,
        date: &str,
    ) -> AppResult<ForecastReport> {
        let metric_key: MetricKey = metric.parse()?;
        let scoped = RowFilter::new().with_person(person).apply(rows);
        if scoped.is_empty() {
            return Err(AppError::not_found(format!("Person '{person}'")));
        }

        Ok(ForecastReport {
            person: person.to_owned(),
            metric_key,
            date: date.to_owned(),
            value: interpolate_forecast(&scoped, metric_key, date),
        })
    }

    fn build_personal_report(
        &self,
        rows: &[MeasurementRow],
        people_meta: &[PersonMeta],
        filters: &DashboardFilters,
        person: &str,
    ) -> PersonalReport {
        let all_types = filters.personal_scope(rows, person);
        let realised = filters.personal_realisation_scope(rows, person);
        let charts = build_metric_charts(&all_types, &filters.record_types);

        let recent_momentum = self.engine.recent_momentum(&realised, person);
        let metrics = list_metrics()
            .iter()
            .zip(charts)
            .map(|(metric, chart)| {
                let progression = EvolutionEngine::metric_progression(&realised, person, metric.key);
                MetricDetail {
                    metric_key: metric.key,
                    metric_label: metric.label.to_owned(),
                    unit: metric.unit,
                    latest: realised
                        .iter()
                        .rev()
                        .find_map(|row| row.value(metric.key))
                        .map(|value| metric.to_display_value(value)),
                    total_progress_pct: progression.total,
                    recent_progress_pct: progression.recent,
                    projection: project_next_value(&realised, metric.key),
                    badge: ProgressBadge::classify(progression.total, &self.config),
                    chart,
                }
            })
            .collect();

        debug!(person, rows = realised.len(), "Built personal report");

        PersonalReport {
            person: person.to_owned(),
            gage: person_gage(people_meta, person).map(str::to_owned),
            score: self.engine.evolution_score(&realised, person),
            total_variation: self.engine.total_variation(&realised, person),
            recent_momentum,
            badge: self.engine.badge(recent_momentum),
            improvement_zones: self.engine.improvement_zones(&realised, person),
            series: self.engine.person_evolution_series(&realised, person),
            metrics,
        }
    }
}
