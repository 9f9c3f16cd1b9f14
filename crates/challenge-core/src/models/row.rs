// ABOUTME: Measurement row model for realised and forecast challenge results
// ABOUTME: Typed nullable metric values keyed by the static metric registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::metric::MetricKey;

/// Kind of measurement row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Achieved, measured performance
    Realisation,
    /// Forecast or target performance
    Previsionnel,
}

impl RecordType {
    /// Both record types, in display order
    pub const ALL: [Self; 2] = [Self::Realisation, Self::Previsionnel];

    /// Snapshot key of this record type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Realisation => "realisation",
            Self::Previsionnel => "previsionnel",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One optional value per tracked metric; `None` means "not recorded"
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricValues {
    /// Dips
    pub dips: Option<f64>,
    /// Push-ups
    pub pompes: Option<f64>,
    /// Pronated pull-ups
    pub traction_pro: Option<f64>,
    /// Supinated pull-ups
    pub traction_sup: Option<f64>,
    /// Plank hold in seconds
    pub planche_sec: Option<f64>,
    /// Superman hold in seconds
    pub superman_sec: Option<f64>,
    /// 100 m sprint in seconds
    pub sprint_100m_sec: Option<f64>,
    /// 5 km run in seconds
    pub run_5km_sec: Option<f64>,
}

impl MetricValues {
    /// Value recorded for a metric
    #[must_use]
    pub const fn get(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Dips => self.dips,
            MetricKey::PushUps => self.pompes,
            MetricKey::PronatedPullUps => self.traction_pro,
            MetricKey::SupinatedPullUps => self.traction_sup,
            MetricKey::Plank => self.planche_sec,
            MetricKey::Superman => self.superman_sec,
            MetricKey::Sprint100m => self.sprint_100m_sec,
            MetricKey::Run5km => self.run_5km_sec,
        }
    }

    /// Set or clear the value of a metric
    pub fn set(&mut self, key: MetricKey, value: Option<f64>) {
        let slot = match key {
            MetricKey::Dips => &mut self.dips,
            MetricKey::PushUps => &mut self.pompes,
            MetricKey::PronatedPullUps => &mut self.traction_pro,
            MetricKey::SupinatedPullUps => &mut self.traction_sup,
            MetricKey::Plank => &mut self.planche_sec,
            MetricKey::Superman => &mut self.superman_sec,
            MetricKey::Sprint100m => &mut self.sprint_100m_sec,
            MetricKey::Run5km => &mut self.run_5km_sec,
        };
        *slot = value;
    }
}

/// A dated measurement of one person
///
/// Rows are immutable facts. Serialized with the snapshot keys
/// (`personne`, `date`, `type`, then one key per metric).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRow {
    /// Person identifier
    #[serde(rename = "personne")]
    pub person: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    /// Realised or forecast
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Metric values
    #[serde(flatten)]
    pub values: MetricValues,
}

impl MeasurementRow {
    /// Create a row with no recorded values
    #[must_use]
    pub fn new(person: impl Into<String>, date: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            person: person.into(),
            date: date.into(),
            record_type,
            values: MetricValues::default(),
        }
    }

    /// Shorthand for a realised row
    #[must_use]
    pub fn realisation(person: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(person, date, RecordType::Realisation)
    }

    /// Shorthand for a forecast row
    #[must_use]
    pub fn previsionnel(person: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(person, date, RecordType::Previsionnel)
    }

    /// Builder-style value assignment
    #[must_use]
    pub fn with_value(mut self, key: MetricKey, value: f64) -> Self {
        self.values.set(key, Some(value));
        self
    }

    /// Value recorded for a metric
    #[must_use]
    pub const fn value(&self, key: MetricKey) -> Option<f64> {
        self.values.get(key)
    }

    /// Whether this row is a realised measurement
    #[must_use]
    pub fn is_realisation(&self) -> bool {
        self.record_type == RecordType::Realisation
    }
}
