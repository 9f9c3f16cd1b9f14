// ABOUTME: Core data models for challenge progress analytics
// ABOUTME: Re-exports the metric registry, measurement rows, and participant metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Metric` / `MetricKey`: static registry of the eight tracked metrics
//! - `MeasurementRow`: one dated realised or forecast measurement
//! - `PersonMeta`: participant metadata (forfeit)

mod metric;
mod person;
mod row;

pub use metric::{format_metric, list_metrics, lookup, Metric, MetricKey, MetricUnit, METRICS};
pub use person::{person_gage, PersonMeta};
pub use row::{MeasurementRow, MetricValues, RecordType};
