// ABOUTME: Shared measurement fixtures for challenge-intelligence integration tests
// ABOUTME: Builds a two-person snapshot with realised and forecast rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code)]

use challenge_core::models::{MeasurementRow, MetricKey};

/// Float comparison used throughout the analytics tests
pub const TOLERANCE: f64 = 1e-6;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub fn realisation(person: &str, date: &str, values: &[(MetricKey, f64)]) -> MeasurementRow {
    values
        .iter()
        .fold(MeasurementRow::realisation(person, date), |row, (key, value)| {
            row.with_value(*key, *value)
        })
}

pub fn previsionnel(person: &str, date: &str, values: &[(MetricKey, f64)]) -> MeasurementRow {
    values
        .iter()
        .fold(MeasurementRow::previsionnel(person, date), |row, (key, value)| {
            row.with_value(*key, *value)
        })
}

/// Alice improves on dips, barely on push-ups and the sprint; Bob regresses.
///
/// Rows are deliberately out of date order.
pub fn group_snapshot() -> Vec<MeasurementRow> {
    vec![
        realisation(
            "Alice",
            "2025-02-01",
            &[
                (MetricKey::Dips, 12.0),
                (MetricKey::PushUps, 22.0),
                (MetricKey::Sprint100m, 14.0),
            ],
        ),
        realisation(
            "Alice",
            "2025-01-01",
            &[
                (MetricKey::Dips, 10.0),
                (MetricKey::PushUps, 20.0),
                (MetricKey::Sprint100m, 15.0),
            ],
        ),
        realisation(
            "Alice",
            "2025-03-01",
            &[
                (MetricKey::Dips, 15.0),
                (MetricKey::PushUps, 21.0),
                (MetricKey::Sprint100m, 14.5),
            ],
        ),
        previsionnel(
            "Alice",
            "2025-03-31",
            &[
                (MetricKey::Dips, 15.0),
                (MetricKey::PushUps, 25.0),
                (MetricKey::Sprint100m, 14.0),
            ],
        ),
        realisation(
            "Bob",
            "2025-01-01",
            &[(MetricKey::Dips, 20.0), (MetricKey::Run5km, 1500.0)],
        ),
        realisation(
            "Bob",
            "2025-02-15",
            &[(MetricKey::Dips, 16.0), (MetricKey::Run5km, 1560.0)],
        ),
        previsionnel("Bob", "2025-03-31", &[(MetricKey::Run5km, 1600.0)]),
    ]
}
