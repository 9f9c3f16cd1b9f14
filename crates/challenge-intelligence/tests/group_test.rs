// ABOUTME: Tests for group KPIs and the carried-forward group average series
// ABOUTME: Validates goal polarity, missing targets, and single-contributor series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use challenge_core::models::MetricKey;
use challenge_intelligence::GroupAggregator;
use common::{assert_close, group_snapshot, previsionnel, realisation};

#[test]
fn test_group_kpis() {
    let kpis = GroupAggregator::new().group_kpis(&group_snapshot());

    // Only Alice's dips improved on the latest transition
    assert_eq!(kpis.positive_recent_count, 1);
    // Mean of 50, 5, 3.33, -20, -4
    assert_close(kpis.average_progression_pct, 6.9);
    // Alice's dips hit 15 >= 15 and Bob's 5 km 1560 s <= 1600 s
    assert_eq!(kpis.goals_reached, 2);
}

#[test]
fn test_goals_ignore_missing_targets() {
    let rows = vec![
        realisation("Alice", "2025-01-01", &[(MetricKey::Dips, 10.0)]),
        realisation("Alice", "2025-02-01", &[(MetricKey::Dips, 30.0)]),
        previsionnel("Alice", "2025-03-01", &[(MetricKey::PushUps, 10.0)]),
        previsionnel("Bob", "2025-03-01", &[(MetricKey::Dips, 10.0)]),
    ];
    assert_eq!(GroupAggregator::new().group_kpis(&rows).goals_reached, 0);
}

#[test]
fn test_goals_use_latest_target() {
    let rows = vec![
        realisation("Alice", "2025-02-01", &[(MetricKey::Sprint100m, 14.0)]),
        previsionnel("Alice", "2025-04-01", &[(MetricKey::Sprint100m, 13.5)]),
        previsionnel("Alice", "2025-03-01", &[(MetricKey::Sprint100m, 14.5)]),
    ];
    assert_eq!(GroupAggregator::new().group_kpis(&rows).goals_reached, 0);
}

#[test]
fn test_group_kpis_on_empty_scope() {
    let kpis = GroupAggregator::new().group_kpis(&[]);
    assert_eq!(kpis.positive_recent_count, 0);
    assert_close(kpis.average_progression_pct, 0.0);
    assert_eq!(kpis.goals_reached, 0);
}

#[test]
fn test_group_average_series_single_person() {
    let rows = vec![
        realisation("Alice", "2025-01-01", &[(MetricKey::Dips, 10.0)]),
        realisation("Alice", "2025-02-01", &[(MetricKey::Dips, 11.0)]),
        realisation("Alice", "2025-03-01", &[(MetricKey::Dips, 12.0)]),
    ];
    let series = GroupAggregator::new().group_average_series(&rows);

    assert_eq!(series.len(), 3);
    assert_close(series[0].score, 0.0);
    assert_eq!(series[1].date, "2025-02-01");
    assert_close(series[1].score, 10.0);
    assert_eq!(series[2].date, "2025-03-01");
    assert_close(series[2].score, 20.0);
}

#[test]
fn test_group_average_series_carries_scores_forward() {
    let series = GroupAggregator::new().group_average_series(&group_snapshot());
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2025-01-01", "2025-02-01", "2025-02-15", "2025-03-01"]
    );

    assert_close(series[0].score, 0.0);
    // Bob has no score yet
    assert_close(series[1].score, 12.2);
    // Alice's 12.2 carried forward next to Bob's -12.0
    assert_close(series[2].score, 0.1);
    assert_close(series[3].score, 3.7);
}

#[test]
fn test_group_results_are_idempotent() {
    let aggregator = GroupAggregator::new();
    let rows = group_snapshot();

    assert_eq!(aggregator.group_kpis(&rows), aggregator.group_kpis(&rows));
    assert_eq!(
        aggregator.group_average_series(&rows),
        aggregator.group_average_series(&rows)
    );
}

#[test]
fn test_zero_baseline_weighs_in_average_progression() {
    let aggregator = GroupAggregator::new();
    let rows = vec![
        realisation(
            "Alice",
            "2025-01-01",
            &[(MetricKey::Dips, 0.0), (MetricKey::PushUps, 10.0)],
        ),
        realisation(
            "Alice",
            "2025-02-01",
            &[(MetricKey::Dips, 10.0), (MetricKey::PushUps, 12.0)],
        ),
    ];

    let kpis = aggregator.group_kpis(&rows);
    assert_close(kpis.average_progression_pct, 10.0);
    // Only push-ups improved over the latest transition
    assert_eq!(kpis.positive_recent_count, 1);
}
