// ABOUTME: Tests for evolution scores, momentum badges, improvement zones, and series
// ABOUTME: Validates clamping, zero baselines, badge boundaries, and as-of series walks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use challenge_core::models::MetricKey;
use challenge_intelligence::{AnalyticsConfig, EvolutionEngine, MomentumBadge};
use common::{assert_close, group_snapshot, previsionnel, realisation};

#[test]
fn test_evolution_score() {
    let engine = EvolutionEngine::new();
    let rows = group_snapshot();

    // Alice: dips +50%, push-ups +5%, sprint +3.33%
    assert_close(engine.evolution_score(&rows, "Alice"), 19.4);
    // Bob: dips -20%, 5 km -4%
    assert_close(engine.evolution_score(&rows, "Bob"), -12.0);
}

#[test]
fn test_evolution_score_without_two_readings_is_zero() {
    let engine = EvolutionEngine::new();
    let rows = vec![
        realisation("Alice", "2025-01-01", &[(MetricKey::Dips, 10.0)]),
        realisation("Alice", "2025-02-01", &[(MetricKey::PushUps, 20.0)]),
        previsionnel("Alice", "2025-03-01", &[(MetricKey::Dips, 30.0)]),
    ];
    assert_close(engine.evolution_score(&rows, "Alice"), 0.0);
    assert_close(engine.evolution_score(&rows, "Nobody"), 0.0);
}

#[test]
fn test_evolution_score_is_clamped() {
    let engine = EvolutionEngine::new();
    let rows = vec![
        realisation("Up", "2025-01-01", &[(MetricKey::Dips, 1.0)]),
        realisation("Up", "2025-02-01", &[(MetricKey::Dips, 5.0)]),
        realisation("Down", "2025-01-01", &[(MetricKey::Sprint100m, 10.0)]),
        realisation("Down", "2025-02-01", &[(MetricKey::Sprint100m, 30.0)]),
    ];
    assert_close(engine.evolution_score(&rows, "Up"), 100.0);
    assert_close(engine.evolution_score(&rows, "Down"), -100.0);
}

#[test]
fn test_zero_baseline_metric_counts_as_no_progression() {
    let engine = EvolutionEngine::new();
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
    // Dips 0 -> 10 weighs in at 0%, push-ups +20%
    assert_close(engine.evolution_score(&rows, "Alice"), 10.0);
    assert_close(engine.recent_momentum(&rows, "Alice"), 10.0);
    assert!(engine.improvement_zones(&rows, "Alice").is_empty());
}

#[test]
fn test_recent_momentum() {
    let engine = EvolutionEngine::new();
    let rows = group_snapshot();

    // Alice latest transition: dips +25%, push-ups -4.55%, sprint -3.57%
    assert_close(engine.recent_momentum(&rows, "Alice"), 5.6);
    assert_close(engine.recent_momentum(&rows, "Bob"), -12.0);
    assert_close(engine.recent_momentum(&rows, "Nobody"), 0.0);
}

#[test]
fn test_momentum_uses_only_metrics_on_latest_row() {
    let rows = vec![
        realisation(
            "Alice",
            "2025-01-01",
            &[(MetricKey::Dips, 10.0), (MetricKey::PushUps, 10.0)],
        ),
        realisation("Alice", "2025-02-01", &[(MetricKey::PushUps, 5.0)]),
        realisation("Alice", "2025-03-01", &[(MetricKey::Dips, 11.0)]),
    ];
    // Dips compares against the last earlier dips reading (10 -> 11)
    assert_close(EvolutionEngine::new().recent_momentum(&rows, "Alice"), 10.0);
}

#[test]
fn test_momentum_badge_boundaries() {
    assert_eq!(MomentumBadge::from_momentum(2.0), MomentumBadge::Stable);
    assert_eq!(MomentumBadge::from_momentum(-2.0), MomentumBadge::Stable);
    assert_eq!(MomentumBadge::from_momentum(0.0), MomentumBadge::Stable);
    assert_eq!(MomentumBadge::from_momentum(2.1), MomentumBadge::Acceleration);
    assert_eq!(MomentumBadge::from_momentum(-2.1), MomentumBadge::AdjustmentPhase);
    assert_eq!(MomentumBadge::AdjustmentPhase.label(), "Adjustment phase");
}

#[test]
fn test_momentum_badge_with_custom_threshold() {
    let engine = EvolutionEngine::with_config(AnalyticsConfig {
        momentum_badge_threshold: 10.0,
        ..AnalyticsConfig::default()
    });
    assert_eq!(engine.badge(5.6), MomentumBadge::Stable);
    assert_eq!(engine.badge(-12.0), MomentumBadge::AdjustmentPhase);
}

#[test]
fn test_improvement_zones() {
    let engine = EvolutionEngine::new();
    let rows = group_snapshot();

    assert_eq!(engine.improvement_zones(&rows, "Bob"), vec!["Dips", "5km"]);
    assert!(engine.improvement_zones(&rows, "Alice").is_empty());
}

#[test]
fn test_improvement_zones_are_capped() {
    let rows = vec![
        realisation(
            "Alice",
            "2025-01-01",
            &[
                (MetricKey::Dips, 10.0),
                (MetricKey::PushUps, 10.0),
                (MetricKey::Plank, 100.0),
                (MetricKey::Superman, 100.0),
            ],
        ),
        realisation(
            "Alice",
            "2025-02-01",
            &[
                (MetricKey::Dips, 9.0),
                (MetricKey::PushUps, 5.0),
                (MetricKey::Plank, 70.0),
                (MetricKey::Superman, 60.0),
            ],
        ),
    ];
    assert_eq!(
        EvolutionEngine::new().improvement_zones(&rows, "Alice"),
        vec!["Push-ups", "Superman", "Plank"]
    );

    let engine = EvolutionEngine::with_config(AnalyticsConfig {
        max_improvement_zones: 1,
        ..AnalyticsConfig::default()
    });
    assert_eq!(engine.improvement_zones(&rows, "Alice"), vec!["Push-ups"]);
}

#[test]
fn test_person_evolution_series() {
    let engine = EvolutionEngine::new();
    let rows = group_snapshot();

    let series = engine.person_evolution_series(&rows, "Alice");
    let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-02-01", "2025-03-01"]);
    assert_close(series[0].score, 12.2);
    assert_close(series[1].score, 19.4);

    assert_close(engine.total_variation(&rows, "Alice"), 7.2);
    assert_close(engine.total_variation(&rows, "Bob"), 0.0);
}

#[test]
fn test_person_summaries_sorted_by_name() {
    let mut rows = group_snapshot();
    rows.reverse();
    let summaries = EvolutionEngine::new().person_summaries(&rows);

    let names: Vec<&str> = summaries.iter().map(|s| s.person.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(summaries[0].badge, MomentumBadge::Acceleration);
    assert_eq!(summaries[1].badge, MomentumBadge::AdjustmentPhase);
    assert_close(summaries[1].score, -12.0);
}

#[test]
fn test_metric_progression_detail() {
    let rows = group_snapshot();
    let detail = EvolutionEngine::metric_progression(&rows, "Alice", MetricKey::Dips);
    assert_close(detail.total.unwrap(), 50.0);
    assert_close(detail.recent.unwrap(), 25.0);

    let missing = EvolutionEngine::metric_progression(&rows, "Alice", MetricKey::Plank);
    assert_eq!(missing.total, None);
    assert_eq!(missing.recent, None);
}

#[test]
fn test_results_are_idempotent() {
    let engine = EvolutionEngine::new();
    let rows = group_snapshot();

    assert_eq!(engine.person_summaries(&rows), engine.person_summaries(&rows));
    assert_eq!(
        engine.person_evolution_series(&rows, "Alice"),
        engine.person_evolution_series(&rows, "Alice")
    );
}
