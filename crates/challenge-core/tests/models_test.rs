// ABOUTME: Tests for the metric registry, measurement rows, and people metadata
// ABOUTME: Validates snapshot JSON keys, polarity, display conversion, and gage lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use challenge_core::errors::ErrorCode;
use challenge_core::models::{
    list_metrics, lookup, person_gage, MeasurementRow, MetricKey, MetricUnit, PersonMeta,
    RecordType,
};
use serde_json::json;

#[test]
fn test_registry_has_eight_metrics_in_canonical_order() {
    let keys: Vec<&str> = list_metrics().iter().map(|m| m.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "dips",
            "pompes",
            "traction_pro",
            "traction_sup",
            "planche_sec",
            "superman_sec",
            "sprint_100m_sec",
            "run_5km_sec",
        ]
    );
}

#[test]
fn test_only_timed_runs_are_lower_is_better() {
    let lower: Vec<MetricKey> = list_metrics()
        .iter()
        .filter(|m| m.lower_is_better)
        .map(|m| m.key)
        .collect();
    assert_eq!(lower, vec![MetricKey::Sprint100m, MetricKey::Run5km]);
}

#[test]
fn test_lookup_and_parse() {
    let metric = lookup("traction_sup").unwrap();
    assert_eq!(metric.label, "Supinated pull-ups");
    assert_eq!(metric.unit, MetricUnit::Reps);
    assert!(lookup("bench_press").is_none());

    assert_eq!("run_5km_sec".parse::<MetricKey>().unwrap(), MetricKey::Run5km);
    let err = "bench_press".parse::<MetricKey>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("bench_press"));
}

#[test]
fn test_display_conversion() {
    assert_eq!(MetricKey::Plank.metric().to_display_value(90.0), 1.5);
    assert_eq!(MetricKey::Run5km.metric().to_display_value(1500.0), 25.0);
    assert_eq!(MetricKey::Sprint100m.metric().to_display_value(14.2), 14.2);
    assert_eq!(MetricKey::PushUps.metric().to_display_value(30.0), 30.0);
}

#[test]
fn test_row_deserializes_snapshot_keys() {
    let value = json!({
        "personne": "Alice",
        "date": "2025-01-15",
        "type": "realisation",
        "dips": 12,
        "pompes": 30.5,
        "run_5km_sec": null,
        "sprint_100m_sec": 14.8
    });

    let row: MeasurementRow = serde_json::from_value(value).unwrap();
    assert_eq!(row.person, "Alice");
    assert_eq!(row.date, "2025-01-15");
    assert_eq!(row.record_type, RecordType::Realisation);
    assert_eq!(row.value(MetricKey::Dips), Some(12.0));
    assert_eq!(row.value(MetricKey::PushUps), Some(30.5));
    assert_eq!(row.value(MetricKey::Run5km), None);
    assert_eq!(row.value(MetricKey::Plank), None);
    assert_eq!(row.value(MetricKey::Sprint100m), Some(14.8));
}

#[test]
fn test_row_serializes_snapshot_keys() {
    let row = MeasurementRow::previsionnel("Bob", "2025-03-01").with_value(MetricKey::Plank, 120.0);
    let value = serde_json::to_value(&row).unwrap();

    assert_eq!(value["personne"], "Bob");
    assert_eq!(value["type"], "previsionnel");
    assert_eq!(value["planche_sec"], 120.0);
    assert!(value["dips"].is_null());
}

#[test]
fn test_unknown_record_type_is_rejected() {
    let value = json!({"personne": "Alice", "date": "2025-01-15", "type": "objectif"});
    assert!(serde_json::from_value::<MeasurementRow>(value).is_err());
}

#[test]
fn test_person_gage_is_trimmed_and_case_insensitive() {
    let meta: Vec<PersonMeta> = serde_json::from_value(json!([
        {"personne": "Alice ", "gage": "Buy croissants"},
        {"personne": "Bob", "gage": null}
    ]))
    .unwrap();

    assert_eq!(person_gage(&meta, "alice"), Some("Buy croissants"));
    assert_eq!(person_gage(&meta, "  ALICE"), Some("Buy croissants"));
    assert_eq!(person_gage(&meta, "Bob"), None);
    assert_eq!(person_gage(&meta, "Carol"), None);
}
