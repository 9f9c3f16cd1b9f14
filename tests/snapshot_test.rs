// ABOUTME: Tests for loading the measurement and people metadata snapshots
// ABOUTME: Validates JSON key mapping, missing files, and malformed content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::write_snapshot;
use pierre_challenge::errors::ErrorCode;
use pierre_challenge::models::{person_gage, MetricKey, RecordType};
use pierre_challenge::snapshot::{load_people_meta, load_rows, people, Snapshot};

#[tokio::test]
async fn test_load_rows_maps_snapshot_keys() {
    let files = write_snapshot();
    let rows = load_rows(&files.data_path).await.unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].person, "Alice");
    assert_eq!(rows[0].record_type, RecordType::Realisation);
    assert_eq!(rows[0].value(MetricKey::Plank), Some(60.0));
    assert_eq!(rows[2].value(MetricKey::Plank), None);
    assert_eq!(rows[3].record_type, RecordType::Previsionnel);
    assert_eq!(rows[5].value(MetricKey::Run5km), Some(1560.0));
}

#[tokio::test]
async fn test_load_people_meta() {
    let files = write_snapshot();
    let meta = load_people_meta(&files.meta_path).await.unwrap();

    assert_eq!(meta.len(), 2);
    assert_eq!(person_gage(&meta, "alice"), Some("Bake a cake"));
    assert_eq!(person_gage(&meta, "Bob"), None);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let files = write_snapshot();
    let missing = files.dir.path().join("absent.json");

    let error = load_rows(&missing).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_malformed_file_is_serialization_error() {
    let files = write_snapshot();
    fs::write(&files.data_path, "{not json").unwrap();

    let error = load_rows(&files.data_path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_snapshot_without_metadata_file() {
    let files = write_snapshot();
    fs::remove_file(&files.meta_path).unwrap();

    let snapshot = Snapshot::load(&files.data_path, &files.meta_path).await.unwrap();
    assert_eq!(snapshot.rows.len(), 7);
    assert!(snapshot.people_meta.is_empty());
}

#[tokio::test]
async fn test_people_are_sorted_and_distinct() {
    let files = write_snapshot();
    let snapshot = Snapshot::load(&files.data_path, &files.meta_path).await.unwrap();
    assert_eq!(people(&snapshot.rows), vec!["Alice", "Bob"]);
    assert!(people(&[]).is_empty());
}
