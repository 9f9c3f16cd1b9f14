// ABOUTME: Shared snapshot fixtures for pierre_challenge integration tests
// ABOUTME: Writes measurement and metadata JSON files into temporary directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, missing_docs, clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

pub fn rows_json() -> Value {
    json!([
        {"personne": "Alice", "date": "2025-01-01", "type": "realisation", "dips": 10, "pompes": 20, "planche_sec": 60},
        {"personne": "Alice", "date": "2025-02-01", "type": "realisation", "dips": 12, "pompes": 22, "planche_sec": 90},
        {"personne": "Alice", "date": "2025-03-01", "type": "realisation", "dips": 15, "pompes": 21, "planche_sec": null},
        {"personne": "Alice", "date": "2025-03-31", "type": "previsionnel", "dips": 15, "pompes": 25, "planche_sec": 120},
        {"personne": "Bob", "date": "2025-01-01", "type": "realisation", "dips": 20, "run_5km_sec": 1500},
        {"personne": "Bob", "date": "2025-02-15", "type": "realisation", "dips": 16, "run_5km_sec": 1560},
        {"personne": "Bob", "date": "2025-03-31", "type": "previsionnel", "run_5km_sec": 1600}
    ])
}

pub fn meta_json() -> Value {
    json!([
        {"personne": "Alice", "gage": "Bake a cake"},
        {"personne": "bob", "gage": null}
    ])
}

/// Temporary snapshot directory holding `clean_data.json` and `people_meta.json`
pub struct SnapshotFiles {
    pub dir: TempDir,
    pub data_path: PathBuf,
    pub meta_path: PathBuf,
}

pub fn write_snapshot() -> SnapshotFiles {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("clean_data.json");
    let meta_path = dir.path().join("people_meta.json");
    fs::write(&data_path, rows_json().to_string()).unwrap();
    fs::write(&meta_path, meta_json().to_string()).unwrap();
    SnapshotFiles {
        dir,
        data_path,
        meta_path,
    }
}
