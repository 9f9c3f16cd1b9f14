// ABOUTME: Read-only loading of the measurement and people metadata JSON snapshots
// ABOUTME: Async file reads with tokio and serde_json parsing into core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::path::Path;

use challenge_core::errors::{AppError, AppResult};
use challenge_core::models::{MeasurementRow, PersonMeta};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::info;

/// Measurement rows and people metadata loaded together
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Every measurement row, in file order
    pub rows: Vec<MeasurementRow>,
    /// People metadata, empty when the metadata file is absent
    pub people_meta: Vec<PersonMeta>,
}

impl Snapshot {
    /// Load both snapshot files
    ///
    /// A missing metadata file is not an error; gages are then unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows file cannot be read or either file is malformed
    pub async fn load(data_path: &Path, meta_path: &Path) -> AppResult<Self> {
        let rows = load_rows(data_path).await?;
        let people_meta = if fs::try_exists(meta_path).await.unwrap_or(false) {
            load_people_meta(meta_path).await?
        } else {
            info!(path = %meta_path.display(), "No people metadata file, skipping");
            Vec::new()
        };
        Ok(Self { rows, people_meta })
    }
}

/// Load measurement rows from a JSON array
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other
/// read failures, and `SerializationError` for malformed JSON
pub async fn load_rows(path: &Path) -> AppResult<Vec<MeasurementRow>> {
    let rows: Vec<MeasurementRow> = read_json(path).await?;
    info!(path = %path.display(), rows = rows.len(), "Loaded measurement rows");
    Ok(rows)
}

/// Load people metadata from a JSON array
///
/// # Errors
///
/// Same as [`load_rows`]
pub async fn load_people_meta(path: &Path) -> AppResult<Vec<PersonMeta>> {
    let meta: Vec<PersonMeta> = read_json(path).await?;
    info!(path = %path.display(), people = meta.len(), "Loaded people metadata");
    Ok(meta)
}

/// Distinct person names, sorted
#[must_use]
pub fn people(rows: &[MeasurementRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.person.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(AppError::not_found(format!("Snapshot {}", path.display())));
    }

    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}", path.display())).with_source(e)
    })?;

    serde_json::from_str(&content).map_err(|e| {
        AppError::serialization(format!("Malformed snapshot {}", path.display())).with_source(e)
    })
}
