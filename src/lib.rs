// ABOUTME: Main library entry point for the Pierre challenge progress dashboard
// ABOUTME: Wires snapshot loading, configuration, logging, and dashboard report composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Challenge
//!
//! Progress analytics for a group fitness challenge. Measurement rows are
//! loaded from a read-only JSON snapshot and turned into group and personal
//! reports by the [`challenge_intelligence`] engine.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use pierre_challenge::dashboard::{Dashboard, DashboardFilters};
//! use pierre_challenge::snapshot::Snapshot;
//!
//! # async fn run() -> pierre_challenge::errors::AppResult<()> {
//! let snapshot = Snapshot::load(Path::new("data/clean_data.json"), Path::new("data/people_meta.json")).await?;
//! let report = Dashboard::default().group_report(&snapshot.rows, &DashboardFilters::default());
//! println!("{} goals reached", report.kpis.goals_reached);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Group and personal report composition
pub mod dashboard;

/// Structured logging setup
pub mod logging;

/// Snapshot file loading
pub mod snapshot;

/// Unified error types from the core crate
pub use challenge_core::errors;

/// Metric registry and measurement models from the core crate
pub use challenge_core::models;

/// Shared constants from the core crate
pub use challenge_core::constants;

/// Analytics engine
pub use challenge_intelligence as intelligence;
