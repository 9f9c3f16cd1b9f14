// ABOUTME: Core types and constants for the Pierre challenge progress dashboard
// ABOUTME: Foundation crate with the metric registry, measurement rows, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Challenge Core
//!
//! Foundation crate shared by the analytics engine and the dashboard binary.
//! Changes rarely, so the analytics crate can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Thresholds and rounding precision used by the analytics
//! - **models**: Metric registry, measurement rows, and participant metadata

/// Unified error handling system with standard error codes
pub mod errors;

/// Analytics constants organized by domain
pub mod constants;

/// Core data models (Metric registry, `MeasurementRow`, `PersonMeta`)
pub mod models;
