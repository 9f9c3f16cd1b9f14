// ABOUTME: Environment-driven configuration for the challenge dashboard and CLI
// ABOUTME: Resolves snapshot file paths and analytics threshold overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `CHALLENGE_DATA_PATH` | `data/clean_data.json` |
//! | `CHALLENGE_META_PATH` | `data/people_meta.json` |
//! | `CHALLENGE_MOMENTUM_THRESHOLD` | `2.0` |
//! | `CHALLENGE_RAPID_IMPROVEMENT_PCT` | `20.0` |
//! | `CHALLENGE_GOAL_REACHED_PCT` | `10.0` |
//! | `CHALLENGE_MAX_IMPROVEMENT_ZONES` | `3` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use challenge_intelligence::{AnalyticsConfig, ConfigError};
use tracing::warn;

/// Default location of the measurement snapshot
pub const DEFAULT_DATA_PATH: &str = "data/clean_data.json";

/// Default location of the people metadata snapshot
pub const DEFAULT_META_PATH: &str = "data/people_meta.json";

static CHALLENGE_CONFIG: OnceLock<ChallengeConfig> = OnceLock::new();

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeConfig {
    /// Measurement rows JSON file
    pub data_path: PathBuf,
    /// People metadata JSON file
    pub meta_path: PathBuf,
    /// Analytics thresholds
    pub analytics: AnalyticsConfig,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            meta_path: PathBuf::from(DEFAULT_META_PATH),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl ChallengeConfig {
    /// Process-wide configuration, loaded once from the environment
    ///
    /// Falls back to defaults when the environment holds invalid values.
    #[must_use]
    pub fn global() -> &'static Self {
        CHALLENGE_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load challenge config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// thresholds fail validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = env::var("CHALLENGE_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("CHALLENGE_META_PATH") {
            config.meta_path = PathBuf::from(path);
        }

        let analytics = &mut config.analytics;
        Self::apply_env_var(
            "CHALLENGE_MOMENTUM_THRESHOLD",
            &mut analytics.momentum_badge_threshold,
        )?;
        Self::apply_env_var(
            "CHALLENGE_RAPID_IMPROVEMENT_PCT",
            &mut analytics.rapid_improvement_pct,
        )?;
        Self::apply_env_var("CHALLENGE_GOAL_REACHED_PCT", &mut analytics.goal_reached_pct)?;
        Self::apply_env_var(
            "CHALLENGE_MAX_IMPROVEMENT_ZONES",
            &mut analytics.max_improvement_zones,
        )?;

        config.analytics.validate()?;
        Ok(config)
    }

    /// Override the snapshot paths, keeping the environment values when `None`
    #[must_use]
    pub fn with_paths(mut self, data_path: Option<PathBuf>, meta_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(path) = meta_path {
            self.meta_path = path;
        }
        self
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }
}
