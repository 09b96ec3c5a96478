// ABOUTME: Environment configuration for threshold files and per-key threshold overrides
// ABOUTME: Unparseable override values are logged and ignored; a missing threshold file is an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based tracker configuration
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `WORKOUT_THRESHOLDS_FILE` | Optional JSON object of `name -> number` thresholds |
//! | `WORKOUT_THRESHOLD_<KEY>` | Override for one threshold, e.g. `WORKOUT_THRESHOLD_SQUAT_TOO_DEEP=50` |
//! | `WORKOUT_VISIBILITY_THRESHOLD` | Landmark visibility threshold, default 0.5 |
//!
//! Later sources win: file, then per-key overrides, then the visibility variable.

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};
use workout_core::config::min_visibility;
use workout_core::constants::thresholds::shared::MIN_VISIBILITY_KEY;
use workout_core::{ThresholdConfig, TrackerError};

/// Environment variable naming a JSON threshold file
pub const THRESHOLDS_FILE_VAR: &str = "WORKOUT_THRESHOLDS_FILE";
/// Prefix of per-key threshold override variables
pub const THRESHOLD_VAR_PREFIX: &str = "WORKOUT_THRESHOLD_";
/// Environment variable holding the landmark visibility threshold
pub const VISIBILITY_VAR: &str = "WORKOUT_VISIBILITY_THRESHOLD";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured threshold file could not be read or parsed
    #[error("Failed to load thresholds from {}: {source}", path.display())]
    ThresholdFile {
        /// File that failed to load
        path: PathBuf,
        /// Underlying failure
        source: TrackerError,
    },

    /// A threshold value was rejected
    #[error("Invalid threshold configuration: {0}")]
    Threshold(#[from] TrackerError),
}

/// Tracker settings resolved at startup
#[derive(Debug, Clone, Default)]
pub struct TrackerSettings {
    /// Threshold file that was loaded, if any
    pub thresholds_file: Option<PathBuf>,
    /// Merged thresholds handed to every analyzer
    pub thresholds: ThresholdConfig,
    /// Landmark visibility threshold in effect
    pub visibility_threshold: f64,
}

impl TrackerSettings {
    /// Load settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThresholdFile`] if `WORKOUT_THRESHOLDS_FILE` is set
    /// but the file cannot be read or is not a JSON object of finite numbers.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Load settings from an explicit set of variables
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars: Vec<(String, String)> = vars.into_iter().collect();
        // Deterministic override order
        vars.sort();

        let thresholds_file = vars
            .iter()
            .find(|(name, _)| name == THRESHOLDS_FILE_VAR)
            .map(|(_, value)| PathBuf::from(value))
            .filter(|path| !path.as_os_str().is_empty());

        let mut thresholds = match &thresholds_file {
            Some(path) => {
                let loaded = ThresholdConfig::from_json_file(path).map_err(|source| {
                    ConfigError::ThresholdFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                info!(path = %path.display(), keys = loaded.len(), "Loaded threshold file");
                loaded
            }
            None => ThresholdConfig::new(),
        };

        for (name, value) in &vars {
            if let Some(suffix) = name.strip_prefix(THRESHOLD_VAR_PREFIX) {
                apply_override(&mut thresholds, &suffix.to_lowercase(), name, value);
            }
        }

        if let Some((name, value)) = vars.iter().find(|(name, _)| name == VISIBILITY_VAR) {
            match parse_visibility(value) {
                Some(visibility) => {
                    thresholds.insert(MIN_VISIBILITY_KEY, visibility)?;
                }
                None => warn!(
                    var = %name,
                    value = %value,
                    "Ignoring visibility threshold outside [0, 1]"
                ),
            }
        }

        let visibility_threshold = min_visibility(&thresholds);
        Ok(Self {
            thresholds_file,
            thresholds,
            visibility_threshold,
        })
    }
}

fn apply_override(thresholds: &mut ThresholdConfig, key: &str, var: &str, raw: &str) {
    if key.is_empty() {
        return;
    }
    match raw.trim().parse::<f64>() {
        Ok(value) => match thresholds.insert(key, value) {
            Ok(()) => debug!(key, value, "Threshold override from environment"),
            Err(e) => warn!(var, error = %e, "Ignoring threshold override"),
        },
        Err(e) => warn!(var, value = raw, error = %e, "Ignoring unparseable threshold override"),
    }
}

fn parse_visibility(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
}
