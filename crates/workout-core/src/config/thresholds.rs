// ABOUTME: Flat threshold configuration mapping threshold names to numeric cutoffs
// ABOUTME: Missing keys resolve silently to built-in defaults at lookup time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Named numeric thresholds supplied at analyzer construction
///
/// Angles are in degrees; hip deviations are percentages of the
/// shoulder-to-ankle length. Each analyzer reads only the keys it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdConfig {
    values: HashMap<String, f64>,
}

impl ThresholdConfig {
    /// Empty configuration; every lookup falls back to its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `name: number` pairs
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Parse`] for malformed JSON and
    /// [`TrackerError::InvalidThreshold`] for non-finite values.
    pub fn from_json_str(json: &str) -> TrackerResult<Self> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;
        Self::from_pairs(raw)
    }

    /// Load a JSON threshold file
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Self::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Build a configuration from `(name, value)` pairs
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidThreshold`] for the first non-finite value.
    pub fn from_pairs<K, I>(pairs: I) -> TrackerResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut config = Self::new();
        for (key, value) in pairs {
            config.insert(key, value)?;
        }
        Ok(config)
    }

    /// Set a threshold value
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidThreshold`] if the value is NaN or infinite.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> TrackerResult<()> {
        let key = key.into();
        if !value.is_finite() {
            return Err(TrackerError::InvalidThreshold { key, value });
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Builder-style [`Self::insert`]
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidThreshold`] if the value is NaN or infinite.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> TrackerResult<Self> {
        self.insert(key, value)?;
        Ok(self)
    }

    /// Merge another configuration on top of this one
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Configured value for `key`, if any
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Configured value for `key`, or `default` when the key is absent
    #[must_use]
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or_else(|| {
            debug!(key, default, "Threshold not configured, using default");
            default
        })
    }

    /// Number of explicitly configured thresholds
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no threshold is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
