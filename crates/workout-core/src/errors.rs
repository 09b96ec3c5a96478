// ABOUTME: Error types for threshold configuration, exercise selection, and landmark parsing
// ABOUTME: Also defines DetectionGap, the non-fatal outcome of a frame with missing body parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! There are no fatal errors inside the per-frame analysis path: a frame that
//! cannot be analyzed degrades to a [`DetectionGap`], which the analyzers turn
//! into a "can't detect" notice while freezing their state. [`TrackerError`]
//! covers everything that happens around that path (configuration, exercise
//! selection, frame parsing).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Result alias used across the workspace
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors raised outside the per-frame analysis path
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Exercise name did not match any supported exercise or alias
    #[error("Unknown exercise: '{0}'")]
    UnknownExercise(String),

    /// Threshold value is not a finite number
    #[error("Invalid threshold '{key}': {value}")]
    InvalidThreshold {
        /// Threshold key
        key: String,
        /// Rejected value
        value: f64,
    },

    /// Landmark name or index did not map to a known body landmark
    #[error("Invalid landmark: {0}")]
    InvalidLandmark(String),

    /// Input could not be parsed (JSON threshold file, frame record)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure while reading configuration or frames
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Body region whose landmarks were missing or below the visibility threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Hips, knees, and ankles
    Legs,
    /// Shoulders, elbows, and wrists
    Arms,
    /// Shoulders and hips
    Torso,
    /// Shoulder, hip, and ankle line used for horizontal holds
    BodyLine,
}

impl BodyPart {
    /// Human-readable description used in feedback texts
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Legs => "legs",
            Self::Arms => "arm position",
            Self::Torso => "torso",
            Self::BodyLine => "full body",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A frame whose required landmarks could not be used
///
/// Detection gaps are expected under normal operation (user stepping out of
/// frame, occlusion) and never abort a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Can't detect {body_part}")]
pub struct DetectionGap {
    /// Body region that was not detected
    pub body_part: BodyPart,
}

impl DetectionGap {
    /// Create a detection gap for the given body region
    #[must_use]
    pub const fn new(body_part: BodyPart) -> Self {
        Self { body_part }
    }

    /// Feedback text shown to the user for this gap
    #[must_use]
    pub fn feedback_text(&self) -> String {
        self.to_string()
    }
}
