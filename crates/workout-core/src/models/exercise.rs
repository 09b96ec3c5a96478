// ABOUTME: Exercise kind enumeration for the supported form analyzers
// ABOUTME: Parses user-facing exercise names and aliases into a closed set of kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::TrackerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exercises with a dedicated analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Bodyweight squat, counted in reps
    Squat,
    /// Standing bicep curl, counted in reps
    BicepCurl,
    /// Forearm or high plank, measured in hold time
    Plank,
    /// Pushup, counted in reps
    Pushup,
    /// Forward or reverse lunge, counted in reps
    Lunge,
    /// Jumping jack, counted in reps or run for a target duration
    JumpingJack,
}

impl ExerciseKind {
    /// Every supported exercise
    pub const ALL: [Self; 6] = [
        Self::Squat,
        Self::BicepCurl,
        Self::Plank,
        Self::Pushup,
        Self::Lunge,
        Self::JumpingJack,
    ];

    /// Resolve a user-supplied exercise name
    ///
    /// Matching ignores case, surrounding whitespace, and `-`/space separators.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownExercise`] when the name matches no
    /// exercise or alias.
    pub fn from_name(name: &str) -> Result<Self, TrackerError> {
        let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "squat" | "squats" => Ok(Self::Squat),
            "bicep_curl" | "bicep_curls" | "bicep" | "biceps" | "curl" | "curls" => {
                Ok(Self::BicepCurl)
            }
            "plank" | "planks" => Ok(Self::Plank),
            "pushup" | "pushups" | "push_up" | "push_ups" => Ok(Self::Pushup),
            "lunge" | "lunges" => Ok(Self::Lunge),
            "jumping_jack" | "jumping_jacks" | "jumping" | "jump" | "jumps" | "jack" | "jacks" => {
                Ok(Self::JumpingJack)
            }
            _ => Err(TrackerError::UnknownExercise(name.to_owned())),
        }
    }

    /// Canonical snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::BicepCurl => "bicep_curl",
            Self::Plank => "plank",
            Self::Pushup => "pushup",
            Self::Lunge => "lunge",
            Self::JumpingJack => "jumping_jack",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::BicepCurl => "Bicep Curl",
            Self::Plank => "Plank",
            Self::Pushup => "Pushup",
            Self::Lunge => "Lunge",
            Self::JumpingJack => "Jumping Jack",
        }
    }

    /// Whether progress is always measured in hold time rather than reps
    ///
    /// Jumping jacks switch to timed sets only when given a target duration.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::Plank)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
