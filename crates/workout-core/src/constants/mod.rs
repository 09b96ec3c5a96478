// ABOUTME: Constants module with exercise-separated organization
// ABOUTME: Threshold keys and defaults plus the feedback texts shown to users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Threshold defaults were tuned per movement pattern and are intentionally not
//! unified across exercises.

/// Threshold keys and their built-in defaults, one module per exercise
pub mod thresholds;

/// Feedback texts emitted by the analyzers
pub mod messages;

/// Landmark detection limits
pub mod detection {
    /// Minimum visibility score for a landmark to be used
    pub const DEFAULT_MIN_VISIBILITY: f64 = 0.5;
    /// Number of landmarks produced by the BlazePose model
    pub const BLAZEPOSE_LANDMARK_COUNT: usize = 33;
}
