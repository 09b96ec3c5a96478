// ABOUTME: Core types and constants for the workout form-tracking engine
// ABOUTME: Foundation crate with error handling, threshold defaults, and landmark/feedback models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! form-tracking engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `TrackerError` and the per-frame `DetectionGap`
//! - **constants**: Threshold keys, per-exercise defaults, and feedback texts
//! - **models**: Landmarks, feedback items, and exercise kinds
//! - **config**: Flat threshold configuration with silent default fallback

/// Unified error handling for configuration, parsing, and detection gaps
pub mod errors;

/// Threshold keys, defaults, and feedback texts organized by exercise
pub mod constants;

/// Core data models (landmarks, feedback items, exercise kinds)
pub mod models;

/// Threshold configuration consumed by the analyzers
pub mod config;

pub use config::ThresholdConfig;
pub use errors::{BodyPart, DetectionGap, TrackerError, TrackerResult};
pub use models::{
    BodyLandmark, ExerciseKind, FeedbackItem, FeedbackPriority, Landmark, LandmarkMap, Point2,
};
