// ABOUTME: Core data models for pose-driven exercise tracking
// ABOUTME: Landmarks and landmark maps, 2D points, feedback items, and exercise kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

/// Exercise kinds and name/alias parsing
pub mod exercise;
/// Feedback items and priority levels
pub mod feedback;
/// Body landmarks as produced by the pose-estimation model
pub mod landmark;
/// 2D points and vector arithmetic on the image plane
pub mod point;

pub use exercise::ExerciseKind;
pub use feedback::{FeedbackItem, FeedbackPriority};
pub use landmark::{BodyLandmark, Landmark, LandmarkMap};
pub use point::Point2;
