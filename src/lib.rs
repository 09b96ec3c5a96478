// ABOUTME: Main library entry point for the workout form-tracking engine
// ABOUTME: Session layer, environment configuration, logging setup, and frame replay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns a stream of pose-estimation frames into rep counts, hold timers and
//! prioritised form feedback for squats, bicep curls, planks and pushups.
//!
//! The analysis itself lives in the `workout-analysis` crate; this crate wires
//! it into a per-client [`session::WorkoutSession`], loads thresholds from the
//! environment, sets up structured logging and replays recorded frame files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use workout_tracker::session::{ExerciseTargets, WorkoutSession};
//! use workout_tracker::{ExerciseKind, LandmarkMap, MonotonicClock, ThresholdConfig};
//!
//! let mut session = WorkoutSession::new(
//!     ExerciseKind::Squat,
//!     ThresholdConfig::new(),
//!     MonotonicClock::shared(),
//! )
//! .with_targets(ExerciseTargets::reps(3, 10));
//!
//! let snapshot = session.process_frame(&LandmarkMap::new());
//! println!("{} reps, state {}", snapshot.rep_count, snapshot.state);
//! ```

/// Environment-driven tracker configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Newline-delimited JSON frame files and replay driver
pub mod replay;

/// Per-client workout sessions and feedback statistics
pub mod session;

pub use workout_analysis::{
    Analyzer, ExerciseCounter, FrameReport, ManualClock, MonotonicClock, SharedClock,
};
pub use workout_core::{
    BodyLandmark, ExerciseKind, FeedbackItem, FeedbackPriority, Landmark, LandmarkMap,
    ThresholdConfig, TrackerError, TrackerResult,
};
