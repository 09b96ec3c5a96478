// ABOUTME: Exercise analysis engine turning per-frame body landmarks into counts and form feedback
// ABOUTME: Geometry, smoothing, feedback prioritisation, and the per-exercise state machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Analysis
//!
//! Frame-by-frame exercise analysis. Each tracked session owns one
//! [`Analyzer`], which owns its own [`FeedbackManager`], smoothing windows and
//! state machine; nothing here is shared between sessions and nothing blocks.
//!
//! ## Modules
//!
//! - **geometry**: joint angles, segment angles, and hip-to-line deviation
//! - **smoothing**: fixed-capacity rolling average
//! - **sides**: left/right limb selection
//! - **feedback**: de-duplicated, priority-ordered feedback set
//! - **clock**: monotonic time source for timed holds
//! - **analyzer**: the exercise analyzer contract and tagged dispatch enum
//! - **exercises**: per-exercise state machines (squat, bicep curl, plank, pushup,
//!   lunge, jumping jack)

/// Pure angle and alignment functions on 2D landmark projections
pub mod geometry;

/// Fixed-capacity rolling average over recent readings
pub mod smoothing;

/// Left/right limb selection helpers
pub mod sides;

/// Per-attempt feedback de-duplication and ordering
pub mod feedback;

/// Monotonic clock abstraction used by timed exercises
pub mod clock;

/// Exercise analyzer contract, shared analyzer state, and dispatch enum
pub mod analyzer;

/// Concrete per-exercise state machines
pub mod exercises;

pub use analyzer::{
    Analyzer, AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, FrameReport,
    StateUpdate,
};
pub use clock::{Clock, ManualClock, MonotonicClock, SharedClock};
pub use exercises::{
    BicepCurlAnalyzer, BicepCurlState, JumpingJackAnalyzer, JumpingJackState, LungeAnalyzer,
    LungeState, PlankAnalyzer, PlankState, PushupAnalyzer, PushupState, SquatAnalyzer, SquatState,
};
pub use feedback::FeedbackManager;
pub use sides::Side;
pub use smoothing::RollingWindow;
