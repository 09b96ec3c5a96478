// ABOUTME: Exercise analyzer contract shared by every concrete per-exercise state machine
// ABOUTME: Tagged dispatch enum selecting the analyzer for an exercise kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Analyzer Contract
//!
//! [`ExerciseAnalyzer::update_state`] is the single per-frame entry point: it
//! computes metrics, runs form analysis where the state machine calls for it,
//! and advances the state machine. A frame whose landmarks are unusable yields
//! a [`DetectionGap`], which freezes state and counters for that frame and adds
//! a transient "can't detect" notice to the returned feedback.
//!
//! `COMPLETED` is reported on exactly the frame that finishes a rep or hold;
//! the following frame is evaluated from `IDLE`.

mod base;

pub use base::AnalyzerCore;

use crate::clock::SharedClock;
use crate::exercises::{
    BicepCurlAnalyzer, JumpingJackAnalyzer, LungeAnalyzer, PlankAnalyzer, PushupAnalyzer,
    SquatAnalyzer,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use workout_core::{DetectionGap, ExerciseKind, FeedbackItem, LandmarkMap, ThresholdConfig};

/// Closed set of states of one exercise
pub trait ExerciseState: Copy + Eq + Debug {
    /// Initial state, also re-entered after every completion
    const IDLE: Self;
    /// Terminal state visited once per rep or hold
    const COMPLETED: Self;

    /// Upper-case state name (e.g. `SQUAT_HOLD`)
    fn as_str(self) -> &'static str;
}

/// Result of one state update
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdate<S> {
    /// State after this frame
    pub state: S,
    /// Persistent feedback followed by any transient notice for this frame
    pub feedback: Vec<FeedbackItem>,
}

/// Progress counter appropriate to the exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseCounter {
    /// Rep-based exercises
    Reps {
        /// Completed reps
        count: u32,
        /// Completed reps during which corrective feedback fired
        errors: u32,
    },
    /// Timed holds
    Hold {
        /// Hold time of the current attempt in seconds
        elapsed_seconds: f64,
        /// Seconds left to the target, `None` when untimed
        remaining_seconds: Option<f64>,
        /// Target hold in seconds, zero when untimed
        target_seconds: f64,
        /// Holds that reached the target
        completed_holds: u32,
        /// Hold time across every attempt in seconds
        total_seconds: f64,
    },
}

impl ExerciseCounter {
    /// Completed reps, or completed holds for timed exercises
    #[must_use]
    pub const fn completions(&self) -> u32 {
        match self {
            Self::Reps { count, .. } => *count,
            Self::Hold {
                completed_holds, ..
            } => *completed_holds,
        }
    }

    /// Reps flagged with form errors (always zero for holds)
    #[must_use]
    pub const fn error_reps(&self) -> u32 {
        match self {
            Self::Reps { errors, .. } => *errors,
            Self::Hold { .. } => 0,
        }
    }
}

/// Contract implemented by every exercise analyzer
pub trait ExerciseAnalyzer {
    /// State enum of this exercise
    type State: ExerciseState;
    /// Per-frame measurements
    type Metrics;

    /// Exercise this analyzer tracks
    const KIND: ExerciseKind;

    /// Clear per-attempt data (feedback, extrema, smoothing buffers)
    ///
    /// Counters and the current state are left untouched.
    fn reset(&mut self);

    /// Compute this frame's measurements
    ///
    /// # Errors
    ///
    /// Returns a [`DetectionGap`] when required landmarks are missing or below
    /// the visibility threshold.
    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<Self::Metrics, DetectionGap>;

    /// Form checks for the current point of the attempt
    ///
    /// `is_new_attempt` resets per-attempt trackers before evaluating.
    fn analyze_form(&mut self, metrics: &Self::Metrics, is_new_attempt: bool)
        -> Vec<FeedbackItem>;

    /// Advance the state machine by one frame
    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<Self::State>;

    /// Current state
    fn state(&self) -> Self::State;

    /// Name of the current state
    fn get_state_name(&self) -> &'static str {
        self.state().as_str()
    }

    /// Current counter value
    fn counter(&self) -> ExerciseCounter;

    /// Persistent feedback of the current attempt
    fn feedback(&self) -> Vec<FeedbackItem>;
}

/// Output of one processed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// Exercise being tracked
    pub exercise: ExerciseKind,
    /// State name after this frame
    pub state: &'static str,
    /// Ordered feedback for this frame
    pub feedback: Vec<FeedbackItem>,
    /// Counter after this frame
    pub counter: ExerciseCounter,
}

/// Analyzer for one of the supported exercises
#[derive(Debug)]
pub enum Analyzer {
    /// Squat state machine
    Squat(SquatAnalyzer),
    /// Bicep curl state machine
    BicepCurl(BicepCurlAnalyzer),
    /// Plank hold timer
    Plank(PlankAnalyzer),
    /// Pushup state machine
    Pushup(PushupAnalyzer),
    /// Lunge state machine
    Lunge(LungeAnalyzer),
    /// Jumping jack state machine, optionally timed
    JumpingJack(JumpingJackAnalyzer),
}

fn report<A: ExerciseAnalyzer>(analyzer: &mut A, landmarks: &LandmarkMap) -> FrameReport {
    let update = analyzer.update_state(landmarks);
    FrameReport {
        exercise: A::KIND,
        state: update.state.as_str(),
        feedback: update.feedback,
        counter: analyzer.counter(),
    }
}

impl Analyzer {
    /// Build the analyzer for `kind`
    ///
    /// `clock` is only read by timed exercises.
    #[must_use]
    pub fn for_exercise(kind: ExerciseKind, config: &ThresholdConfig, clock: SharedClock) -> Self {
        match kind {
            ExerciseKind::Squat => Self::Squat(SquatAnalyzer::new(config)),
            ExerciseKind::BicepCurl => Self::BicepCurl(BicepCurlAnalyzer::new(config)),
            ExerciseKind::Plank => Self::Plank(PlankAnalyzer::new(config, clock)),
            ExerciseKind::Pushup => Self::Pushup(PushupAnalyzer::new(config)),
            ExerciseKind::Lunge => Self::Lunge(LungeAnalyzer::new(config)),
            ExerciseKind::JumpingJack => Self::JumpingJack(JumpingJackAnalyzer::new(config, clock)),
        }
    }

    /// Exercise this analyzer tracks
    #[must_use]
    pub const fn kind(&self) -> ExerciseKind {
        match self {
            Self::Squat(_) => ExerciseKind::Squat,
            Self::BicepCurl(_) => ExerciseKind::BicepCurl,
            Self::Plank(_) => ExerciseKind::Plank,
            Self::Pushup(_) => ExerciseKind::Pushup,
            Self::Lunge(_) => ExerciseKind::Lunge,
            Self::JumpingJack(_) => ExerciseKind::JumpingJack,
        }
    }

    /// Analyze one frame
    pub fn process(&mut self, landmarks: &LandmarkMap) -> FrameReport {
        match self {
            Self::Squat(a) => report(a, landmarks),
            Self::BicepCurl(a) => report(a, landmarks),
            Self::Plank(a) => report(a, landmarks),
            Self::Pushup(a) => report(a, landmarks),
            Self::Lunge(a) => report(a, landmarks),
            Self::JumpingJack(a) => report(a, landmarks),
        }
    }

    /// Clear per-attempt data
    pub fn reset(&mut self) {
        match self {
            Self::Squat(a) => a.reset(),
            Self::BicepCurl(a) => a.reset(),
            Self::Plank(a) => a.reset(),
            Self::Pushup(a) => a.reset(),
            Self::Lunge(a) => a.reset(),
            Self::JumpingJack(a) => a.reset(),
        }
    }

    /// Name of the current state
    #[must_use]
    pub fn get_state_name(&self) -> &'static str {
        match self {
            Self::Squat(a) => a.get_state_name(),
            Self::BicepCurl(a) => a.get_state_name(),
            Self::Plank(a) => a.get_state_name(),
            Self::Pushup(a) => a.get_state_name(),
            Self::Lunge(a) => a.get_state_name(),
            Self::JumpingJack(a) => a.get_state_name(),
        }
    }

    /// Current counter value
    #[must_use]
    pub fn counter(&self) -> ExerciseCounter {
        match self {
            Self::Squat(a) => a.counter(),
            Self::BicepCurl(a) => a.counter(),
            Self::Plank(a) => a.counter(),
            Self::Pushup(a) => a.counter(),
            Self::Lunge(a) => a.counter(),
            Self::JumpingJack(a) => a.counter(),
        }
    }

    /// Persistent feedback of the current attempt
    #[must_use]
    pub fn feedback(&self) -> Vec<FeedbackItem> {
        match self {
            Self::Squat(a) => a.feedback(),
            Self::BicepCurl(a) => a.feedback(),
            Self::Plank(a) => a.feedback(),
            Self::Pushup(a) => a.feedback(),
            Self::Lunge(a) => a.feedback(),
            Self::JumpingJack(a) => a.feedback(),
        }
    }

    /// Set the target duration in seconds (zero = untimed)
    ///
    /// Plank holds and jumping jack sets are timed; other exercises ignore it.
    pub fn set_target_duration(&mut self, seconds: f64) {
        match self {
            Self::Plank(plank) => plank.set_target_seconds(seconds),
            Self::JumpingJack(jacks) => jacks.set_target_seconds(seconds),
            _ => {}
        }
    }
}
