// ABOUTME: Per-client workout session owning exactly one exercise analyzer
// ABOUTME: Tracks targets, sets, and feedback statistics and produces per-frame snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Sessions
//!
//! A [`WorkoutSession`] is the unit of isolation: each tracked client gets its
//! own session, and each session owns its own [`Analyzer`] with its own
//! feedback manager, smoothing windows, and state machine.

/// Feedback emission statistics
pub mod stats;

pub use stats::{IssueCount, SessionFeedbackStats};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;
use workout_analysis::{Analyzer, ExerciseCounter, FrameReport, SharedClock};
use workout_core::{ExerciseKind, FeedbackItem, LandmarkMap, ThresholdConfig, TrackerResult};

/// Targets chosen for the selected exercise
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseTargets {
    /// Reps per set, for rep-based exercises
    pub reps: Option<u32>,
    /// Number of sets
    pub sets: Option<u32>,
    /// Hold or set duration in seconds, for timed exercises
    pub duration_seconds: Option<f64>,
}

impl ExerciseTargets {
    /// Targets for a rep-based exercise
    #[must_use]
    pub const fn reps(sets: u32, reps: u32) -> Self {
        Self {
            reps: Some(reps),
            sets: Some(sets),
            duration_seconds: None,
        }
    }

    /// Targets for a timed exercise
    #[must_use]
    pub const fn timed(sets: u32, duration_seconds: f64) -> Self {
        Self {
            reps: None,
            sets: Some(sets),
            duration_seconds: Some(duration_seconds),
        }
    }
}

/// Session view after one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Session the frame belongs to
    pub session_id: Uuid,
    /// Zero-based index of the frame within the session
    pub frame_index: u64,
    /// Exercise being tracked
    pub exercise: ExerciseKind,
    /// State name after this frame
    pub state: &'static str,
    /// Ordered feedback for this frame
    pub feedback: Vec<FeedbackItem>,
    /// Completed reps, or completed holds for timed exercises
    pub rep_count: u32,
    /// Reps completed with corrective feedback
    pub error_reps: u32,
    /// One-based set currently in progress
    pub current_set: u32,
    /// Hold time of the current attempt in seconds, timed exercises only
    pub elapsed_seconds: Option<f64>,
    /// Seconds left to the hold target, timed exercises with a target only
    pub remaining_seconds: Option<f64>,
    /// Targets in effect
    pub targets: ExerciseTargets,
    /// Whether progress is measured in time (plank holds, timed jumping jack sets)
    pub is_timed: bool,
}

/// One tracked client's workout
#[derive(Debug)]
pub struct WorkoutSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: ThresholdConfig,
    clock: SharedClock,
    analyzer: Analyzer,
    targets: ExerciseTargets,
    stats: SessionFeedbackStats,
    active_feedback: HashSet<String>,
    frames: u64,
}

impl WorkoutSession {
    /// Start a session tracking `exercise`
    ///
    /// `clock` drives hold timing for timed exercises.
    #[must_use]
    pub fn new(exercise: ExerciseKind, config: ThresholdConfig, clock: SharedClock) -> Self {
        let analyzer = Analyzer::for_exercise(exercise, &config, clock.clone());
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            config,
            clock,
            analyzer,
            targets: ExerciseTargets::default(),
            stats: SessionFeedbackStats::new(),
            active_feedback: HashSet::new(),
            frames: 0,
        };
        info!(session_id = %session.id, exercise = %exercise, "Workout session started");
        session
    }

    /// Builder-style targets for the initial exercise
    #[must_use]
    pub fn with_targets(mut self, targets: ExerciseTargets) -> Self {
        self.apply_targets(targets);
        self
    }

    /// Switch to the exercise called `name`
    ///
    /// The previous analyzer and its counters are discarded; session statistics
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns [`workout_core::TrackerError::UnknownExercise`] if `name` is not a
    /// supported exercise; the current analyzer is left untouched.
    pub fn select_exercise(
        &mut self,
        name: &str,
        targets: ExerciseTargets,
    ) -> TrackerResult<ExerciseKind> {
        let kind = ExerciseKind::from_name(name)?;
        self.select_kind(kind, targets);
        Ok(kind)
    }

    /// Switch to `kind` with a fresh analyzer
    pub fn select_kind(&mut self, kind: ExerciseKind, targets: ExerciseTargets) {
        self.analyzer = Analyzer::for_exercise(kind, &self.config, self.clock.clone());
        self.active_feedback.clear();
        self.apply_targets(targets);
        info!(
            session_id = %self.id,
            exercise = %kind,
            target_reps = ?targets.reps,
            target_sets = ?targets.sets,
            target_duration = ?targets.duration_seconds,
            "Exercise selected"
        );
    }

    fn apply_targets(&mut self, targets: ExerciseTargets) {
        self.targets = targets;
        self.analyzer
            .set_target_duration(targets.duration_seconds.unwrap_or(0.0));
    }

    /// Analyze one frame
    pub fn process_frame(&mut self, landmarks: &LandmarkMap) -> SessionSnapshot {
        let report = self.analyzer.process(landmarks);
        self.record_emissions();
        let snapshot = self.snapshot(report);
        self.frames = self.frames.saturating_add(1);
        snapshot
    }

    /// Count texts that newly entered the analyzer's persistent feedback
    fn record_emissions(&mut self) {
        let exercise = self.analyzer.kind();
        let current = self.analyzer.feedback();
        for item in &current {
            if !self.active_feedback.contains(&item.text) {
                self.stats.record(exercise, item);
            }
        }
        self.active_feedback = current.into_iter().map(|item| item.text).collect();
    }

    fn snapshot(&self, report: FrameReport) -> SessionSnapshot {
        let (elapsed_seconds, remaining_seconds, is_timed) = match report.counter {
            ExerciseCounter::Hold {
                elapsed_seconds,
                remaining_seconds,
                ..
            } => (Some(elapsed_seconds), remaining_seconds, true),
            ExerciseCounter::Reps { .. } => (None, None, false),
        };
        SessionSnapshot {
            session_id: self.id,
            frame_index: self.frames,
            exercise: report.exercise,
            state: report.state,
            feedback: report.feedback,
            rep_count: report.counter.completions(),
            error_reps: report.counter.error_reps(),
            current_set: self.current_set_for(&report.counter),
            elapsed_seconds,
            remaining_seconds,
            targets: self.targets,
            is_timed,
        }
    }

    fn current_set_for(&self, counter: &ExerciseCounter) -> u32 {
        let completions = counter.completions();
        let per_set = match counter {
            ExerciseCounter::Reps { .. } => self.targets.reps.unwrap_or(0),
            // Each completed hold finishes a set
            ExerciseCounter::Hold { .. } => 1,
        };
        let set = completions
            .checked_div(per_set)
            .map_or(1, |done| done.saturating_add(1));
        self.targets.sets.filter(|sets| *sets > 0).map_or(set, |sets| set.min(sets))
    }

    /// One-based set currently in progress, capped at the target set count
    #[must_use]
    pub fn current_set(&self) -> u32 {
        self.current_set_for(&self.analyzer.counter())
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Wall-clock start of the session
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Exercise being tracked
    #[must_use]
    pub const fn exercise(&self) -> ExerciseKind {
        self.analyzer.kind()
    }

    /// Targets in effect
    #[must_use]
    pub const fn targets(&self) -> ExerciseTargets {
        self.targets
    }

    /// Analyzer of the current exercise
    #[must_use]
    pub const fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Feedback statistics across every exercise of the session
    #[must_use]
    pub const fn stats(&self) -> &SessionFeedbackStats {
        &self.stats
    }

    /// Forget the feedback statistics
    pub fn clear_stats(&mut self) {
        self.stats.clear();
    }

    /// Frames processed so far
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames
    }
}
