// ABOUTME: Pushup state machine driven by the elbow angle with smoothed hip-alignment checks
// ABOUTME: Completion uses a lower angle than the start threshold so jitter cannot double count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::geometry::{angle_deg, signed_line_deviation};
use crate::sides::{average_sides, Side};
use crate::smoothing::RollingWindow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use workout_core::config::PushupThresholds;
use workout_core::constants::messages::pushup as messages;
use workout_core::{
    BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority, LandmarkMap,
    ThresholdConfig,
};

/// Pushup states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushupState {
    /// Arms extended
    Idle,
    /// Elbows started bending
    PushupStart,
    /// Lowering
    PushupDown,
    /// At depth
    PushupHold,
    /// Pushing back up
    PushupUp,
    /// Rep finished on this frame
    Completed,
}

impl ExerciseState for PushupState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::PushupStart => "PUSHUP_START",
            Self::PushupDown => "PUSHUP_DOWN",
            Self::PushupHold => "PUSHUP_HOLD",
            Self::PushupUp => "PUSHUP_UP",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Per-frame pushup measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushupMetrics {
    /// Shoulder-elbow-wrist angle, averaged over visible arms
    pub elbow_angle: f64,
    /// Raw signed hip deviation from the shoulder-ankle line, percent of its length
    pub hip_deviation: f64,
}

/// Pushup analyzer
#[derive(Debug, Clone)]
pub struct PushupAnalyzer {
    thresholds: PushupThresholds,
    core: AnalyzerCore,
    state: PushupState,
    last_elbow_angle: Option<f64>,
    min_elbow_angle: f64,
    hip_alignment: RollingWindow,
}

impl PushupAnalyzer {
    /// Create an analyzer reading pushup thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig) -> Self {
        Self::with_thresholds(PushupThresholds::from_config(config))
    }

    /// Create an analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: PushupThresholds) -> Self {
        Self {
            hip_alignment: RollingWindow::new(thresholds.smoothing_window),
            thresholds,
            core: AnalyzerCore::new(),
            state: PushupState::Idle,
            last_elbow_angle: None,
            min_elbow_angle: 180.0,
        }
    }

    /// Completed reps
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.core.rep_count()
    }

    fn hip_checks(&self, smoothed_deviation: f64) -> Option<FeedbackItem> {
        if smoothed_deviation < -self.thresholds.hip_sag {
            Some(FeedbackItem::new(messages::HIPS_UP, FeedbackPriority::High))
        } else if smoothed_deviation > self.thresholds.hip_pike {
            Some(FeedbackItem::new(messages::HIPS_DOWN, FeedbackPriority::High))
        } else {
            None
        }
    }

    /// Transition for one frame of valid metrics
    fn step(&mut self, metrics: &PushupMetrics) -> PushupState {
        let t = self.thresholds;
        let angle = metrics.elbow_angle;
        let last = self.last_elbow_angle.unwrap_or(angle);

        if matches!(self.state, PushupState::Idle | PushupState::Completed) {
            if angle >= t.start_angle {
                return PushupState::Idle;
            }
            self.reset();
            let items = self.analyze_form(metrics, true);
            self.core.record(items);
            return PushupState::PushupStart;
        }

        let reached_depth = matches!(self.state, PushupState::PushupStart | PushupState::PushupDown)
            && angle < t.start_angle
            && self.min_elbow_angle.min(angle) < t.not_low_enough;
        if reached_depth {
            // Depth checks read the hold state
            self.state = PushupState::PushupHold;
        }
        let items = self.analyze_form(metrics, false);
        self.core.record(items);
        if reached_depth {
            return PushupState::PushupHold;
        }

        match self.state {
            PushupState::PushupStart if angle >= t.start_angle => PushupState::Idle,
            PushupState::PushupStart if angle < last => PushupState::PushupDown,
            PushupState::PushupDown if angle >= t.start_angle => {
                self.core.add(messages::LOWER_CHEST, FeedbackPriority::High);
                PushupState::Idle
            }
            PushupState::PushupHold if angle > last => PushupState::PushupUp,
            PushupState::PushupUp if angle >= t.complete_angle => {
                self.complete_rep();
                PushupState::Completed
            }
            state => state,
        }
    }

    fn complete_rep(&mut self) {
        let clean = self.core.complete_rep();
        if clean {
            self.core.add(messages::CORRECT_FORM, FeedbackPriority::Success);
        }
        info!(
            exercise = "pushup",
            reps = self.core.rep_count(),
            clean,
            min_elbow_angle = self.min_elbow_angle,
            "Rep completed"
        );
    }
}

impl ExerciseAnalyzer for PushupAnalyzer {
    type State = PushupState;
    type Metrics = PushupMetrics;

    const KIND: ExerciseKind = ExerciseKind::Pushup;

    fn reset(&mut self) {
        self.core.begin_attempt();
        self.min_elbow_angle = 180.0;
        self.hip_alignment.clear();
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<PushupMetrics, DetectionGap> {
        let vis = self.thresholds.min_visibility;
        let elbow = |side: Side| {
            landmarks
                .visible_all([side.shoulder(), side.elbow(), side.wrist()], vis)
                .map(|[shoulder, elbow, wrist]| angle_deg(shoulder, elbow, wrist))
        };
        let elbow_angle = average_sides(elbow(Side::Left), elbow(Side::Right))
            .ok_or(DetectionGap::new(BodyPart::Arms))?;

        let deviation = |side: Side| {
            landmarks
                .visible_all([side.shoulder(), side.hip(), side.ankle()], vis)
                .and_then(|[shoulder, hip, ankle]| signed_line_deviation(shoulder, hip, ankle))
        };
        let hip_deviation = average_sides(deviation(Side::Left), deviation(Side::Right))
            .ok_or(DetectionGap::new(BodyPart::BodyLine))?;

        Ok(PushupMetrics {
            elbow_angle,
            hip_deviation,
        })
    }

    fn analyze_form(&mut self, metrics: &PushupMetrics, is_new_attempt: bool) -> Vec<FeedbackItem> {
        if is_new_attempt {
            self.min_elbow_angle = metrics.elbow_angle;
            self.hip_alignment.clear();
        } else {
            self.min_elbow_angle = self.min_elbow_angle.min(metrics.elbow_angle);
        }

        let smoothed = self.hip_alignment.push(metrics.hip_deviation);
        let mut items: Vec<FeedbackItem> = self.hip_checks(smoothed).into_iter().collect();
        if matches!(self.state, PushupState::PushupHold)
            && self.min_elbow_angle < self.thresholds.too_low
        {
            items.push(FeedbackItem::new(messages::TOO_LOW, FeedbackPriority::High));
        }
        items
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<PushupState> {
        if self.state == PushupState::Completed {
            self.state = PushupState::Idle;
        }

        let metrics = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                debug!(exercise = "pushup", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };

        let angle = metrics.elbow_angle;
        let previous = self.state;
        let next = self.step(&metrics);

        if next != previous {
            debug!(
                exercise = "pushup",
                from = previous.as_str(),
                to = next.as_str(),
                elbow_angle = angle,
                "State transition"
            );
        }
        self.state = next;
        self.last_elbow_angle = Some(angle);
        self.core.update(next, None)
    }

    fn state(&self) -> PushupState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        self.core.reps_counter()
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}
