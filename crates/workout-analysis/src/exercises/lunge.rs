// ABOUTME: Lunge state machine driven by the more bent of the two knees
// ABOUTME: Front and back knee ranges are checked at the bottom of each rep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::geometry::{angle_deg, inclination_from_vertical};
use crate::sides::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use workout_core::config::LungeThresholds;
use workout_core::constants::messages::lunge as messages;
use workout_core::{
    BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority, LandmarkMap,
    ThresholdConfig,
};

/// Lunge states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LungeState {
    /// Standing
    Idle,
    /// Knees started bending
    LungeStart,
    /// Lowering past the descent angle
    LungeDown,
    /// At the bottom
    LungeHold,
    /// Rising
    LungeUp,
    /// Rep finished on this frame
    Completed,
}

impl ExerciseState for LungeState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::LungeStart => "LUNGE_START",
            Self::LungeDown => "LUNGE_DOWN",
            Self::LungeHold => "LUNGE_HOLD",
            Self::LungeUp => "LUNGE_UP",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Per-frame lunge measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LungeMetrics {
    /// Left hip-knee-ankle angle
    pub left_knee_angle: f64,
    /// Right hip-knee-ankle angle
    pub right_knee_angle: f64,
    /// Leg whose shin is closer to vertical on this frame
    pub front_side: Side,
}

impl LungeMetrics {
    /// The more bent knee, which drives the state machine
    #[must_use]
    pub fn knee_angle(&self) -> f64 {
        self.left_knee_angle.min(self.right_knee_angle)
    }

    /// `(front, back)` knee angles with `front` as the front leg
    #[must_use]
    pub const fn front_and_back(&self, front: Side) -> (f64, f64) {
        match front {
            Side::Left => (self.left_knee_angle, self.right_knee_angle),
            Side::Right => (self.right_knee_angle, self.left_knee_angle),
        }
    }
}

/// Lunge analyzer
#[derive(Debug, Clone)]
pub struct LungeAnalyzer {
    thresholds: LungeThresholds,
    core: AnalyzerCore,
    state: LungeState,
    front: Side,
    last_knee_angle: Option<f64>,
    min_knee_angle: f64,
    min_front_angle: f64,
    min_back_angle: f64,
}

impl LungeAnalyzer {
    /// Create an analyzer reading lunge thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig) -> Self {
        Self::with_thresholds(LungeThresholds::from_config(config))
    }

    /// Create an analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: LungeThresholds) -> Self {
        Self {
            thresholds,
            core: AnalyzerCore::new(),
            state: LungeState::Idle,
            front: Side::Left,
            last_knee_angle: None,
            min_knee_angle: 180.0,
            min_front_angle: 180.0,
            min_back_angle: 180.0,
        }
    }

    /// Completed reps
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.core.rep_count()
    }

    /// Front leg of the current attempt
    #[must_use]
    pub const fn front_side(&self) -> Side {
        self.front
    }

    fn knee_angle(landmarks: &LandmarkMap, side: Side, vis: f64) -> Option<(f64, f64)> {
        landmarks
            .visible_all([side.hip(), side.knee(), side.ankle()], vis)
            .map(|[hip, knee, ankle]| {
                (angle_deg(hip, knee, ankle), inclination_from_vertical(ankle, knee))
            })
    }

    fn track(&mut self, metrics: &LungeMetrics) {
        let (front, back) = metrics.front_and_back(self.front);
        self.min_knee_angle = self.min_knee_angle.min(metrics.knee_angle());
        self.min_front_angle = self.min_front_angle.min(front);
        self.min_back_angle = self.min_back_angle.min(back);
    }

    /// Transition for one frame of valid metrics
    fn step(&mut self, metrics: &LungeMetrics) -> LungeState {
        let t = self.thresholds;
        let angle = metrics.knee_angle();
        let last = self.last_knee_angle.unwrap_or(angle);

        if matches!(self.state, LungeState::Idle | LungeState::Completed) {
            if angle >= t.start_angle {
                return LungeState::Idle;
            }
            self.reset();
            let items = self.analyze_form(metrics, true);
            self.core.record(items);
            return LungeState::LungeStart;
        }

        self.track(metrics);
        match self.state {
            LungeState::LungeStart if self.min_knee_angle < t.down_angle => LungeState::LungeDown,
            LungeState::LungeStart if angle > last => LungeState::Idle,
            LungeState::LungeDown if angle > last => {
                let items = self.analyze_form(metrics, false);
                self.core.record(items);
                if angle >= t.up_angle {
                    self.complete_rep();
                    LungeState::Completed
                } else {
                    LungeState::LungeHold
                }
            }
            LungeState::LungeHold | LungeState::LungeUp if angle >= t.up_angle => {
                self.complete_rep();
                LungeState::Completed
            }
            LungeState::LungeHold if angle > last => LungeState::LungeUp,
            state => state,
        }
    }

    fn complete_rep(&mut self) {
        let clean = self.core.complete_rep();
        if clean {
            self.core.add(messages::CORRECT_FORM, FeedbackPriority::Success);
        }
        info!(
            exercise = "lunge",
            reps = self.core.rep_count(),
            clean,
            front = ?self.front,
            min_front_angle = self.min_front_angle,
            min_back_angle = self.min_back_angle,
            "Rep completed"
        );
    }
}

impl ExerciseAnalyzer for LungeAnalyzer {
    type State = LungeState;
    type Metrics = LungeMetrics;

    const KIND: ExerciseKind = ExerciseKind::Lunge;

    fn reset(&mut self) {
        self.core.begin_attempt();
        self.min_knee_angle = 180.0;
        self.min_front_angle = 180.0;
        self.min_back_angle = 180.0;
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<LungeMetrics, DetectionGap> {
        let vis = self.thresholds.min_visibility;
        let gap = DetectionGap::new(BodyPart::Legs);
        let (left_knee_angle, left_shin) = Self::knee_angle(landmarks, Side::Left, vis).ok_or(gap)?;
        let (right_knee_angle, right_shin) =
            Self::knee_angle(landmarks, Side::Right, vis).ok_or(gap)?;
        let front_side = if left_shin <= right_shin {
            Side::Left
        } else {
            Side::Right
        };
        Ok(LungeMetrics {
            left_knee_angle,
            right_knee_angle,
            front_side,
        })
    }

    fn analyze_form(&mut self, metrics: &LungeMetrics, is_new_attempt: bool) -> Vec<FeedbackItem> {
        if is_new_attempt {
            // The front leg stays fixed for the whole rep
            self.front = metrics.front_side;
            self.track(metrics);
            return Vec::new();
        }

        let t = &self.thresholds;
        let mut items = Vec::new();
        if self.min_front_angle < t.front_knee_min {
            items.push(FeedbackItem::new(messages::FRONT_KNEE_TOO_BENT, FeedbackPriority::High));
        } else if self.min_front_angle > t.front_knee_max {
            items.push(FeedbackItem::new(messages::BEND_FRONT_KNEE, FeedbackPriority::High));
        }
        if self.min_back_angle < t.back_knee_min {
            items.push(FeedbackItem::new(messages::BACK_KNEE_TOO_BENT, FeedbackPriority::High));
        } else if self.min_back_angle > t.back_knee_max {
            items.push(FeedbackItem::new(messages::LOWER_BACK_KNEE, FeedbackPriority::High));
        }
        items
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<LungeState> {
        if self.state == LungeState::Completed {
            self.state = LungeState::Idle;
        }

        let metrics = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                debug!(exercise = "lunge", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };

        let angle = metrics.knee_angle();
        let previous = self.state;
        let next = self.step(&metrics);

        if next != previous {
            debug!(
                exercise = "lunge",
                from = previous.as_str(),
                to = next.as_str(),
                knee_angle = angle,
                "State transition"
            );
        }
        self.state = next;
        self.last_knee_angle = Some(angle);
        self.core.update(next, None)
    }

    fn state(&self) -> LungeState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        self.core.reps_counter()
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}
