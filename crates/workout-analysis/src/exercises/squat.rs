// ABOUTME: Squat state machine driven by the knee angle with torso-lean form checks
// ABOUTME: Counts a rep only after the knee angle reaches depth and returns to standing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::geometry::{angle_deg, find_angle};
use crate::sides::{average_sides, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use workout_core::config::SquatThresholds;
use workout_core::constants::messages::squat as messages;
use workout_core::{
    BodyLandmark, BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority,
    LandmarkMap, Point2, ThresholdConfig,
};

/// Ankle baselines shorter than this fall back to the horizontal axis
const MIN_BASELINE_LENGTH: f64 = 1e-3;

/// Squat states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquatState {
    /// Standing, waiting for the knees to bend
    Idle,
    /// Knees started bending
    SquatStart,
    /// Descending
    SquatDown,
    /// At depth
    SquatHold,
    /// Rising back up
    SquatUp,
    /// Rep finished on this frame
    Completed,
}

impl ExerciseState for SquatState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::SquatStart => "SQUAT_START",
            Self::SquatDown => "SQUAT_DOWN",
            Self::SquatHold => "SQUAT_HOLD",
            Self::SquatUp => "SQUAT_UP",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Per-frame squat measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquatMetrics {
    /// Hip-knee-ankle angle, averaged over visible legs
    pub knee_angle: f64,
    /// Angle of the hip-to-shoulder segment against the ankle baseline (90 = upright)
    pub back_angle: f64,
    /// Forward lean of the torso, `|90 - back_angle|`
    pub forward_lean: f64,
}

/// Squat analyzer
#[derive(Debug, Clone)]
pub struct SquatAnalyzer {
    thresholds: SquatThresholds,
    core: AnalyzerCore,
    state: SquatState,
    last_knee_angle: Option<f64>,
    min_knee_angle: f64,
}

impl SquatAnalyzer {
    /// Create an analyzer reading squat thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig) -> Self {
        Self::with_thresholds(SquatThresholds::from_config(config))
    }

    /// Create an analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: SquatThresholds) -> Self {
        Self {
            thresholds,
            core: AnalyzerCore::new(),
            state: SquatState::Idle,
            last_knee_angle: None,
            min_knee_angle: 180.0,
        }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &SquatThresholds {
        &self.thresholds
    }

    /// Completed reps
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.core.rep_count()
    }

    fn torso(&self, landmarks: &LandmarkMap) -> Option<(Point2, Point2)> {
        let vis = self.thresholds.min_visibility;
        let side = |side: Side| landmarks.visible_all([side.shoulder(), side.hip()], vis);
        match (side(Side::Left), side(Side::Right)) {
            (Some([ls, lh]), Some([rs, rh])) => Some((ls.midpoint(rs), lh.midpoint(rh))),
            (Some([shoulder, hip]), None) | (None, Some([shoulder, hip])) => Some((shoulder, hip)),
            (None, None) => None,
        }
    }

    /// Transition for one frame of valid metrics
    fn step(&mut self, metrics: &SquatMetrics) -> SquatState {
        let t = self.thresholds;
        let angle = metrics.knee_angle;
        let last = self.last_knee_angle.unwrap_or(angle);

        match self.state {
            SquatState::Idle | SquatState::Completed => {
                if angle < t.start_angle {
                    self.reset();
                    self.analyze_form(metrics, true);
                    SquatState::SquatStart
                } else {
                    SquatState::Idle
                }
            }
            SquatState::SquatStart | SquatState::SquatDown if angle >= t.start_angle => {
                if self.state == SquatState::SquatDown {
                    // Stood back up without reaching depth
                    self.core.add(messages::NOT_DEEP_ENOUGH, FeedbackPriority::High);
                }
                SquatState::Idle
            }
            SquatState::SquatStart | SquatState::SquatDown
                if self.min_knee_angle.min(angle) < t.not_deep_enough =>
            {
                let items = self.analyze_form(metrics, false);
                self.core.record(items);
                SquatState::SquatHold
            }
            SquatState::SquatStart if angle < last => SquatState::SquatDown,
            SquatState::SquatStart => SquatState::SquatStart,
            SquatState::SquatDown => {
                self.min_knee_angle = self.min_knee_angle.min(angle);
                SquatState::SquatDown
            }
            SquatState::SquatHold => {
                let items = self.analyze_form(metrics, false);
                self.core.record(items);
                if angle > last {
                    SquatState::SquatUp
                } else {
                    SquatState::SquatHold
                }
            }
            SquatState::SquatUp => {
                if angle >= t.start_angle {
                    self.complete_rep();
                    SquatState::Completed
                } else {
                    SquatState::SquatUp
                }
            }
        }
    }

    fn complete_rep(&mut self) {
        let clean = self.core.complete_rep();
        if clean {
            self.core.add(messages::CORRECT_FORM, FeedbackPriority::Success);
        }
        info!(
            exercise = "squat",
            reps = self.core.rep_count(),
            clean,
            min_knee_angle = self.min_knee_angle,
            "Rep completed"
        );
    }
}

impl ExerciseAnalyzer for SquatAnalyzer {
    type State = SquatState;
    type Metrics = SquatMetrics;

    const KIND: ExerciseKind = ExerciseKind::Squat;

    fn reset(&mut self) {
        self.core.begin_attempt();
        self.min_knee_angle = 180.0;
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<SquatMetrics, DetectionGap> {
        let vis = self.thresholds.min_visibility;
        let knee = |side: Side| {
            landmarks
                .visible_all([side.hip(), side.knee(), side.ankle()], vis)
                .map(|[hip, knee, ankle]| angle_deg(hip, knee, ankle))
        };
        let knee_angle = average_sides(knee(Side::Left), knee(Side::Right))
            .ok_or(DetectionGap::new(BodyPart::Legs))?;

        let (shoulder, hip) = self
            .torso(landmarks)
            .ok_or(DetectionGap::new(BodyPart::Torso))?;

        let (base_a, base_b) = match landmarks
            .visible_all([BodyLandmark::LeftAnkle, BodyLandmark::RightAnkle], vis)
        {
            Some([left, right]) if left.distance(right) > MIN_BASELINE_LENGTH => (left, right),
            _ => (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)),
        };
        let back_angle = find_angle(hip, shoulder, base_a, base_b);

        Ok(SquatMetrics {
            knee_angle,
            back_angle,
            forward_lean: (90.0 - back_angle).abs(),
        })
    }

    fn analyze_form(&mut self, metrics: &SquatMetrics, is_new_attempt: bool) -> Vec<FeedbackItem> {
        if is_new_attempt {
            self.min_knee_angle = metrics.knee_angle;
            return Vec::new();
        }
        self.min_knee_angle = self.min_knee_angle.min(metrics.knee_angle);

        let t = &self.thresholds;
        let mut items = Vec::new();
        if self.min_knee_angle < t.too_deep {
            items.push(FeedbackItem::new(messages::TOO_DEEP, FeedbackPriority::High));
        }
        if metrics.forward_lean < t.forward_bend_too_little {
            items.push(FeedbackItem::new(
                messages::BEND_FORWARD_MORE,
                FeedbackPriority::High,
            ));
        } else if metrics.forward_lean > t.forward_bend_too_much {
            items.push(FeedbackItem::new(
                messages::FORWARD_BEND_TOO_MUCH,
                FeedbackPriority::High,
            ));
        }
        items
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<SquatState> {
        if self.state == SquatState::Completed {
            self.state = SquatState::Idle;
        }

        let metrics = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                debug!(exercise = "squat", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };

        let angle = metrics.knee_angle;
        let next = self.step(&metrics);

        if next != self.state {
            debug!(
                exercise = "squat",
                from = self.state.as_str(),
                to = next.as_str(),
                knee_angle = angle,
                "State transition"
            );
        }
        self.state = next;
        self.last_knee_angle = Some(angle);
        self.core.update(next, None)
    }

    fn state(&self) -> SquatState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        self.core.reps_counter()
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}
