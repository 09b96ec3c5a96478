// ABOUTME: Bicep curl state machine with side selection, elbow-drift smoothing, and swing detection
// ABOUTME: Form checks fire at the top of the curl and at full extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::geometry::{angle_deg, find_angle, inclination_from_vertical};
use crate::sides::{select_more_flexed, Side};
use crate::smoothing::RollingWindow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use workout_core::config::BicepCurlThresholds;
use workout_core::constants::messages::bicep_curl as messages;
use workout_core::{
    BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority, LandmarkMap,
    ThresholdConfig,
};

/// Bicep curl states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BicepCurlState {
    /// Arm extended, waiting for flexion
    Idle,
    /// Flexion started
    CurlStart,
    /// Lifting
    CurlUp,
    /// At the top of the curl
    CurlHold,
    /// Lowering
    CurlDown,
    /// Rep finished on this frame
    Completed,
}

impl ExerciseState for BicepCurlState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::CurlStart => "CURL_START",
            Self::CurlUp => "CURL_UP",
            Self::CurlHold => "CURL_HOLD",
            Self::CurlDown => "CURL_DOWN",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Per-frame curl measurements on the active arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BicepCurlMetrics {
    /// Arm being tracked
    pub side: Side,
    /// Shoulder-elbow-wrist angle
    pub elbow_angle: f64,
    /// Angle between the upper arm and the shoulder-hip line, `None` without a hip
    pub elbow_torso_angle: Option<f64>,
    /// Lean of the hip-shoulder segment from vertical, `None` without a hip
    pub torso_inclination: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Swing {
    Slight,
    Excessive,
}

/// Bicep curl analyzer
#[derive(Debug, Clone)]
pub struct BicepCurlAnalyzer {
    thresholds: BicepCurlThresholds,
    core: AnalyzerCore,
    state: BicepCurlState,
    active_side: Option<Side>,
    last_elbow_angle: Option<f64>,
    min_elbow_angle: f64,
    max_elbow_angle: f64,
    max_extension: f64,
    torso_baseline: Option<f64>,
    elbow_torso: RollingWindow,
    max_elbow_drift: f64,
    swing: Option<Swing>,
    reported_swing: Option<Swing>,
    low_confidence_frames: usize,
}

impl BicepCurlAnalyzer {
    /// Create an analyzer reading curl thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig) -> Self {
        Self::with_thresholds(BicepCurlThresholds::from_config(config))
    }

    /// Create an analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: BicepCurlThresholds) -> Self {
        Self {
            elbow_torso: RollingWindow::new(thresholds.smoothing_window),
            thresholds,
            core: AnalyzerCore::new(),
            state: BicepCurlState::Idle,
            active_side: None,
            last_elbow_angle: None,
            min_elbow_angle: 180.0,
            max_elbow_angle: 0.0,
            max_extension: 0.0,
            torso_baseline: None,
            max_elbow_drift: 0.0,
            swing: None,
            reported_swing: None,
            low_confidence_frames: 0,
        }
    }

    /// Completed reps
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.core.rep_count()
    }

    /// Completed reps with corrective feedback
    #[must_use]
    pub const fn error_reps(&self) -> u32 {
        self.core.error_reps()
    }

    /// Arm locked for the current rep
    #[must_use]
    pub const fn active_side(&self) -> Option<Side> {
        self.active_side
    }

    /// Per-frame tracking of extrema, elbow drift, and body swing
    fn track(&mut self, metrics: &BicepCurlMetrics) {
        self.min_elbow_angle = self.min_elbow_angle.min(metrics.elbow_angle);
        self.max_elbow_angle = self.max_elbow_angle.max(metrics.elbow_angle);

        if let Some(elbow_torso) = metrics.elbow_torso_angle {
            let smoothed = self.elbow_torso.push(elbow_torso);
            self.max_elbow_drift = self.max_elbow_drift.max(smoothed);
        }

        let Some(inclination) = metrics.torso_inclination else {
            return;
        };
        let Some(baseline) = self.torso_baseline else {
            // First sight of the hips in this rep
            self.torso_baseline = Some(inclination);
            return;
        };
        let deviation = (inclination - baseline).abs();
        if deviation > self.thresholds.body_swing {
            let severity = if deviation > self.thresholds.body_swing_excessive {
                Swing::Excessive
            } else {
                Swing::Slight
            };
            self.swing = self.swing.max(Some(severity));
        }
    }

    fn note_low_confidence(&mut self) {
        self.low_confidence_frames += 1;
        if self.low_confidence_frames > self.thresholds.max_low_confidence_frames {
            warn!(
                exercise = "bicep_curl",
                frames = self.low_confidence_frames,
                "Elbow angle unavailable for too many consecutive frames"
            );
            self.core.add(messages::LOW_CONFIDENCE, FeedbackPriority::Low);
            self.low_confidence_frames = 0;
        }
    }

    fn boundary_checks(&mut self) -> Vec<FeedbackItem> {
        let mut items = Vec::new();
        if self.max_elbow_drift > self.thresholds.elbow_drift {
            items.push(FeedbackItem::new(messages::ELBOW_DRIFT, FeedbackPriority::High));
        }
        if self.swing > self.reported_swing {
            // The worse swing replaces the milder message
            if self.reported_swing == Some(Swing::Slight) {
                self.core.remove(messages::SLIGHT_SWING);
            }
            let text = match self.swing {
                Some(Swing::Excessive) => messages::EXCESSIVE_SWING,
                _ => messages::SLIGHT_SWING,
            };
            items.push(FeedbackItem::new(text, FeedbackPriority::High));
            self.reported_swing = self.swing;
        }
        items
    }

    /// Transition for one frame of valid metrics
    fn step(&mut self, metrics: &BicepCurlMetrics) -> BicepCurlState {
        let start_angle = self.thresholds.start_angle;
        let angle = metrics.elbow_angle;
        let last = self.last_elbow_angle.unwrap_or(angle);

        if self.state != BicepCurlState::Idle {
            self.track(metrics);
        }

        match self.state {
            BicepCurlState::Idle | BicepCurlState::Completed => {
                if angle < start_angle {
                    self.reset();
                    self.active_side = Some(metrics.side);
                    self.analyze_form(metrics, true);
                    self.track(metrics);
                    BicepCurlState::CurlStart
                } else {
                    BicepCurlState::Idle
                }
            }
            BicepCurlState::CurlStart => {
                if angle >= start_angle {
                    self.active_side = None;
                    BicepCurlState::Idle
                } else if angle < last {
                    BicepCurlState::CurlUp
                } else {
                    BicepCurlState::CurlStart
                }
            }
            BicepCurlState::CurlUp => self.on_curl_up(metrics, last),
            BicepCurlState::CurlHold => {
                if angle > last {
                    self.max_extension = angle;
                    BicepCurlState::CurlDown
                } else {
                    BicepCurlState::CurlHold
                }
            }
            BicepCurlState::CurlDown => self.on_curl_down(metrics, last),
        }
    }

    fn on_curl_up(&mut self, metrics: &BicepCurlMetrics, last: f64) -> BicepCurlState {
        let angle = metrics.elbow_angle;
        let range = self.max_elbow_angle - self.min_elbow_angle;
        if angle >= self.thresholds.start_angle {
            debug!(exercise = "bicep_curl", range, "Curl aborted");
            self.active_side = None;
            return BicepCurlState::Idle;
        }
        if angle < last || range < self.thresholds.min_range {
            return BicepCurlState::CurlUp;
        }
        // Top checks read the hold state
        self.state = BicepCurlState::CurlHold;
        let items = self.analyze_form(metrics, false);
        self.core.record(items);
        BicepCurlState::CurlHold
    }

    fn on_curl_down(&mut self, metrics: &BicepCurlMetrics, last: f64) -> BicepCurlState {
        let angle = metrics.elbow_angle;
        let t = &self.thresholds;
        self.max_extension = self.max_extension.max(angle);
        let extended = (angle >= t.down_angle && angle <= last) || angle >= t.start_angle;
        if !extended {
            return BicepCurlState::CurlDown;
        }
        self.state = BicepCurlState::Completed;
        let items = self.analyze_form(metrics, false);
        self.core.record(items);
        self.finish_rep();
        BicepCurlState::Completed
    }

    fn finish_rep(&mut self) {
        let clean = self.core.complete_rep();
        if clean {
            self.core.add(messages::CORRECT_FORM, FeedbackPriority::Success);
        }
        info!(
            exercise = "bicep_curl",
            reps = self.core.rep_count(),
            error_reps = self.core.error_reps(),
            clean,
            side = ?self.active_side,
            "Rep completed"
        );
        self.active_side = None;
    }
}

impl ExerciseAnalyzer for BicepCurlAnalyzer {
    type State = BicepCurlState;
    type Metrics = BicepCurlMetrics;

    const KIND: ExerciseKind = ExerciseKind::BicepCurl;

    fn reset(&mut self) {
        self.core.begin_attempt();
        self.min_elbow_angle = 180.0;
        self.max_elbow_angle = 0.0;
        self.max_extension = 0.0;
        self.torso_baseline = None;
        self.elbow_torso.clear();
        self.max_elbow_drift = 0.0;
        self.swing = None;
        self.reported_swing = None;
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<BicepCurlMetrics, DetectionGap> {
        let vis = self.thresholds.min_visibility;
        let elbow_angle_of = |side: Side| {
            landmarks
                .visible_all([side.shoulder(), side.elbow(), side.wrist()], vis)
                .map(|[shoulder, elbow, wrist]| angle_deg(shoulder, elbow, wrist))
        };
        let (side, elbow_angle) = match self.active_side {
            Some(side) => elbow_angle_of(side).map(|angle| (side, angle)),
            None => select_more_flexed(elbow_angle_of(Side::Left), elbow_angle_of(Side::Right)),
        }
        .ok_or(DetectionGap::new(BodyPart::Arms))?;

        let torso = landmarks.visible_all([side.shoulder(), side.elbow(), side.hip()], vis);

        Ok(BicepCurlMetrics {
            side,
            elbow_angle,
            elbow_torso_angle: torso
                .map(|[shoulder, elbow, hip]| find_angle(shoulder, elbow, shoulder, hip)),
            torso_inclination: torso
                .map(|[shoulder, _, hip]| inclination_from_vertical(hip, shoulder)),
        })
    }

    fn analyze_form(
        &mut self,
        metrics: &BicepCurlMetrics,
        is_new_attempt: bool,
    ) -> Vec<FeedbackItem> {
        if is_new_attempt {
            self.min_elbow_angle = metrics.elbow_angle;
            self.max_elbow_angle = metrics.elbow_angle;
            self.torso_baseline = metrics.torso_inclination;
            return Vec::new();
        }

        let mut items = Vec::new();
        match self.state {
            BicepCurlState::CurlHold if self.min_elbow_angle > self.thresholds.not_high_enough => {
                items.push(FeedbackItem::new(messages::CURL_HIGHER, FeedbackPriority::High));
            }
            BicepCurlState::Completed if self.max_extension < self.thresholds.not_low_enough => {
                items.push(FeedbackItem::new(messages::EXTEND_FULLY, FeedbackPriority::High));
            }
            _ => {}
        }
        items.extend(self.boundary_checks());
        items
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<BicepCurlState> {
        if self.state == BicepCurlState::Completed {
            self.state = BicepCurlState::Idle;
        }

        let metrics = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                if gap.body_part == BodyPart::Arms {
                    self.note_low_confidence();
                }
                debug!(exercise = "bicep_curl", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };
        if metrics.elbow_torso_angle.is_some() {
            self.low_confidence_frames = 0;
        } else {
            // The arm still drives the rep; only torso-based checks are skipped
            self.note_low_confidence();
        }

        let angle = metrics.elbow_angle;
        let previous = self.state;
        let next = self.step(&metrics);

        if next != previous {
            debug!(
                exercise = "bicep_curl",
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

    fn state(&self) -> BicepCurlState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        self.core.reps_counter()
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}
