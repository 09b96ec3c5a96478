// ABOUTME: Plank hold timer with debounced position confirmation and pause/resume on bad frames
// ABOUTME: Hip alignment and body straightness are smoothed before validity and form checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plank Analyzer
//!
//! A hold starts once the position has been valid for a run of consecutive
//! frames. Time accumulates between consecutive valid updates only: an invalid
//! frame pauses the timer (keeping the time already held) and requires a new
//! confirmation run before accumulation resumes. A paused attempt that stays
//! out of position past the grace period ends with a "stopped" notice.

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::clock::SharedClock;
use crate::geometry::{incline_from_horizontal, signed_line_deviation, straightness_departure};
use crate::sides::Side;
use crate::smoothing::RollingWindow;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use workout_core::config::PlankThresholds;
use workout_core::constants::messages::{self, plank as plank_messages};
use workout_core::{
    BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority, LandmarkMap, Point2,
    ThresholdConfig,
};

/// Plank states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlankState {
    /// Not in position
    Idle,
    /// In position, waiting for confirmation (or paused mid-hold)
    PlankPosition,
    /// Holding; time accumulates
    PlankHold,
    /// Target reached on this frame
    Completed,
}

impl ExerciseState for PlankState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::PlankPosition => "PLANK_POSITION",
            Self::PlankHold => "PLANK_HOLD",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Plank body-line measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlankMetrics {
    /// Incline of the shoulder-ankle line from horizontal, in degrees
    pub incline: f64,
    /// Signed hip distance from the shoulder-ankle line, percent of its length
    /// (positive = piked, negative = sagging)
    pub hip_deviation: f64,
    /// Departure of the shoulder-hip-ankle angle from 180 degrees
    pub straightness_departure: f64,
}

/// Plank analyzer
#[derive(Debug, Clone)]
pub struct PlankAnalyzer {
    thresholds: PlankThresholds,
    core: AnalyzerCore,
    clock: SharedClock,
    state: PlankState,
    target: Duration,
    deviation: RollingWindow,
    straightness: RollingWindow,
    position_frames: usize,
    invalid_frames: usize,
    last_tick: Option<Duration>,
    current_hold: Duration,
    total_hold: Duration,
    completed_holds: u32,
}

impl PlankAnalyzer {
    /// Create an untimed analyzer reading plank thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig, clock: SharedClock) -> Self {
        Self::with_thresholds(PlankThresholds::from_config(config), clock)
    }

    /// Create an untimed analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: PlankThresholds, clock: SharedClock) -> Self {
        Self {
            deviation: RollingWindow::new(thresholds.smoothing_window),
            straightness: RollingWindow::new(thresholds.smoothing_window),
            thresholds,
            core: AnalyzerCore::new(),
            clock,
            state: PlankState::Idle,
            target: Duration::ZERO,
            position_frames: 0,
            invalid_frames: 0,
            last_tick: None,
            current_hold: Duration::ZERO,
            total_hold: Duration::ZERO,
            completed_holds: 0,
        }
    }

    /// Builder-style target duration in seconds
    #[must_use]
    pub fn with_target_seconds(mut self, seconds: f64) -> Self {
        self.set_target_seconds(seconds);
        self
    }

    /// Set the target duration in seconds; zero, negative or non-finite means untimed
    pub fn set_target_seconds(&mut self, seconds: f64) {
        self.target = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
    }

    /// Hold time of the current attempt
    #[must_use]
    pub const fn current_hold(&self) -> Duration {
        self.current_hold
    }

    /// Hold time across every attempt
    #[must_use]
    pub const fn total_hold(&self) -> Duration {
        self.total_hold
    }

    /// Holds that reached the target
    #[must_use]
    pub const fn completed_holds(&self) -> u32 {
        self.completed_holds
    }

    fn body_line(&self, landmarks: &LandmarkMap) -> Option<[Point2; 3]> {
        let vis = self.thresholds.min_visibility;
        let side = |side: Side| landmarks.visible_all([side.shoulder(), side.hip(), side.ankle()], vis);
        match (side(Side::Left), side(Side::Right)) {
            (Some([ls, lh, la]), Some([rs, rh, ra])) => {
                Some([ls.midpoint(rs), lh.midpoint(rh), la.midpoint(ra)])
            }
            (Some(line), None) | (None, Some(line)) => Some(line),
            (None, None) => None,
        }
    }

    /// Smoothed metrics, or `None` when the body is not roughly horizontal
    fn smooth(&mut self, raw: &PlankMetrics) -> Option<PlankMetrics> {
        if raw.incline > self.thresholds.max_incline {
            self.deviation.clear();
            self.straightness.clear();
            return None;
        }
        Some(PlankMetrics {
            incline: raw.incline,
            hip_deviation: self.deviation.push(raw.hip_deviation),
            straightness_departure: self.straightness.push(raw.straightness_departure),
        })
    }

    fn is_valid_position(&self, smoothed: &PlankMetrics) -> bool {
        smoothed.hip_deviation.abs() <= self.thresholds.valid_max_deviation
            && smoothed.straightness_departure <= self.thresholds.valid_max_bend
    }

    /// Credit the time since the previous valid update
    fn accumulate(&mut self, now: Duration) {
        if let Some(previous) = self.last_tick {
            match now.checked_sub(previous) {
                Some(elapsed) => {
                    self.current_hold = self.current_hold.saturating_add(elapsed);
                    self.total_hold = self.total_hold.saturating_add(elapsed);
                }
                None => warn!(
                    now_ms = now.as_millis(),
                    previous_ms = previous.as_millis(),
                    "Clock went backwards, crediting no hold time"
                ),
            }
        }
        self.last_tick = Some(now);
    }

    fn confirm_position(&mut self, now: Duration) -> PlankState {
        self.position_frames += 1;
        if self.position_frames >= self.thresholds.min_position_frames {
            self.last_tick = Some(now);
            PlankState::PlankHold
        } else {
            PlankState::PlankPosition
        }
    }

    /// Transition for one frame; `valid` holds smoothed metrics when the position is acceptable
    fn step(
        &mut self,
        valid: Option<PlankMetrics>,
        now: Duration,
    ) -> (PlankState, Option<FeedbackItem>) {
        match (self.state, valid) {
            (PlankState::Idle | PlankState::Completed, Some(metrics)) => {
                self.reset();
                self.analyze_form(&metrics, true);
                (self.confirm_position(now), None)
            }
            (PlankState::Idle | PlankState::Completed, None) => (PlankState::Idle, None),
            (PlankState::PlankPosition, Some(_)) => {
                self.invalid_frames = 0;
                (self.confirm_position(now), None)
            }
            (PlankState::PlankPosition, None) => self.out_of_position(),
            (PlankState::PlankHold, Some(metrics)) => (self.hold(&metrics, now), None),
            (PlankState::PlankHold, None) => {
                self.position_frames = 0;
                self.invalid_frames = 1;
                self.last_tick = None;
                (
                    PlankState::PlankPosition,
                    Some(FeedbackItem::info(plank_messages::PAUSED)),
                )
            }
        }
    }

    fn out_of_position(&mut self) -> (PlankState, Option<FeedbackItem>) {
        self.position_frames = 0;
        if self.current_hold.is_zero() {
            return (PlankState::Idle, None);
        }
        self.invalid_frames += 1;
        if self.invalid_frames <= self.thresholds.exit_grace_frames {
            return (
                PlankState::PlankPosition,
                Some(FeedbackItem::info(plank_messages::PAUSED)),
            );
        }
        let held = self.current_hold.as_secs_f64();
        info!(exercise = "plank", held_seconds = held, "Hold stopped before target");
        self.core.add(&messages::plank_stopped(held), FeedbackPriority::Info);
        (PlankState::Idle, None)
    }

    fn hold(&mut self, metrics: &PlankMetrics, now: Duration) -> PlankState {
        self.accumulate(now);
        let items = self.analyze_form(metrics, false);
        self.core.record(items);
        if self.target.is_zero() || self.current_hold < self.target {
            return PlankState::PlankHold;
        }
        self.completed_holds = self.completed_holds.saturating_add(1);
        let held = self.current_hold.as_secs_f64();
        self.core
            .add(&messages::plank_completed(held), FeedbackPriority::Success);
        info!(
            exercise = "plank",
            held_seconds = held,
            completed_holds = self.completed_holds,
            "Hold completed"
        );
        self.last_tick = None;
        PlankState::Completed
    }

    fn hold_counter(&self) -> ExerciseCounter {
        let elapsed = self.current_hold.as_secs_f64();
        let target = self.target.as_secs_f64();
        ExerciseCounter::Hold {
            elapsed_seconds: elapsed,
            remaining_seconds: (!self.target.is_zero())
                .then(|| self.target.saturating_sub(self.current_hold).as_secs_f64()),
            target_seconds: target,
            completed_holds: self.completed_holds,
            total_seconds: self.total_hold.as_secs_f64(),
        }
    }
}

impl ExerciseAnalyzer for PlankAnalyzer {
    type State = PlankState;
    type Metrics = PlankMetrics;

    const KIND: ExerciseKind = ExerciseKind::Plank;

    fn reset(&mut self) {
        self.core.begin_attempt();
        self.current_hold = Duration::ZERO;
        self.position_frames = 0;
        self.invalid_frames = 0;
        self.last_tick = None;
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<PlankMetrics, DetectionGap> {
        let gap = DetectionGap::new(BodyPart::BodyLine);
        let [shoulder, hip, ankle] = self.body_line(landmarks).ok_or(gap)?;
        let hip_deviation = signed_line_deviation(shoulder, hip, ankle).ok_or(gap)?;
        Ok(PlankMetrics {
            incline: incline_from_horizontal(shoulder, ankle),
            hip_deviation,
            straightness_departure: straightness_departure(shoulder, hip, ankle),
        })
    }

    fn analyze_form(&mut self, metrics: &PlankMetrics, is_new_attempt: bool) -> Vec<FeedbackItem> {
        if is_new_attempt {
            self.current_hold = Duration::ZERO;
            return Vec::new();
        }

        let t = &self.thresholds;
        let mut items = Vec::new();
        if metrics.hip_deviation > t.hip_pike {
            items.push(FeedbackItem::new(plank_messages::LOWER_HIPS, FeedbackPriority::High));
        } else if metrics.hip_deviation < -t.hip_sag {
            items.push(FeedbackItem::new(plank_messages::RAISE_HIPS, FeedbackPriority::High));
        }
        if metrics.straightness_departure > t.straightness_tolerance {
            items.push(FeedbackItem::new(
                plank_messages::STRAIGHTEN_BODY,
                FeedbackPriority::High,
            ));
        }
        if items.is_empty() {
            items.push(FeedbackItem::new(plank_messages::GOOD_FORM, FeedbackPriority::Low));
        }
        items
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<PlankState> {
        if self.state == PlankState::Completed {
            self.state = PlankState::Idle;
        }

        let raw = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                // No time is credited across a gap
                self.last_tick = None;
                debug!(exercise = "plank", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };

        let smoothed = self.smooth(&raw);
        let valid_metrics = smoothed.filter(|m| self.is_valid_position(m));
        let now = self.clock.now();
        let (next, transient) = self.step(valid_metrics, now);

        if next != self.state {
            debug!(
                exercise = "plank",
                from = self.state.as_str(),
                to = next.as_str(),
                hold_seconds = self.current_hold.as_secs_f64(),
                deviation = raw.hip_deviation,
                "State transition"
            );
        }
        self.state = next;
        self.core.update(next, transient)
    }

    fn state(&self) -> PlankState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        self.hold_counter()
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}
