// ABOUTME: Jumping jack state machine over smoothed arm elevation and leg spread
// ABOUTME: Counts reps with pace feedback, or runs a timed set against a target duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analyzer::{AnalyzerCore, ExerciseAnalyzer, ExerciseCounter, ExerciseState, StateUpdate};
use crate::clock::SharedClock;
use crate::geometry::angle_deg;
use crate::sides::{average_sides, Side};
use crate::smoothing::RollingWindow;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use workout_core::config::JumpingJackThresholds;
use workout_core::constants::messages::jumping_jack as messages;
use workout_core::{
    BodyPart, DetectionGap, ExerciseKind, FeedbackItem, FeedbackPriority, LandmarkMap,
    ThresholdConfig,
};

/// Jumping jack states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JumpingJackState {
    /// Arms down, feet together
    Idle,
    /// Arms rising
    Starting,
    /// Arms overhead
    ArmsUp,
    /// Arms overhead and legs spread
    LegsApart,
    /// Coming back down
    Returning,
    /// Rep or timed set finished on this frame
    Completed,
}

impl ExerciseState for JumpingJackState {
    const IDLE: Self = Self::Idle;
    const COMPLETED: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Starting => "STARTING",
            Self::ArmsUp => "ARMS_UP",
            Self::LegsApart => "LEGS_APART",
            Self::Returning => "RETURNING",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Per-frame jumping jack measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpingJackMetrics {
    /// Hip-shoulder-wrist angle averaged over visible arms
    pub arm_angle: f64,
    /// Angle between the legs measured at the mid-hip
    pub leg_spread: f64,
}

/// Jumping jack analyzer
#[derive(Debug, Clone)]
pub struct JumpingJackAnalyzer {
    thresholds: JumpingJackThresholds,
    core: AnalyzerCore,
    clock: SharedClock,
    state: JumpingJackState,
    arm_window: RollingWindow,
    leg_window: RollingWindow,
    cycle_times: RollingWindow,
    last_completion: Option<Duration>,
    target: Duration,
    last_tick: Option<Duration>,
    current_set: Duration,
    total_time: Duration,
    completed_sets: u32,
}

impl JumpingJackAnalyzer {
    /// Create a rep-counting analyzer reading thresholds from `config`
    #[must_use]
    pub fn new(config: &ThresholdConfig, clock: SharedClock) -> Self {
        Self::with_thresholds(JumpingJackThresholds::from_config(config), clock)
    }

    /// Create a rep-counting analyzer with resolved thresholds
    #[must_use]
    pub fn with_thresholds(thresholds: JumpingJackThresholds, clock: SharedClock) -> Self {
        Self {
            arm_window: RollingWindow::new(thresholds.smoothing_window),
            leg_window: RollingWindow::new(thresholds.smoothing_window),
            cycle_times: RollingWindow::new(thresholds.rhythm_window),
            thresholds,
            core: AnalyzerCore::new(),
            clock,
            state: JumpingJackState::Idle,
            last_completion: None,
            target: Duration::ZERO,
            last_tick: None,
            current_set: Duration::ZERO,
            total_time: Duration::ZERO,
            completed_sets: 0,
        }
    }

    /// Builder-style target duration in seconds
    #[must_use]
    pub fn with_target_seconds(mut self, seconds: f64) -> Self {
        self.set_target_seconds(seconds);
        self
    }

    /// Switch to timed sets of `seconds`; zero, negative or non-finite counts reps only
    pub fn set_target_seconds(&mut self, seconds: f64) {
        self.target = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        self.current_set = Duration::ZERO;
        self.last_tick = None;
    }

    /// Whether sets are timed
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        !self.target.is_zero()
    }

    /// Completed reps, counted in both modes
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.core.rep_count()
    }

    /// Time spent in the current timed set
    #[must_use]
    pub const fn current_set(&self) -> Duration {
        self.current_set
    }

    /// Timed sets that reached the target
    #[must_use]
    pub const fn completed_sets(&self) -> u32 {
        self.completed_sets
    }

    /// Credit the time since the previous analyzed frame
    fn accumulate(&mut self, now: Duration) {
        if let Some(previous) = self.last_tick {
            match now.checked_sub(previous) {
                Some(elapsed) => {
                    self.current_set = self.current_set.saturating_add(elapsed);
                    self.total_time = self.total_time.saturating_add(elapsed);
                }
                None => warn!(
                    now_ms = now.as_millis(),
                    previous_ms = previous.as_millis(),
                    "Clock went backwards, crediting no set time"
                ),
            }
        }
        self.last_tick = Some(now);
    }

    /// Transition for one frame of smoothed metrics
    fn step(&mut self, smoothed: &JumpingJackMetrics, now: Duration) -> JumpingJackState {
        let t = self.thresholds;
        let arm = smoothed.arm_angle;
        let legs = smoothed.leg_spread;

        match self.state {
            JumpingJackState::Idle | JumpingJackState::Completed if arm > t.arm_start => {
                self.reset();
                let items = self.analyze_form(smoothed, true);
                self.core.record(items);
                JumpingJackState::Starting
            }
            JumpingJackState::Idle | JumpingJackState::Completed => JumpingJackState::Idle,
            JumpingJackState::Starting if arm >= t.arm_extension => JumpingJackState::ArmsUp,
            JumpingJackState::ArmsUp if legs >= t.leg_spread => JumpingJackState::LegsApart,
            JumpingJackState::Starting | JumpingJackState::ArmsUp if arm < t.arms_down => {
                // Arms came down before the jump finished
                let items = self.analyze_form(smoothed, false);
                self.core.record(items);
                JumpingJackState::Idle
            }
            JumpingJackState::LegsApart if arm < t.arm_extension || legs < t.leg_spread => {
                JumpingJackState::Returning
            }
            JumpingJackState::Returning if arm < t.arms_down && legs < t.legs_together => {
                self.complete_rep(now);
                JumpingJackState::Completed
            }
            state => state,
        }
    }

    fn complete_rep(&mut self, now: Duration) {
        let clean = self.core.complete_rep();
        if clean {
            self.core.add(messages::GOOD_FORM, FeedbackPriority::Success);
        }

        if let Some(previous) = self.last_completion {
            let cycle = now.saturating_sub(previous).as_secs_f64();
            if cycle > 0.0 && cycle <= self.thresholds.max_cycle {
                self.cycle_times.push(cycle);
            }
        }
        self.last_completion = Some(now);
        if let Some(item) = self.pace_check() {
            self.core.record([item]);
        }

        info!(
            exercise = "jumping_jack",
            reps = self.core.rep_count(),
            clean,
            "Rep completed"
        );
    }

    fn pace_check(&self) -> Option<FeedbackItem> {
        if self.cycle_times.len() < self.thresholds.min_rhythm_samples {
            return None;
        }
        let average = self.cycle_times.mean()?;
        if average < self.thresholds.fast_cycle {
            Some(FeedbackItem::new(messages::SLOW_DOWN, FeedbackPriority::Low))
        } else if average > self.thresholds.slow_cycle {
            Some(FeedbackItem::new(messages::KEEP_RHYTHM, FeedbackPriority::Low))
        } else {
            None
        }
    }

    /// Close the timed set once the target is reached
    fn finish_set(&mut self) -> bool {
        if !self.is_timed() || self.current_set < self.target {
            return false;
        }
        self.completed_sets = self.completed_sets.saturating_add(1);
        self.core.add(messages::TIME_COMPLETE, FeedbackPriority::Success);
        info!(
            exercise = "jumping_jack",
            set_seconds = self.current_set.as_secs_f64(),
            completed_sets = self.completed_sets,
            reps = self.core.rep_count(),
            "Timed set completed"
        );
        self.current_set = Duration::ZERO;
        self.last_tick = None;
        true
    }
}

impl ExerciseAnalyzer for JumpingJackAnalyzer {
    type State = JumpingJackState;
    type Metrics = JumpingJackMetrics;

    const KIND: ExerciseKind = ExerciseKind::JumpingJack;

    fn reset(&mut self) {
        self.core.begin_attempt();
    }

    fn calculate_exercise_metrics(
        &self,
        landmarks: &LandmarkMap,
    ) -> Result<JumpingJackMetrics, DetectionGap> {
        let vis = self.thresholds.min_visibility;
        let arm = |side: Side| {
            landmarks
                .visible_all([side.hip(), side.shoulder(), side.wrist()], vis)
                .map(|[hip, shoulder, wrist]| angle_deg(hip, shoulder, wrist))
        };
        let arm_angle = average_sides(arm(Side::Left), arm(Side::Right))
            .ok_or(DetectionGap::new(BodyPart::Arms))?;

        let [left_hip, right_hip, left_ankle, right_ankle] = landmarks
            .visible_all(
                [
                    Side::Left.hip(),
                    Side::Right.hip(),
                    Side::Left.ankle(),
                    Side::Right.ankle(),
                ],
                vis,
            )
            .ok_or(DetectionGap::new(BodyPart::Legs))?;
        let leg_spread = angle_deg(left_ankle, left_hip.midpoint(right_hip), right_ankle);

        Ok(JumpingJackMetrics {
            arm_angle,
            leg_spread,
        })
    }

    fn analyze_form(
        &mut self,
        metrics: &JumpingJackMetrics,
        is_new_attempt: bool,
    ) -> Vec<FeedbackItem> {
        if is_new_attempt || metrics.arm_angle >= self.thresholds.arms_down {
            return Vec::new();
        }
        let text = match self.state {
            JumpingJackState::Starting => messages::RAISE_ARMS,
            JumpingJackState::ArmsUp => messages::SPREAD_LEGS,
            _ => return Vec::new(),
        };
        vec![FeedbackItem::new(text, FeedbackPriority::High)]
    }

    fn update_state(&mut self, landmarks: &LandmarkMap) -> StateUpdate<JumpingJackState> {
        if self.state == JumpingJackState::Completed {
            self.state = JumpingJackState::Idle;
        }

        let raw = match self.calculate_exercise_metrics(landmarks) {
            Ok(metrics) => metrics,
            Err(gap) => {
                // No set time is credited across a gap
                self.last_tick = None;
                debug!(exercise = "jumping_jack", state = ?self.state, %gap, "Frame skipped");
                return self.core.gap_update(self.state, gap);
            }
        };

        let smoothed = JumpingJackMetrics {
            arm_angle: self.arm_window.push(raw.arm_angle),
            leg_spread: self.leg_window.push(raw.leg_spread),
        };
        let now = self.clock.now();
        if self.is_timed() {
            self.accumulate(now);
        }

        let previous = self.state;
        let mut next = self.step(&smoothed, now);
        if self.finish_set() {
            next = JumpingJackState::Completed;
        }

        if next != previous {
            debug!(
                exercise = "jumping_jack",
                from = previous.as_str(),
                to = next.as_str(),
                arm_angle = smoothed.arm_angle,
                leg_spread = smoothed.leg_spread,
                "State transition"
            );
        }
        self.state = next;
        self.core.update(next, None)
    }

    fn state(&self) -> JumpingJackState {
        self.state
    }

    fn counter(&self) -> ExerciseCounter {
        if !self.is_timed() {
            return self.core.reps_counter();
        }
        ExerciseCounter::Hold {
            elapsed_seconds: self.current_set.as_secs_f64(),
            remaining_seconds: Some(self.target.saturating_sub(self.current_set).as_secs_f64()),
            target_seconds: self.target.as_secs_f64(),
            completed_holds: self.completed_sets,
            total_seconds: self.total_time.as_secs_f64(),
        }
    }

    fn feedback(&self) -> Vec<FeedbackItem> {
        self.core.feedback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use workout_core::Landmark;

    fn pose(arm_angle: f64, ankle_offset: f64) -> LandmarkMap {
        let (s, c) = arm_angle.to_radians().sin_cos();
        let mut map = LandmarkMap::new();
        for (side, dir) in [(Side::Left, -1.0), (Side::Right, 1.0)] {
            let x = 0.5 + dir * 0.1;
            map.insert(side.shoulder(), Landmark::visible_at(x, 0.3));
            map.insert(side.wrist(), Landmark::visible_at(x + dir * 0.25 * s, 0.3 + 0.25 * c));
            map.insert(side.hip(), Landmark::visible_at(x, 0.5));
            map.insert(side.ankle(), Landmark::visible_at(0.5 + dir * ankle_offset, 0.9));
        }
        map
    }

    #[test]
    fn test_metrics_from_raised_arms_and_spread_legs() {
        let analyzer = JumpingJackAnalyzer::new(&ThresholdConfig::new(), ManualClock::new().shared());
        let metrics = analyzer.calculate_exercise_metrics(&pose(150.0, 0.4)).unwrap();
        assert!((metrics.arm_angle - 150.0).abs() < 1e-6);
        // Ankles 0.4 either side of a mid-hip 0.4 above them
        assert!((metrics.leg_spread - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_ankle_is_a_leg_gap() {
        let analyzer = JumpingJackAnalyzer::new(&ThresholdConfig::new(), ManualClock::new().shared());
        let mut map = pose(30.0, 0.0);
        map.remove(Side::Left.ankle());
        let gap = analyzer.calculate_exercise_metrics(&map).unwrap_err();
        assert_eq!(gap.body_part, BodyPart::Legs);
    }

    #[test]
    fn test_target_seconds_switch_the_counter() {
        let analyzer = JumpingJackAnalyzer::new(&ThresholdConfig::new(), ManualClock::new().shared());
        assert!(matches!(analyzer.counter(), ExerciseCounter::Reps { .. }));
        let timed = analyzer.with_target_seconds(30.0);
        assert!(timed.is_timed());
        assert!(matches!(
            timed.counter(),
            ExerciseCounter::Hold { remaining_seconds: Some(r), .. } if (r - 30.0).abs() < 1e-9
        ));
    }
}
