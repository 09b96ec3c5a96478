// ABOUTME: Integration tests for plank hold timing, confirmation, pause/resume, and exit grace
// ABOUTME: A manual clock advanced one second per frame makes hold times exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, plank_pose, standing_pose};
use std::time::Duration;
use workout_analysis::{ExerciseAnalyzer, ExerciseCounter, ManualClock, PlankAnalyzer, PlankState};
use workout_core::constants::messages::{self, plank as plank_messages};
use workout_core::{FeedbackPriority, LandmarkMap, ThresholdConfig};

const SECOND: Duration = Duration::from_secs(1);

struct Harness {
    clock: ManualClock,
    analyzer: PlankAnalyzer,
}

impl Harness {
    fn new(target_seconds: f64) -> Self {
        let clock = ManualClock::new();
        let analyzer = PlankAnalyzer::new(&ThresholdConfig::new(), clock.shared())
            .with_target_seconds(target_seconds);
        Self { clock, analyzer }
    }

    /// Feed one frame at the current time, then advance one second
    fn frame(&mut self, landmarks: &LandmarkMap) -> PlankState {
        let state = self.analyzer.update_state(landmarks).state;
        self.clock.advance(SECOND);
        state
    }

    fn frames(&mut self, landmarks: &LandmarkMap, n: usize) -> Vec<PlankState> {
        (0..n).map(|_| self.frame(landmarks)).collect()
    }
}

#[test]
fn test_short_run_starts_no_timer() {
    init_test_logging();
    let mut h = Harness::new(0.0);
    let states = h.frames(&plank_pose(0.0), 4);
    assert!(states.iter().all(|s| *s == PlankState::PlankPosition));
    assert_eq!(h.analyzer.current_hold(), Duration::ZERO);

    // Leaving before confirmation drops straight back to idle
    assert_eq!(h.frame(&standing_pose()), PlankState::Idle);
    assert_eq!(h.analyzer.total_hold(), Duration::ZERO);
}

#[test]
fn test_fifth_frame_starts_hold() {
    let mut h = Harness::new(0.0);
    let states = h.frames(&plank_pose(0.0), 8);
    assert_eq!(states[3], PlankState::PlankPosition);
    assert_eq!(states[4], PlankState::PlankHold);
    // Three ticks after the hold started
    assert_eq!(h.analyzer.current_hold(), 3 * SECOND);

    let feedback = h.analyzer.feedback();
    assert_eq!(feedback[0].text, plank_messages::GOOD_FORM);
    assert_eq!(feedback[0].priority, FeedbackPriority::Low);
}

#[test]
fn test_pause_keeps_time_already_held() {
    let mut h = Harness::new(0.0);
    h.frames(&plank_pose(0.0), 8);
    assert_eq!(h.analyzer.current_hold(), 3 * SECOND);

    let update = h.analyzer.update_state(&standing_pose());
    h.clock.advance(SECOND);
    assert_eq!(update.state, PlankState::PlankPosition);
    assert!(update
        .feedback
        .iter()
        .any(|f| f.text == plank_messages::PAUSED && f.priority == FeedbackPriority::Info));
    assert_eq!(h.analyzer.current_hold(), 3 * SECOND);

    // Five frames to re-confirm, then two more ticks
    let states = h.frames(&plank_pose(0.0), 7);
    assert_eq!(states[4], PlankState::PlankHold);
    assert_eq!(h.analyzer.current_hold(), 5 * SECOND);
    assert_eq!(h.analyzer.total_hold(), 5 * SECOND);
}

#[test]
fn test_exit_grace_stops_the_hold() {
    let mut h = Harness::new(0.0);
    h.frames(&plank_pose(0.0), 8);

    let states = h.frames(&standing_pose(), 15);
    assert!(states.iter().all(|s| *s == PlankState::PlankPosition));

    assert_eq!(h.frame(&standing_pose()), PlankState::Idle);
    let stopped = messages::plank_stopped(3.0);
    let feedback = h.analyzer.feedback();
    assert!(feedback
        .iter()
        .any(|f| f.text == stopped && f.priority == FeedbackPriority::Info));
    assert_eq!(h.analyzer.completed_holds(), 0);
}

#[test]
fn test_detection_gap_credits_no_time() {
    let mut h = Harness::new(0.0);
    h.frames(&plank_pose(0.0), 6);
    assert_eq!(h.analyzer.current_hold(), SECOND);

    let update = h.analyzer.update_state(&LandmarkMap::new());
    assert_eq!(update.state, PlankState::PlankHold);
    assert_eq!(update.feedback[0].priority, FeedbackPriority::Warning);
    assert_eq!(update.feedback[1].text, plank_messages::GOOD_FORM);

    let mut previous = h.analyzer.total_hold();
    h.clock.advance(4 * SECOND);
    for _ in 0..3 {
        h.frame(&plank_pose(0.0));
        let total = h.analyzer.total_hold();
        assert!(total >= previous);
        previous = total;
    }
    // The first frame after the gap restarts the tick; two seconds credited
    assert_eq!(h.analyzer.current_hold(), 3 * SECOND);
}

#[test]
fn test_target_completion_and_next_attempt() {
    let mut h = Harness::new(3.0);
    let states = h.frames(&plank_pose(0.0), 8);
    assert_eq!(states[7], PlankState::Completed);
    assert_eq!(h.analyzer.completed_holds(), 1);
    let done = messages::plank_completed(3.0);
    assert!(h
        .analyzer
        .feedback()
        .iter()
        .any(|f| f.text == done && f.priority == FeedbackPriority::Success));

    match h.analyzer.counter() {
        ExerciseCounter::Hold {
            remaining_seconds,
            completed_holds,
            total_seconds,
            ..
        } => {
            assert_eq!(remaining_seconds, Some(0.0));
            assert_eq!(completed_holds, 1);
            assert!((total_seconds - 3.0).abs() < 1e-9);
        }
        ExerciseCounter::Reps { .. } => panic!("plank must report a hold counter"),
    }

    // Still in position: a new attempt starts from scratch
    assert_eq!(h.frame(&plank_pose(0.0)), PlankState::PlankPosition);
    assert_eq!(h.analyzer.current_hold(), Duration::ZERO);
    assert_eq!(h.analyzer.total_hold(), 3 * SECOND);
}

#[test]
fn test_piked_hips_are_flagged() {
    let mut h = Harness::new(0.0);
    // 0.18 above the line is 30% of the body length
    h.frames(&plank_pose(-0.18), 7);
    let feedback = h.analyzer.feedback();
    assert!(feedback.iter().any(|f| f.text == plank_messages::LOWER_HIPS));
    assert!(feedback.iter().all(|f| f.text != plank_messages::GOOD_FORM));
}
