// ABOUTME: Integration tests for the squat state machine and its form checks
// ABOUTME: Drives synthetic knee-angle sequences through the analyzer and checks counts and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, squat_pose, squat_pose_leaning, SQUAT_REP};
use workout_analysis::{ExerciseAnalyzer, SquatAnalyzer, SquatState};
use workout_core::constants::messages::squat as messages;
use workout_core::{FeedbackPriority, LandmarkMap, ThresholdConfig};

fn relaxed_config() -> ThresholdConfig {
    ThresholdConfig::from_pairs([
        ("squat_not_deep_enough", 91.0),
        ("squat_forward_bend_too_little", 0.0),
    ])
    .unwrap()
}

fn run(analyzer: &mut SquatAnalyzer, angles: &[f64]) -> Vec<SquatState> {
    angles
        .iter()
        .map(|angle| analyzer.update_state(&squat_pose(*angle)).state)
        .collect()
}

#[test]
fn test_full_squat_counts_one_clean_rep() {
    init_test_logging();
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    let states = run(&mut analyzer, &SQUAT_REP);

    assert_eq!(analyzer.rep_count(), 1);
    assert_eq!(
        states.iter().filter(|s| **s == SquatState::Completed).count(),
        1
    );
    assert_eq!(states.last(), Some(&SquatState::Completed));

    let feedback = analyzer.feedback();
    assert!(feedback.iter().all(|f| f.text != messages::TOO_DEEP));
    assert!(feedback.iter().all(|f| f.text != messages::BEND_FORWARD_MORE));
    assert!(feedback
        .iter()
        .any(|f| f.text == messages::CORRECT_FORM && f.priority == FeedbackPriority::Success));
    assert_eq!(analyzer.counter().error_reps(), 0);
}

#[test]
fn test_state_sequence_through_a_rep() {
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    let states = run(&mut analyzer, &SQUAT_REP);
    assert_eq!(
        states,
        vec![
            SquatState::Idle,
            SquatState::SquatStart,
            SquatState::SquatDown,
            SquatState::SquatDown,
            SquatState::SquatHold,
            SquatState::SquatHold,
            SquatState::SquatUp,
            SquatState::SquatUp,
            SquatState::SquatUp,
            SquatState::SquatUp,
            SquatState::Completed,
        ]
    );

    // The frame after completion is evaluated from IDLE
    let next = analyzer.update_state(&squat_pose(170.0));
    assert_eq!(next.state, SquatState::Idle);
    assert_eq!(analyzer.get_state_name(), "IDLE");
}

#[test]
fn test_upright_torso_flags_forward_bend_with_defaults() {
    let mut analyzer = SquatAnalyzer::new(&ThresholdConfig::new());
    run(&mut analyzer, &SQUAT_REP);

    assert_eq!(analyzer.rep_count(), 1);
    assert_eq!(analyzer.counter().error_reps(), 1);
    let feedback = analyzer.feedback();
    assert_eq!(feedback[0].text, messages::BEND_FORWARD_MORE);
    assert!(feedback.iter().all(|f| f.text != messages::CORRECT_FORM));
}

#[test]
fn test_too_deep_and_too_much_lean() {
    let mut analyzer = SquatAnalyzer::new(&ThresholdConfig::new());
    for angle in [170.0, 150.0, 120.0, 90.0, 60.0, 80.0, 120.0, 170.0] {
        analyzer.update_state(&squat_pose_leaning(angle, 60.0));
    }
    let feedback = analyzer.feedback();
    assert!(feedback.iter().any(|f| f.text == messages::TOO_DEEP));
    assert!(feedback
        .iter()
        .any(|f| f.text == messages::FORWARD_BEND_TOO_MUCH));
    assert_eq!(analyzer.rep_count(), 1);
}

#[test]
fn test_depth_reached_while_entering_descent() {
    // Low frame rate: the knee passes depth on the first descending frame
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    let states = run(&mut analyzer, &[170.0, 140.0, 85.0, 130.0, 170.0]);
    assert_eq!(
        states,
        vec![
            SquatState::Idle,
            SquatState::SquatStart,
            SquatState::SquatHold,
            SquatState::SquatUp,
            SquatState::Completed,
        ]
    );
    assert_eq!(analyzer.rep_count(), 1);
    assert!(analyzer
        .feedback()
        .iter()
        .all(|f| f.text != messages::NOT_DEEP_ENOUGH));
}

#[test]
fn test_depth_on_first_bent_frame_is_kept() {
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    let states = run(&mut analyzer, &[170.0, 85.0, 100.0, 130.0, 170.0]);
    assert_eq!(states[1], SquatState::SquatStart);
    assert_eq!(states[2], SquatState::SquatHold);
    assert_eq!(states[4], SquatState::Completed);
    assert_eq!(analyzer.rep_count(), 1);
}

#[test]
fn test_missing_legs_freezes_state() {
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    run(&mut analyzer, &SQUAT_REP[..5]);
    assert_eq!(analyzer.state(), SquatState::SquatHold);

    let update = analyzer.update_state(&LandmarkMap::new());
    assert_eq!(update.state, SquatState::SquatHold);
    let notice = &update.feedback[0];
    assert_eq!(notice.text, "Can't detect legs");
    assert_eq!(notice.priority, FeedbackPriority::Warning);
    assert_eq!(analyzer.rep_count(), 0);

    // Resumes where it left off
    run(&mut analyzer, &SQUAT_REP[5..]);
    assert_eq!(analyzer.rep_count(), 1);
}

#[test]
fn test_reps_accumulate_across_attempts() {
    let mut analyzer = SquatAnalyzer::new(&relaxed_config());
    for _ in 0..3 {
        run(&mut analyzer, &SQUAT_REP);
    }
    assert_eq!(analyzer.rep_count(), 3);
}
