// ABOUTME: Counters of every analyzer only ever grow across mixed, partial and empty frames
// ABOUTME: Drives each exercise kind through the dispatch enum with every pose fixture interleaved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    curl_pose, init_test_logging, jumping_jack_pose, lunge_pose, plank_pose, pushup_pose,
    squat_pose, CURL_REP, JACK_CLOSED, JACK_OPEN, LUNGE_REP, PUSHUP_REP, SQUAT_REP,
};
use std::iter;
use std::time::Duration;
use workout_analysis::{Analyzer, ExerciseCounter, ManualClock, Side};
use workout_core::{ExerciseKind, LandmarkMap, ThresholdConfig};

/// Copy of `map` with the right side of the body undetected
fn left_only(map: &LandmarkMap) -> LandmarkMap {
    let mut partial = map.clone();
    for name in [
        Side::Right.shoulder(),
        Side::Right.elbow(),
        Side::Right.wrist(),
        Side::Right.hip(),
        Side::Right.knee(),
        Side::Right.ankle(),
    ] {
        partial.remove(name);
    }
    partial
}

/// Every fixture in sequence, with an empty frame after every fourth pose and
/// a left-only copy after every seventh
fn mixed_stream() -> Vec<LandmarkMap> {
    let jacks = iter::repeat_n(JACK_CLOSED, 5)
        .chain((0..3).flat_map(|_| {
            iter::repeat_n(JACK_OPEN, 5).chain(iter::repeat_n(JACK_CLOSED, 5))
        }))
        .map(|(arm, legs)| jumping_jack_pose(arm, legs));

    let poses: Vec<LandmarkMap> = SQUAT_REP
        .iter()
        .map(|a| squat_pose(*a))
        .chain(CURL_REP.iter().map(|a| curl_pose(*a, 0.0, 0.0)))
        .chain(PUSHUP_REP.iter().map(|a| pushup_pose(*a, 0.0)))
        .chain(iter::repeat_with(|| plank_pose(0.0)).take(20))
        .chain(LUNGE_REP.iter().map(|a| lunge_pose(*a, (a + 5.0).min(178.0))))
        .chain(jacks)
        .collect();

    let mut stream = Vec::new();
    for (i, pose) in poses.iter().enumerate() {
        stream.push(pose.clone());
        if i % 4 == 3 {
            stream.push(LandmarkMap::new());
        }
        if i % 7 == 6 {
            stream.push(left_only(pose));
        }
    }
    stream
}

fn total_seconds(counter: &ExerciseCounter) -> f64 {
    match counter {
        ExerciseCounter::Hold { total_seconds, .. } => *total_seconds,
        ExerciseCounter::Reps { .. } => 0.0,
    }
}

/// Play the stream one second per frame; returns the final counter
fn assert_never_decreases(kind: ExerciseKind, target_seconds: f64) -> ExerciseCounter {
    let clock = ManualClock::new();
    let mut analyzer = Analyzer::for_exercise(kind, &ThresholdConfig::new(), clock.shared());
    analyzer.set_target_duration(target_seconds);

    let mut previous = analyzer.counter();
    for (frame, landmarks) in mixed_stream().iter().enumerate() {
        let counter = analyzer.process(landmarks).counter;
        assert!(
            counter.completions() >= previous.completions(),
            "{kind} completions fell at frame {frame}: {previous:?} -> {counter:?}"
        );
        assert!(
            counter.error_reps() >= previous.error_reps(),
            "{kind} error reps fell at frame {frame}: {previous:?} -> {counter:?}"
        );
        assert!(
            total_seconds(&counter) >= total_seconds(&previous),
            "{kind} total time fell at frame {frame}: {previous:?} -> {counter:?}"
        );
        previous = counter;
        clock.advance(Duration::from_secs(1));
    }
    previous
}

#[test]
fn test_untimed_counters_never_decrease() {
    init_test_logging();
    for kind in ExerciseKind::ALL {
        assert_never_decreases(kind, 0.0);
    }
}

#[test]
fn test_timed_counters_never_decrease_and_progress() {
    for kind in ExerciseKind::ALL {
        let counter = assert_never_decreases(kind, 3.0);
        assert!(
            counter.completions() >= 1,
            "{kind} never completed a rep or set: {counter:?}"
        );
    }
}
