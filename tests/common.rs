// ABOUTME: Shared test utilities and synthetic pose fixtures for integration tests
// ABOUTME: Builds landmark frames for a given joint angle, torso tilt, or hip offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::similar_names
)]
//! Shared test utilities for `workout_tracker`
//!
//! All poses are side views in normalised image coordinates (y grows
//! downwards) with every landmark fully visible.

use std::env;
use std::sync::Once;
use tracing::Level;
use workout_analysis::Side;
use workout_core::{Landmark, LandmarkMap, Point2};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// `origin + length * (direction rotated by degrees)` in image coordinates
fn offset(origin: Point2, direction: Point2, degrees: f64, length: f64) -> Point2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let rotated = Point2::new(
        direction.x.mul_add(cos, -(direction.y * sin)),
        direction.x.mul_add(sin, direction.y * cos),
    );
    origin + rotated * length
}

fn put(map: &mut LandmarkMap, side: Side, shoulder: Point2, hip: Point2) {
    map.insert(side.shoulder(), Landmark::visible_at(shoulder.x, shoulder.y));
    map.insert(side.hip(), Landmark::visible_at(hip.x, hip.y));
}

/// Squat pose with the given knee angle and forward torso lean
pub fn squat_pose_leaning(knee_angle: f64, forward_lean: f64) -> LandmarkMap {
    let knee = Point2::new(0.5, 0.6);
    let ankle = Point2::new(0.5, 0.8);
    let hip = offset(knee, Point2::new(0.0, 1.0), -knee_angle, 0.2);
    let shoulder = offset(hip, Point2::new(0.0, -1.0), forward_lean, 0.3);

    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        let dx = if side == Side::Left { -0.05 } else { 0.05 };
        let shift = Point2::new(dx, 0.0);
        map.insert(side.knee(), Landmark::visible_at(knee.x + dx, knee.y));
        map.insert(side.ankle(), Landmark::visible_at(ankle.x + dx, ankle.y));
        put(&mut map, side, shoulder + shift, hip + shift);
    }
    map
}

/// Squat pose with an upright torso
pub fn squat_pose(knee_angle: f64) -> LandmarkMap {
    squat_pose_leaning(knee_angle, 0.0)
}

/// Standing arm pose for curls
///
/// `torso_tilt` leans the whole upper body from vertical; `elbow_drift` swings
/// the upper arm away from the torso line. The forearm keeps `elbow_angle`.
pub fn curl_pose(elbow_angle: f64, torso_tilt: f64, elbow_drift: f64) -> LandmarkMap {
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        let dx = if side == Side::Left { -0.1 } else { 0.1 };
        let hip = Point2::new(0.5 + dx, 0.7);
        let shoulder = offset(hip, Point2::new(0.0, -1.0), torso_tilt, 0.4);
        let down_torso = hip - shoulder;
        let elbow = offset(shoulder, down_torso * 2.5, elbow_drift, 0.2);
        let to_shoulder = (shoulder - elbow) * 5.0;
        let wrist = offset(elbow, to_shoulder, elbow_angle, 0.2);

        put(&mut map, side, shoulder, hip);
        map.insert(side.elbow(), Landmark::visible_at(elbow.x, elbow.y));
        map.insert(side.wrist(), Landmark::visible_at(wrist.x, wrist.y));
    }
    map
}

/// Horizontal plank with the hips `hip_offset` below the shoulder-ankle line
/// (negative lifts them)
pub fn plank_pose(hip_offset: f64) -> LandmarkMap {
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        put(
            &mut map,
            side,
            Point2::new(0.2, 0.5),
            Point2::new(0.5, 0.5 + hip_offset),
        );
        map.insert(side.ankle(), Landmark::visible_at(0.8, 0.5));
    }
    map
}

/// Upright standing body, far from any plank incline
pub fn standing_pose() -> LandmarkMap {
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        put(&mut map, side, Point2::new(0.5, 0.2), Point2::new(0.5, 0.5));
        map.insert(side.ankle(), Landmark::visible_at(0.5, 0.9));
    }
    map
}

/// Pushup pose with the given elbow angle and hip offset
pub fn pushup_pose(elbow_angle: f64, hip_offset: f64) -> LandmarkMap {
    let mut map = plank_pose(hip_offset);
    let shoulder = Point2::new(0.2, 0.5);
    let elbow = Point2::new(0.2, 0.65);
    let wrist = offset(elbow, Point2::new(0.0, -1.0), elbow_angle, 0.15);
    for side in Side::BOTH {
        map.insert(side.shoulder(), Landmark::visible_at(shoulder.x, shoulder.y));
        map.insert(side.elbow(), Landmark::visible_at(elbow.x, elbow.y));
        map.insert(side.wrist(), Landmark::visible_at(wrist.x, wrist.y));
    }
    map
}

/// Lunge side view: the left leg forward with a vertical shin, the right leg
/// back with a vertical thigh
pub fn lunge_pose(front_knee_angle: f64, back_knee_angle: f64) -> LandmarkMap {
    let hip = Point2::new(0.5, 0.5);
    let knee_to_hip = offset(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), -front_knee_angle, 0.2);
    let front_knee = hip - knee_to_hip;
    let front_ankle = front_knee + Point2::new(0.0, 0.2);
    let back_knee = hip + Point2::new(0.0, 0.2);
    let back_ankle = offset(back_knee, Point2::new(0.0, -1.0), back_knee_angle, 0.2);

    let mut map = LandmarkMap::new();
    for (side, knee, ankle) in [
        (Side::Left, front_knee, front_ankle),
        (Side::Right, back_knee, back_ankle),
    ] {
        map.insert(side.hip(), Landmark::visible_at(hip.x, hip.y));
        map.insert(side.knee(), Landmark::visible_at(knee.x, knee.y));
        map.insert(side.ankle(), Landmark::visible_at(ankle.x, ankle.y));
    }
    map
}

/// The same lunge with the right leg forward
pub fn lunge_pose_right_forward(front_knee_angle: f64, back_knee_angle: f64) -> LandmarkMap {
    let mirrored = lunge_pose(front_knee_angle, back_knee_angle);
    let mut map = LandmarkMap::new();
    for (left, right) in [
        (Side::Left.hip(), Side::Right.hip()),
        (Side::Left.knee(), Side::Right.knee()),
        (Side::Left.ankle(), Side::Right.ankle()),
    ] {
        let (l, r) = (*mirrored.get(left).unwrap(), *mirrored.get(right).unwrap());
        map.insert(left, r);
        map.insert(right, l);
    }
    map
}

/// Front view jumping jack: `arm_angle` between torso and arm at the
/// shoulder, `leg_spread` between the legs at the mid-hip
pub fn jumping_jack_pose(arm_angle: f64, leg_spread: f64) -> LandmarkMap {
    let ankle_dx = 0.4 * (leg_spread / 2.0).to_radians().tan();
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        // Subject faces the camera: their left is on the image right
        let dir: f64 = if side == Side::Left { 1.0 } else { -1.0 };
        let shoulder = Point2::new(dir.mul_add(0.1, 0.5), 0.3);
        let hip = Point2::new(dir.mul_add(0.1, 0.5), 0.5);
        let wrist = offset(shoulder, Point2::new(0.0, 1.0), -dir * arm_angle, 0.25);
        put(&mut map, side, shoulder, hip);
        map.insert(side.wrist(), Landmark::visible_at(wrist.x, wrist.y));
        map.insert(side.ankle(), Landmark::visible_at(dir.mul_add(ankle_dx, 0.5), 0.9));
    }
    map
}

/// Knee angles of one full squat reaching 80 degrees
pub const SQUAT_REP: [f64; 11] = [
    170.0, 150.0, 130.0, 110.0, 90.0, 80.0, 90.0, 110.0, 130.0, 150.0, 170.0,
];

/// Elbow angles of one full curl
pub const CURL_REP: [f64; 12] = [
    170.0, 150.0, 120.0, 90.0, 60.0, 45.0, 50.0, 80.0, 120.0, 150.0, 165.0, 170.0,
];

/// Elbow angles of one full pushup
pub const PUSHUP_REP: [f64; 10] = [
    170.0, 150.0, 130.0, 110.0, 90.0, 100.0, 120.0, 140.0, 155.0, 170.0,
];

/// Front knee angles of one full lunge; the back knee stays five degrees wider
pub const LUNGE_REP: [f64; 9] = [175.0, 150.0, 115.0, 100.0, 90.0, 95.0, 120.0, 155.0, 170.0];

/// `(arm_angle, leg_spread)` with arms down and feet together
pub const JACK_CLOSED: (f64, f64) = (20.0, 6.0);

/// `(arm_angle, leg_spread)` with arms overhead and legs spread
pub const JACK_OPEN: (f64, f64) = (175.0, 50.0);
