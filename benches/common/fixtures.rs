// ABOUTME: Benchmark fixtures generating synthetic landmark recordings for each exercise
// ABOUTME: Provides deterministic frame sequences for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating synthetic pose recordings.
//!
//! Every frame is a side view in normalised image coordinates with all
//! landmarks fully visible.

use std::f64::consts::TAU;
use workout_analysis::Side;
use workout_core::{BodyLandmark, Landmark, LandmarkMap};

/// Predefined recording lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordingLength {
    /// About ten seconds at 30 fps
    Short,
    /// About one minute at 30 fps
    Long,
}

impl RecordingLength {
    #[must_use]
    pub const fn frames(self) -> usize {
        match self {
            Self::Short => 300,
            Self::Long => 1_800,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "10s",
            Self::Long => "60s",
        }
    }
}

/// Joint angle of a rep cycling between `high` and `low` every `period` frames
#[allow(clippy::cast_precision_loss)]
fn cycle(index: usize, period: usize, high: f64, low: f64) -> f64 {
    let phase = (index % period) as f64 / period as f64;
    let depth = 1.0 - (phase * TAU).cos();
    (low - high).mul_add(depth / 2.0, high)
}

fn put(map: &mut LandmarkMap, name: BodyLandmark, x: f64, y: f64) {
    map.insert(name, Landmark::visible_at(x, y));
}

/// Squat frame with an upright torso and the given knee angle
#[must_use]
pub fn squat_frame(knee_angle: f64) -> LandmarkMap {
    let (sin, cos) = knee_angle.to_radians().sin_cos();
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        let dx = if side == Side::Left { -0.05 } else { 0.05 };
        let (hip_x, hip_y) = (0.2f64.mul_add(sin, 0.5 + dx), 0.2f64.mul_add(cos, 0.6));
        put(&mut map, side.ankle(), 0.5 + dx, 0.8);
        put(&mut map, side.knee(), 0.5 + dx, 0.6);
        put(&mut map, side.hip(), hip_x, hip_y);
        put(&mut map, side.shoulder(), hip_x - 0.15, hip_y - 0.25);
    }
    map
}

/// Standing curl frame with the given elbow angle
#[must_use]
pub fn curl_frame(elbow_angle: f64) -> LandmarkMap {
    let (sin, cos) = elbow_angle.to_radians().sin_cos();
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        let x = if side == Side::Left { 0.4 } else { 0.6 };
        put(&mut map, side.hip(), x, 0.7);
        put(&mut map, side.shoulder(), x, 0.3);
        put(&mut map, side.elbow(), x, 0.5);
        put(&mut map, side.wrist(), 0.2f64.mul_add(sin, x), (-0.2f64).mul_add(cos, 0.5));
    }
    map
}

/// Horizontal plank frame with the hips `hip_offset` below the body line
#[must_use]
pub fn plank_frame(hip_offset: f64) -> LandmarkMap {
    let mut map = LandmarkMap::new();
    for side in Side::BOTH {
        put(&mut map, side.shoulder(), 0.2, 0.5);
        put(&mut map, side.hip(), 0.5, 0.5 + hip_offset);
        put(&mut map, side.ankle(), 0.8, 0.5);
    }
    map
}

/// Repeated two-second squats
#[must_use]
pub fn squat_recording(length: RecordingLength) -> Vec<LandmarkMap> {
    (0..length.frames())
        .map(|i| squat_frame(cycle(i, 60, 175.0, 75.0)))
        .collect()
}

/// Repeated one-and-a-half-second curls
#[must_use]
pub fn curl_recording(length: RecordingLength) -> Vec<LandmarkMap> {
    (0..length.frames())
        .map(|i| curl_frame(cycle(i, 45, 170.0, 40.0)))
        .collect()
}

/// A plank whose hips drift slowly up and down
#[must_use]
pub fn plank_recording(length: RecordingLength) -> Vec<LandmarkMap> {
    (0..length.frames())
        .map(|i| plank_frame(cycle(i, 90, 0.0, 0.08)))
        .collect()
}
