// ABOUTME: Geometry engine computing joint angles and alignment metrics from landmark positions
// ABOUTME: Pure functions on the 2D image-plane projection; degenerate input yields zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Geometry engine
//!
//! All functions work on the `(x, y)` projection with `y` growing downwards.
//! Coincident points are common under detection noise, so every function
//! returns `0` (or `None` for ratios) instead of failing.

use workout_core::Point2;

/// Vectors shorter than this are treated as zero-length
const DEGENERATE_LENGTH: f64 = 1e-9;

/// Angle in degrees between two vectors, clamped to `[0, 180]`
fn vector_angle(u: Point2, v: Point2) -> f64 {
    let norms = u.norm() * v.norm();
    if norms < DEGENERATE_LENGTH * DEGENERATE_LENGTH || !norms.is_finite() {
        return 0.0;
    }
    let cosine = (u.dot(v) / norms).clamp(-1.0, 1.0);
    cosine.acos().to_degrees().clamp(0.0, 180.0)
}

/// Interior angle at vertex `b` formed by rays `b -> a` and `b -> c`
///
/// Returns `0` when any ray has zero length.
#[must_use]
pub fn angle_deg(a: Point2, b: Point2, c: Point2) -> f64 {
    vector_angle(a - b, c - b)
}

/// Angle between the vector `p1 -> p2` and the vector `line_a -> line_b`
///
/// Used where a segment's inclination relative to a reference line matters
/// rather than an interior joint angle.
#[must_use]
pub fn find_angle(p1: Point2, p2: Point2, line_a: Point2, line_b: Point2) -> f64 {
    vector_angle(p2 - p1, line_b - line_a)
}

/// Angle of the segment `bottom -> top` away from straight up
#[must_use]
pub fn inclination_from_vertical(bottom: Point2, top: Point2) -> f64 {
    vector_angle(top - bottom, Point2::new(0.0, -1.0))
}

/// Incline of the segment `a -> b` from horizontal, folded into `[0, 90]`
///
/// Independent of the direction the body faces.
#[must_use]
pub fn incline_from_horizontal(a: Point2, b: Point2) -> f64 {
    let angle = vector_angle(b - a, Point2::new(1.0, 0.0));
    if angle > 90.0 {
        180.0 - angle
    } else {
        angle
    }
}

/// Departure of the angle at `vertex` from a straight line, in degrees
#[must_use]
pub fn straightness_departure(start: Point2, vertex: Point2, end: Point2) -> f64 {
    180.0 - angle_deg(start, vertex, end)
}

/// Signed perpendicular distance of `point` from the line `start -> end`,
/// as a percentage of the segment length
///
/// Positive when the point lies above the line on screen (piked hips),
/// negative below it (sagging hips), whichever way the body faces. Returns
/// `None` when `start` and `end` coincide.
#[must_use]
pub fn signed_line_deviation(start: Point2, point: Point2, end: Point2) -> Option<f64> {
    let line = end - start;
    let length = line.norm();
    if length < DEGENERATE_LENGTH || !length.is_finite() {
        return None;
    }
    // cross < 0 means "above" for a left-to-right line in image coordinates
    let above = -line.cross(point - start) / (length * length) * 100.0;
    Some(if end.x < start.x { -above } else { above })
}
