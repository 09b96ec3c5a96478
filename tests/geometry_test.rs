// ABOUTME: Integration tests for the geometry engine's angle and alignment functions
// ABOUTME: Checks symmetry, invariance under translation and scale, and degenerate inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_analysis::geometry::{
    angle_deg, find_angle, incline_from_horizontal, inclination_from_vertical,
    signed_line_deviation, straightness_departure,
};
use workout_core::Point2;

const EPS: f64 = 1e-6;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn test_angle_is_symmetric_in_its_rays() {
    let (a, b, c) = (p(0.1, 0.9), p(0.4, 0.5), p(0.8, 0.7));
    assert!((angle_deg(a, b, c) - angle_deg(c, b, a)).abs() < EPS);
}

#[test]
fn test_angle_ignores_translation_and_scale() {
    let (a, b, c) = (p(0.1, 0.9), p(0.4, 0.5), p(0.8, 0.7));
    let base = angle_deg(a, b, c);

    let shift = p(0.25, -0.1);
    assert!((angle_deg(a + shift, b + shift, c + shift) - base).abs() < EPS);
    assert!((angle_deg(a * 3.0, b * 3.0, c * 3.0) - base).abs() < EPS);
}

#[test]
fn test_angle_stays_in_range() {
    let vertex = p(0.5, 0.5);
    for step in 0..36 {
        let theta = f64::from(step * 10).to_radians();
        let end = p(0.5 + theta.cos(), 0.5 + theta.sin());
        let angle = angle_deg(p(1.5, 0.5), vertex, end);
        assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
    }
}

#[test]
fn test_degenerate_inputs_return_zero() {
    let p0 = p(0.2, 0.2);
    assert!(angle_deg(p0, p0, p0).abs() < EPS);
    assert!(find_angle(p0, p(0.4, 0.4), p0, p0).abs() < EPS);
    assert!(inclination_from_vertical(p0, p0).abs() < EPS);
    assert!(incline_from_horizontal(p0, p0).abs() < EPS);
}

#[test]
fn test_find_angle_perpendicular_segments() {
    let angle = find_angle(p(0.5, 0.8), p(0.5, 0.2), p(0.0, 0.9), p(1.0, 0.9));
    assert!((angle - 90.0).abs() < EPS);
}

#[test]
fn test_inclination_from_vertical() {
    let hip = p(0.5, 0.7);
    assert!(inclination_from_vertical(hip, p(0.5, 0.3)).abs() < EPS);
    assert!((inclination_from_vertical(hip, p(0.9, 0.3)) - 45.0).abs() < EPS);
    assert!((inclination_from_vertical(hip, p(0.1, 0.7)) - 90.0).abs() < EPS);
}

#[test]
fn test_straight_body_has_no_departure() {
    let departure = straightness_departure(p(0.2, 0.5), p(0.5, 0.5), p(0.8, 0.5));
    assert!(departure.abs() < EPS);
    let bent = straightness_departure(p(0.2, 0.5), p(0.5, 0.2), p(0.8, 0.5));
    assert!((bent - 90.0).abs() < EPS);
}

#[test]
fn test_deviation_is_relative_to_body_length() {
    let short = signed_line_deviation(p(0.2, 0.5), p(0.35, 0.53), p(0.5, 0.5)).unwrap();
    let long = signed_line_deviation(p(0.2, 0.5), p(0.5, 0.56), p(0.8, 0.5)).unwrap();
    assert!((short - long).abs() < EPS);
    assert!((long + 10.0).abs() < EPS);
}
