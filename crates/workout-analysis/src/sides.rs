// ABOUTME: Left/right limb selection over independently computed per-side measurements
// ABOUTME: Tolerates single-sided exercises and occlusion of one side by the camera angle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::BodyLandmark;

/// Body side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Subject's left
    Left,
    /// Subject's right
    Right,
}

impl Side {
    /// Both sides, left first
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Shoulder landmark on this side
    #[must_use]
    pub const fn shoulder(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftShoulder,
            Self::Right => BodyLandmark::RightShoulder,
        }
    }

    /// Elbow landmark on this side
    #[must_use]
    pub const fn elbow(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftElbow,
            Self::Right => BodyLandmark::RightElbow,
        }
    }

    /// Wrist landmark on this side
    #[must_use]
    pub const fn wrist(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftWrist,
            Self::Right => BodyLandmark::RightWrist,
        }
    }

    /// Hip landmark on this side
    #[must_use]
    pub const fn hip(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftHip,
            Self::Right => BodyLandmark::RightHip,
        }
    }

    /// Knee landmark on this side
    #[must_use]
    pub const fn knee(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftKnee,
            Self::Right => BodyLandmark::RightKnee,
        }
    }

    /// Ankle landmark on this side
    #[must_use]
    pub const fn ankle(self) -> BodyLandmark {
        match self {
            Self::Left => BodyLandmark::LeftAnkle,
            Self::Right => BodyLandmark::RightAnkle,
        }
    }
}

/// Pick the more flexed (smaller) of two optional joint angles
///
/// Ties go to the left side.
#[must_use]
pub fn select_more_flexed(left: Option<f64>, right: Option<f64>) -> Option<(Side, f64)> {
    match (left, right) {
        (Some(l), Some(r)) if r < l => Some((Side::Right, r)),
        (Some(l), _) => Some((Side::Left, l)),
        (None, Some(r)) => Some((Side::Right, r)),
        (None, None) => None,
    }
}

/// Average of the sides that produced a value
#[must_use]
pub fn average_sides(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    match (left, right) {
        (Some(l), Some(r)) => Some(f64::midpoint(l, r)),
        (Some(value), None) | (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_flexed_side_wins() {
        assert_eq!(
            select_more_flexed(Some(150.0), Some(80.0)),
            Some((Side::Right, 80.0))
        );
        assert_eq!(
            select_more_flexed(Some(90.0), Some(90.0)),
            Some((Side::Left, 90.0))
        );
        assert_eq!(select_more_flexed(None, Some(120.0)), Some((Side::Right, 120.0)));
        assert_eq!(select_more_flexed(None, None), None);
    }

    #[test]
    fn test_average_uses_visible_sides() {
        assert_eq!(average_sides(Some(80.0), Some(100.0)), Some(90.0));
        assert_eq!(average_sides(None, Some(100.0)), Some(100.0));
        assert_eq!(average_sides(None, None), None);
    }
}
