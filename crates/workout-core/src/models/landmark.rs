// ABOUTME: Body landmark model matching the 33-point BlazePose topology
// ABOUTME: Provides named landmarks, per-frame landmark maps, and visibility filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::TrackerError;
use crate::models::point::Point2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Named body landmark in BlazePose index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLandmark {
    /// Index 0
    Nose,
    /// Index 1
    LeftEyeInner,
    /// Index 2
    LeftEye,
    /// Index 3
    LeftEyeOuter,
    /// Index 4
    RightEyeInner,
    /// Index 5
    RightEye,
    /// Index 6
    RightEyeOuter,
    /// Index 7
    LeftEar,
    /// Index 8
    RightEar,
    /// Index 9
    MouthLeft,
    /// Index 10
    MouthRight,
    /// Index 11
    LeftShoulder,
    /// Index 12
    RightShoulder,
    /// Index 13
    LeftElbow,
    /// Index 14
    RightElbow,
    /// Index 15
    LeftWrist,
    /// Index 16
    RightWrist,
    /// Index 17
    LeftPinky,
    /// Index 18
    RightPinky,
    /// Index 19
    LeftIndex,
    /// Index 20
    RightIndex,
    /// Index 21
    LeftThumb,
    /// Index 22
    RightThumb,
    /// Index 23
    LeftHip,
    /// Index 24
    RightHip,
    /// Index 25
    LeftKnee,
    /// Index 26
    RightKnee,
    /// Index 27
    LeftAnkle,
    /// Index 28
    RightAnkle,
    /// Index 29
    LeftHeel,
    /// Index 30
    RightHeel,
    /// Index 31
    LeftFootIndex,
    /// Index 32
    RightFootIndex,
}

impl BodyLandmark {
    /// All landmarks in model index order
    pub const ALL: [Self; 33] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Landmark for a model output index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Model output index of this landmark
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name used on the wire (e.g. `left_hip`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for BodyLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyLandmark {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|landmark| landmark.as_str() == name)
            .ok_or_else(|| TrackerError::InvalidLandmark(s.to_owned()))
    }
}

/// Detected landmark with normalized coordinates and a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LandmarkRepr")]
pub struct Landmark {
    /// Normalized horizontal coordinate
    pub x: f64,
    /// Normalized vertical coordinate (grows downwards)
    pub y: f64,
    /// Relative depth
    pub z: f64,
    /// Detection confidence in `[0, 1]`
    pub visibility: f64,
}

/// Accepted wire forms: `[x, y, z, visibility]` or an object
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkRepr {
    Array([f64; 4]),
    Object {
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
        #[serde(default = "full_visibility")]
        visibility: f64,
    },
}

const fn full_visibility() -> f64 {
    1.0
}

impl From<LandmarkRepr> for Landmark {
    fn from(repr: LandmarkRepr) -> Self {
        match repr {
            LandmarkRepr::Array([x, y, z, visibility]) => Self::new(x, y, z, visibility),
            LandmarkRepr::Object {
                x,
                y,
                z,
                visibility,
            } => Self::new(x, y, z, visibility),
        }
    }
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility,
        }
    }

    /// Fully visible landmark on the image plane
    #[must_use]
    pub const fn visible_at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// 2D projection used by the geometry engine
    #[must_use]
    pub const fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Whether the landmark is usable at the given visibility threshold
    #[must_use]
    pub fn is_visible(&self, min_visibility: f64) -> bool {
        self.visibility >= min_visibility && self.x.is_finite() && self.y.is_finite()
    }
}

/// Landmarks detected in a single frame
///
/// The map may be partial or empty when detection fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkMap {
    landmarks: HashMap<BodyLandmark, Landmark>,
}

impl LandmarkMap {
    /// Create an empty landmark map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from model output in index order, keeping only landmarks
    /// that pass [`Landmark::is_visible`] at `min_visibility`
    #[must_use]
    pub fn from_indexed(landmarks: &[Landmark], min_visibility: f64) -> Self {
        landmarks
            .iter()
            .enumerate()
            .filter(|(_, landmark)| landmark.is_visible(min_visibility))
            .filter_map(|(index, landmark)| {
                BodyLandmark::from_index(index).map(|name| (name, *landmark))
            })
            .collect()
    }

    /// Insert or replace a landmark
    pub fn insert(&mut self, name: BodyLandmark, landmark: Landmark) {
        self.landmarks.insert(name, landmark);
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: BodyLandmark, landmark: Landmark) -> Self {
        self.insert(name, landmark);
        self
    }

    /// Remove a landmark, returning it if present
    pub fn remove(&mut self, name: BodyLandmark) -> Option<Landmark> {
        self.landmarks.remove(&name)
    }

    /// Raw landmark regardless of visibility
    #[must_use]
    pub fn get(&self, name: BodyLandmark) -> Option<&Landmark> {
        self.landmarks.get(&name)
    }

    /// Number of landmarks in the frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the frame has no landmarks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Position of a landmark if present and visible enough
    #[must_use]
    pub fn visible(&self, name: BodyLandmark, min_visibility: f64) -> Option<Point2> {
        self.landmarks
            .get(&name)
            .filter(|landmark| landmark.is_visible(min_visibility))
            .map(Landmark::point)
    }

    /// Positions of several landmarks, or `None` if any is missing
    #[must_use]
    pub fn visible_all<const N: usize>(
        &self,
        names: [BodyLandmark; N],
        min_visibility: f64,
    ) -> Option<[Point2; N]> {
        let mut points = [Point2::default(); N];
        for (slot, name) in points.iter_mut().zip(names) {
            *slot = self.visible(name, min_visibility)?;
        }
        Some(points)
    }

    /// Iterate over all landmarks in the frame
    pub fn iter(&self) -> impl Iterator<Item = (&BodyLandmark, &Landmark)> {
        self.landmarks.iter()
    }
}

impl FromIterator<(BodyLandmark, Landmark)> for LandmarkMap {
    fn from_iter<I: IntoIterator<Item = (BodyLandmark, Landmark)>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}
