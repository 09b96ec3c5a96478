// ABOUTME: Newline-delimited JSON frame files and the driver replaying them through a session
// ABOUTME: Frame timestamps drive a manual clock so timed holds replay deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Frame Replay
//!
//! One JSON object per line:
//!
//! ```json
//! {"timestamp_ms": 1200, "landmarks": {"left_hip": {"x": 0.4, "y": 0.5, "visibility": 0.9}}}
//! ```
//!
//! `landmarks` is either a map keyed by landmark name or the 33-entry
//! BlazePose list in index order, where each landmark may be an object or an
//! `[x, y, z, visibility]` array. Frames without a timestamp advance the clock
//! by [`DEFAULT_FRAME_INTERVAL_MS`].

use crate::session::{SessionSnapshot, WorkoutSession};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use workout_analysis::{Clock, ManualClock};
use workout_core::{Landmark, LandmarkMap};

/// Clock step for frames without a timestamp (about 30 fps)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

/// Frame file errors
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Reading the input failed
    #[error("Failed to read frames: {0}")]
    Io(#[from] io::Error),

    /// A line is not a valid frame record
    #[error("Malformed frame on line {line}: {message}")]
    Malformed {
        /// One-based line number
        line: usize,
        /// Parser message
        message: String,
    },
}

/// Landmarks of one recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameLandmarks {
    /// Landmarks keyed by name
    Named(LandmarkMap),
    /// BlazePose landmarks in index order
    Indexed(Vec<Landmark>),
}

impl FrameLandmarks {
    /// Landmark map for analysis
    ///
    /// Indexed landmarks at or below `min_visibility` are dropped, matching what
    /// a live detector hands over.
    #[must_use]
    pub fn to_map(&self, min_visibility: f64) -> LandmarkMap {
        match self {
            Self::Named(map) => map.clone(),
            Self::Indexed(list) => LandmarkMap::from_indexed(list, min_visibility),
        }
    }
}

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Capture time in milliseconds since the start of the recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Detected landmarks
    pub landmarks: FrameLandmarks,
}

/// Parse newline-delimited frame records; blank lines are skipped
///
/// # Errors
///
/// Returns [`ReplayError::Io`] if reading fails and [`ReplayError::Malformed`]
/// with the one-based line number of the first invalid record.
pub fn parse_frames<R: BufRead>(reader: R) -> Result<Vec<FrameRecord>, ReplayError> {
    let mut frames = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| ReplayError::Malformed {
            line: index + 1,
            message: e.to_string(),
        })?;
        frames.push(record);
    }
    debug!(frames = frames.len(), "Parsed frame records");
    Ok(frames)
}

/// Read a frame file
///
/// # Errors
///
/// See [`parse_frames`]; also fails if the file cannot be opened.
pub fn read_frames(path: impl AsRef<Path>) -> Result<Vec<FrameRecord>, ReplayError> {
    let file = File::open(path)?;
    parse_frames(BufReader::new(file))
}

/// Drive `session` with `frames`, moving `clock` to each frame's timestamp
///
/// `clock` must be the clock the session was built with. Timestamps earlier
/// than the current clock value are ignored so the clock never runs backwards.
pub fn replay_frames(
    session: &mut WorkoutSession,
    frames: &[FrameRecord],
    clock: &ManualClock,
    min_visibility: f64,
) -> Vec<SessionSnapshot> {
    frames
        .iter()
        .map(|frame| {
            advance_clock(clock, frame.timestamp_ms);
            session.process_frame(&frame.landmarks.to_map(min_visibility))
        })
        .collect()
}

fn advance_clock(clock: &ManualClock, timestamp_ms: Option<u64>) {
    match timestamp_ms.map(Duration::from_millis) {
        Some(at) if at >= clock.now() => clock.set(at),
        Some(at) => warn!(
            timestamp_ms = at.as_millis(),
            clock_ms = clock.now().as_millis(),
            "Frame timestamp went backwards, keeping clock"
        ),
        None => clock.advance(Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS)),
    }
}
