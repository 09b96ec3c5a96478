// ABOUTME: Threshold configuration shared across the workspace
// ABOUTME: Contains the flat ThresholdConfig map and the typed per-exercise views over it

/// Flat `name -> value` threshold map
pub mod thresholds;

/// Typed per-exercise thresholds resolved from the flat map
pub mod exercise;

pub use exercise::{
    min_visibility, BicepCurlThresholds, JumpingJackThresholds, LungeThresholds, PlankThresholds,
    PushupThresholds, SquatThresholds,
};
pub use thresholds::ThresholdConfig;
