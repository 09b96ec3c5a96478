// ABOUTME: Typed per-exercise thresholds resolved once from the flat threshold configuration
// ABOUTME: Each analyzer builds its struct at construction and never reads the map again
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::thresholds::ThresholdConfig;
use crate::constants::thresholds::{
    bicep_curl, jumping_jack, lunge, plank, pushup, shared, squat,
};
use serde::{Deserialize, Serialize};

/// Frame/window counts are configured as numbers; anything below one means one
fn count(config: &ThresholdConfig, key: &str, default: f64) -> usize {
    config.get_or(key, default).max(1.0).round() as usize
}

/// Minimum landmark visibility for every analyzer
#[must_use]
pub fn min_visibility(config: &ThresholdConfig) -> f64 {
    config.get_or(shared::MIN_VISIBILITY_KEY, shared::MIN_VISIBILITY)
}

/// Squat thresholds in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquatThresholds {
    /// Knee angle below which the squat is too deep
    pub too_deep: f64,
    /// Knee angle that must be undercut to reach depth
    pub not_deep_enough: f64,
    /// Minimum forward lean of the torso
    pub forward_bend_too_little: f64,
    /// Maximum forward lean of the torso
    pub forward_bend_too_much: f64,
    /// Knee angle that starts and completes a rep
    pub start_angle: f64,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl SquatThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            too_deep: config.get_or(squat::TOO_DEEP_KEY, squat::TOO_DEEP),
            not_deep_enough: config.get_or(squat::NOT_DEEP_ENOUGH_KEY, squat::NOT_DEEP_ENOUGH),
            forward_bend_too_little: config.get_or(
                squat::FORWARD_BEND_TOO_LITTLE_KEY,
                squat::FORWARD_BEND_TOO_LITTLE,
            ),
            forward_bend_too_much: config
                .get_or(squat::FORWARD_BEND_TOO_MUCH_KEY, squat::FORWARD_BEND_TOO_MUCH),
            start_angle: config.get_or(squat::START_ANGLE_KEY, squat::START_ANGLE),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

/// Bicep curl thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BicepCurlThresholds {
    /// Elbow angle the arm must reach at the bottom
    pub not_low_enough: f64,
    /// Elbow angle the arm must undercut at the top
    pub not_high_enough: f64,
    /// Elbow angle below which a curl starts
    pub start_angle: f64,
    /// Elbow angle at which the lowering phase may complete
    pub down_angle: f64,
    /// Flexion range required before the top of the curl counts
    pub min_range: f64,
    /// Maximum smoothed elbow-to-torso angle
    pub elbow_drift: f64,
    /// Hip-shoulder deviation flagged as swing
    pub body_swing: f64,
    /// Hip-shoulder deviation flagged as excessive swing
    pub body_swing_excessive: f64,
    /// Elbow-torso smoothing window length
    pub smoothing_window: usize,
    /// Consecutive frames without an elbow angle before warning
    pub max_low_confidence_frames: usize,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl BicepCurlThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            not_low_enough: config
                .get_or(bicep_curl::NOT_LOW_ENOUGH_KEY, bicep_curl::NOT_LOW_ENOUGH),
            not_high_enough: config
                .get_or(bicep_curl::NOT_HIGH_ENOUGH_KEY, bicep_curl::NOT_HIGH_ENOUGH),
            start_angle: config.get_or(bicep_curl::START_ANGLE_KEY, bicep_curl::START_ANGLE),
            down_angle: config.get_or(bicep_curl::DOWN_ANGLE_KEY, bicep_curl::DOWN_ANGLE),
            min_range: config.get_or(bicep_curl::MIN_RANGE_KEY, bicep_curl::MIN_RANGE),
            elbow_drift: config.get_or(bicep_curl::ELBOW_DRIFT_KEY, bicep_curl::ELBOW_DRIFT),
            body_swing: config.get_or(bicep_curl::BODY_SWING_KEY, bicep_curl::BODY_SWING),
            body_swing_excessive: config.get_or(
                bicep_curl::BODY_SWING_EXCESSIVE_KEY,
                bicep_curl::BODY_SWING_EXCESSIVE,
            ),
            smoothing_window: count(
                config,
                bicep_curl::SMOOTHING_WINDOW_KEY,
                bicep_curl::SMOOTHING_WINDOW,
            ),
            max_low_confidence_frames: count(
                config,
                bicep_curl::MAX_LOW_CONFIDENCE_FRAMES_KEY,
                bicep_curl::MAX_LOW_CONFIDENCE_FRAMES,
            ),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for BicepCurlThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

/// Plank thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlankThresholds {
    /// Sag threshold in percent of body length (compared against the negative)
    pub hip_sag: f64,
    /// Pike threshold in percent of body length
    pub hip_pike: f64,
    /// Tolerated departure of the hip angle from 180 degrees
    pub straightness_tolerance: f64,
    /// Largest smoothed deviation still accepted as a plank position
    pub valid_max_deviation: f64,
    /// Largest smoothed straightness departure still accepted as a plank position
    pub valid_max_bend: f64,
    /// Maximum incline of the shoulder-ankle line from horizontal
    pub max_incline: f64,
    /// Consecutive valid frames that confirm the position
    pub min_position_frames: usize,
    /// Consecutive invalid frames after which a paused hold ends
    pub exit_grace_frames: usize,
    /// Smoothing window for deviation and straightness
    pub smoothing_window: usize,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl PlankThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            hip_sag: config.get_or(plank::HIP_SAG_KEY, plank::HIP_SAG),
            hip_pike: config.get_or(plank::HIP_PIKE_KEY, plank::HIP_PIKE),
            straightness_tolerance: config
                .get_or(plank::STRAIGHTNESS_TOLERANCE_KEY, plank::STRAIGHTNESS_TOLERANCE),
            valid_max_deviation: config
                .get_or(plank::VALID_MAX_DEVIATION_KEY, plank::VALID_MAX_DEVIATION),
            valid_max_bend: config.get_or(plank::VALID_MAX_BEND_KEY, plank::VALID_MAX_BEND),
            max_incline: config.get_or(plank::MAX_INCLINE_KEY, plank::MAX_INCLINE),
            min_position_frames: count(
                config,
                plank::MIN_POSITION_FRAMES_KEY,
                plank::MIN_POSITION_FRAMES,
            ),
            exit_grace_frames: count(config, plank::EXIT_GRACE_FRAMES_KEY, plank::EXIT_GRACE_FRAMES),
            smoothing_window: count(config, plank::SMOOTHING_WINDOW_KEY, plank::SMOOTHING_WINDOW),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for PlankThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

/// Pushup thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PushupThresholds {
    /// Elbow angle that must be undercut to reach depth
    pub not_low_enough: f64,
    /// Elbow angle below which the pushup is too low
    pub too_low: f64,
    /// Sag threshold in percent of body length
    pub hip_sag: f64,
    /// Pike threshold in percent of body length
    pub hip_pike: f64,
    /// Elbow angle below which a pushup starts
    pub start_angle: f64,
    /// Elbow angle at which a pushup completes
    pub complete_angle: f64,
    /// Hip deviation smoothing window
    pub smoothing_window: usize,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl PushupThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            not_low_enough: config.get_or(pushup::NOT_LOW_ENOUGH_KEY, pushup::NOT_LOW_ENOUGH),
            too_low: config.get_or(pushup::TOO_LOW_KEY, pushup::TOO_LOW),
            hip_sag: config.get_or(pushup::HIP_SAG_KEY, pushup::HIP_SAG),
            hip_pike: config.get_or(pushup::HIP_PIKE_KEY, pushup::HIP_PIKE),
            start_angle: config.get_or(pushup::START_ANGLE_KEY, pushup::START_ANGLE),
            complete_angle: config.get_or(pushup::COMPLETE_ANGLE_KEY, pushup::COMPLETE_ANGLE),
            smoothing_window: count(config, pushup::SMOOTHING_WINDOW_KEY, pushup::SMOOTHING_WINDOW),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for PushupThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

/// Lunge thresholds in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LungeThresholds {
    /// Front knee angle below which the knee is bent too far
    pub front_knee_min: f64,
    /// Front knee angle above which the lunge is too shallow
    pub front_knee_max: f64,
    /// Back knee angle below which the knee is bent too far
    pub back_knee_min: f64,
    /// Back knee angle above which the back knee is not lowered enough
    pub back_knee_max: f64,
    /// Knee angle below which a lunge starts
    pub start_angle: f64,
    /// Knee angle that marks the descent
    pub down_angle: f64,
    /// Knee angle at which the lunge completes
    pub up_angle: f64,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl LungeThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            front_knee_min: config.get_or(lunge::FRONT_KNEE_MIN_KEY, lunge::FRONT_KNEE_MIN),
            front_knee_max: config.get_or(lunge::FRONT_KNEE_MAX_KEY, lunge::FRONT_KNEE_MAX),
            back_knee_min: config.get_or(lunge::BACK_KNEE_MIN_KEY, lunge::BACK_KNEE_MIN),
            back_knee_max: config.get_or(lunge::BACK_KNEE_MAX_KEY, lunge::BACK_KNEE_MAX),
            start_angle: config.get_or(lunge::START_ANGLE_KEY, lunge::START_ANGLE),
            down_angle: config.get_or(lunge::DOWN_ANGLE_KEY, lunge::DOWN_ANGLE),
            up_angle: config.get_or(lunge::UP_ANGLE_KEY, lunge::UP_ANGLE),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for LungeThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

/// Jumping jack thresholds; arm and leg values in degrees, cycle times in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpingJackThresholds {
    /// Hip-shoulder-wrist angle of fully raised arms
    pub arm_extension: f64,
    /// Angle between the legs at the hips when spread
    pub leg_spread: f64,
    /// Arm angle above which a jumping jack starts
    pub arm_start: f64,
    /// Arm angle below which the arms count as down
    pub arms_down: f64,
    /// Leg angle below which the feet count as together
    pub legs_together: f64,
    /// Average cycle time below which the pace is too fast
    pub fast_cycle: f64,
    /// Average cycle time above which the pace is too slow
    pub slow_cycle: f64,
    /// Longest time between starts still counted as one cycle
    pub max_cycle: f64,
    /// Arm and leg angle smoothing window
    pub smoothing_window: usize,
    /// Recent cycles averaged for pace feedback
    pub rhythm_window: usize,
    /// Cycles needed before pace feedback is given
    pub min_rhythm_samples: usize,
    /// Minimum landmark visibility
    pub min_visibility: f64,
}

impl JumpingJackThresholds {
    /// Resolve from configuration with defaults for missing keys
    #[must_use]
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            arm_extension: config
                .get_or(jumping_jack::ARM_EXTENSION_KEY, jumping_jack::ARM_EXTENSION),
            leg_spread: config.get_or(jumping_jack::LEG_SPREAD_KEY, jumping_jack::LEG_SPREAD),
            arm_start: config.get_or(jumping_jack::ARM_START_KEY, jumping_jack::ARM_START),
            arms_down: config.get_or(jumping_jack::ARMS_DOWN_KEY, jumping_jack::ARMS_DOWN),
            legs_together: config
                .get_or(jumping_jack::LEGS_TOGETHER_KEY, jumping_jack::LEGS_TOGETHER),
            fast_cycle: config.get_or(jumping_jack::FAST_CYCLE_KEY, jumping_jack::FAST_CYCLE),
            slow_cycle: config.get_or(jumping_jack::SLOW_CYCLE_KEY, jumping_jack::SLOW_CYCLE),
            max_cycle: config.get_or(jumping_jack::MAX_CYCLE_KEY, jumping_jack::MAX_CYCLE),
            smoothing_window: count(
                config,
                jumping_jack::SMOOTHING_WINDOW_KEY,
                jumping_jack::SMOOTHING_WINDOW,
            ),
            rhythm_window: count(
                config,
                jumping_jack::RHYTHM_WINDOW_KEY,
                jumping_jack::RHYTHM_WINDOW,
            ),
            min_rhythm_samples: count(
                config,
                jumping_jack::MIN_RHYTHM_SAMPLES_KEY,
                jumping_jack::MIN_RHYTHM_SAMPLES,
            ),
            min_visibility: min_visibility(config),
        }
    }
}

impl Default for JumpingJackThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}
