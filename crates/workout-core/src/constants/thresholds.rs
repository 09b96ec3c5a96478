// ABOUTME: Threshold configuration keys and per-exercise default values
// ABOUTME: Angles are in degrees, hip deviations in percent of shoulder-to-ankle length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Thresholds shared by every analyzer
pub mod shared {
    use crate::constants::detection::DEFAULT_MIN_VISIBILITY;

    /// Key: minimum landmark visibility
    pub const MIN_VISIBILITY_KEY: &str = "landmark_visibility";
    /// Default minimum landmark visibility
    pub const MIN_VISIBILITY: f64 = DEFAULT_MIN_VISIBILITY;
}

/// Squat thresholds
pub mod squat {
    /// Key: knee angle below which the squat is too deep
    pub const TOO_DEEP_KEY: &str = "squat_too_deep";
    /// Default "too deep" knee angle
    pub const TOO_DEEP: f64 = 68.0;
    /// Key: knee angle that must be undercut for a valid depth
    pub const NOT_DEEP_ENOUGH_KEY: &str = "squat_not_deep_enough";
    /// Default deep-squat knee angle
    pub const NOT_DEEP_ENOUGH: f64 = 91.0;
    /// Key: minimum forward lean of the torso
    pub const FORWARD_BEND_TOO_LITTLE_KEY: &str = "squat_forward_bend_too_little";
    /// Default minimum forward lean
    pub const FORWARD_BEND_TOO_LITTLE: f64 = 19.0;
    /// Key: maximum forward lean of the torso
    pub const FORWARD_BEND_TOO_MUCH_KEY: &str = "squat_forward_bend_too_much";
    /// Default maximum forward lean
    pub const FORWARD_BEND_TOO_MUCH: f64 = 50.0;
    /// Key: knee angle that starts (and completes) a squat
    pub const START_ANGLE_KEY: &str = "squat_start_angle";
    /// Default start knee angle
    pub const START_ANGLE: f64 = 160.0;
}

/// Bicep curl thresholds
pub mod bicep_curl {
    /// Key: elbow angle the arm must reach at the bottom
    pub const NOT_LOW_ENOUGH_KEY: &str = "bicep_curl_not_low_enough";
    /// Default bottom extension angle
    pub const NOT_LOW_ENOUGH: f64 = 160.0;
    /// Key: elbow angle the arm must undercut at the top
    pub const NOT_HIGH_ENOUGH_KEY: &str = "bicep_curl_not_high_enough";
    /// Default top flexion angle
    pub const NOT_HIGH_ENOUGH: f64 = 90.0;
    /// Key: elbow angle that starts a curl
    pub const START_ANGLE_KEY: &str = "bicep_curl_start_angle";
    /// Default start angle (arm extended)
    pub const START_ANGLE: f64 = 160.0;
    /// Key: elbow angle at which the lowering phase may complete
    pub const DOWN_ANGLE_KEY: &str = "bicep_curl_down_angle";
    /// Default completion angle
    pub const DOWN_ANGLE: f64 = 150.0;
    /// Key: minimum flexion range before the top of the curl counts
    pub const MIN_RANGE_KEY: &str = "bicep_curl_min_range";
    /// Default minimum range of motion
    pub const MIN_RANGE: f64 = 30.0;
    /// Key: maximum smoothed elbow-to-torso angle
    pub const ELBOW_DRIFT_KEY: &str = "bicep_curl_elbow_drift";
    /// Default elbow drift limit
    pub const ELBOW_DRIFT: f64 = 35.0;
    /// Key: hip-shoulder deviation that counts as body swing
    pub const BODY_SWING_KEY: &str = "bicep_curl_body_swing";
    /// Default swing detection threshold
    pub const BODY_SWING: f64 = 10.0;
    /// Key: hip-shoulder deviation that counts as excessive swing
    pub const BODY_SWING_EXCESSIVE_KEY: &str = "bicep_curl_body_swing_excessive";
    /// Default excessive swing threshold
    pub const BODY_SWING_EXCESSIVE: f64 = 18.0;
    /// Key: elbow-torso smoothing window length
    pub const SMOOTHING_WINDOW_KEY: &str = "bicep_curl_smoothing_window";
    /// Default smoothing window length
    pub const SMOOTHING_WINDOW: f64 = 5.0;
    /// Key: consecutive frames without an elbow angle before warning
    pub const MAX_LOW_CONFIDENCE_FRAMES_KEY: &str = "bicep_curl_max_low_confidence_frames";
    /// Default low-confidence frame limit
    pub const MAX_LOW_CONFIDENCE_FRAMES: f64 = 8.0;
}

/// Plank thresholds
pub mod plank {
    /// Key: hip deviation below the body line that counts as sagging
    pub const HIP_SAG_KEY: &str = "plank_hip_sag";
    /// Default sag threshold (percent of body length)
    pub const HIP_SAG: f64 = 15.0;
    /// Key: hip deviation above the body line that counts as piking
    pub const HIP_PIKE_KEY: &str = "plank_hip_pike";
    /// Default pike threshold (percent of body length)
    pub const HIP_PIKE: f64 = 25.0;
    /// Key: tolerated departure of the hip angle from a straight line
    pub const STRAIGHTNESS_TOLERANCE_KEY: &str = "plank_straightness_tolerance";
    /// Default straightness tolerance
    pub const STRAIGHTNESS_TOLERANCE: f64 = 30.0;
    /// Key: largest hip deviation still accepted as a plank position
    pub const VALID_MAX_DEVIATION_KEY: &str = "plank_valid_max_deviation";
    /// Default position-validity deviation limit
    pub const VALID_MAX_DEVIATION: f64 = 40.0;
    /// Key: largest straightness departure still accepted as a plank position
    pub const VALID_MAX_BEND_KEY: &str = "plank_valid_max_bend";
    /// Default position-validity bend limit
    pub const VALID_MAX_BEND: f64 = 90.0;
    /// Key: maximum incline of the shoulder-ankle line from horizontal
    pub const MAX_INCLINE_KEY: &str = "plank_max_incline";
    /// Default incline limit
    pub const MAX_INCLINE: f64 = 45.0;
    /// Key: consecutive valid frames that confirm the position
    pub const MIN_POSITION_FRAMES_KEY: &str = "plank_min_position_frames";
    /// Default confirmation frame count
    pub const MIN_POSITION_FRAMES: f64 = 5.0;
    /// Key: consecutive invalid frames after which a paused hold ends
    pub const EXIT_GRACE_FRAMES_KEY: &str = "plank_exit_grace_frames";
    /// Default exit grace frame count
    pub const EXIT_GRACE_FRAMES: f64 = 15.0;
    /// Key: smoothing window length for alignment and straightness
    pub const SMOOTHING_WINDOW_KEY: &str = "plank_smoothing_window";
    /// Default smoothing window length
    pub const SMOOTHING_WINDOW: f64 = 10.0;
}

/// Pushup thresholds
pub mod pushup {
    /// Key: elbow angle that must be undercut for a valid depth
    pub const NOT_LOW_ENOUGH_KEY: &str = "pushup_not_low_enough";
    /// Default depth angle
    pub const NOT_LOW_ENOUGH: f64 = 120.0;
    /// Key: elbow angle below which the pushup is too low
    pub const TOO_LOW_KEY: &str = "pushup_too_low";
    /// Default "too low" angle
    pub const TOO_LOW: f64 = 70.0;
    /// Key: hip deviation below the body line that counts as sagging
    pub const HIP_SAG_KEY: &str = "pushup_hip_sag";
    /// Default sag threshold (percent of body length)
    pub const HIP_SAG: f64 = 15.0;
    /// Key: hip deviation above the body line that counts as piking
    pub const HIP_PIKE_KEY: &str = "pushup_hip_pike";
    /// Default pike threshold (percent of body length)
    pub const HIP_PIKE: f64 = 25.0;
    /// Key: elbow angle that starts a pushup
    pub const START_ANGLE_KEY: &str = "pushup_start_angle";
    /// Default start angle
    pub const START_ANGLE: f64 = 160.0;
    /// Key: elbow angle at which the pushup completes
    pub const COMPLETE_ANGLE_KEY: &str = "pushup_complete_angle";
    /// Default completion angle
    pub const COMPLETE_ANGLE: f64 = 150.0;
    /// Key: hip alignment smoothing window length
    pub const SMOOTHING_WINDOW_KEY: &str = "pushup_smoothing_window";
    /// Default smoothing window length
    pub const SMOOTHING_WINDOW: f64 = 5.0;
}

/// Lunge thresholds
pub mod lunge {
    /// Key: front knee angle below which the knee is bent too far
    pub const FRONT_KNEE_MIN_KEY: &str = "lunge_front_knee_angle_min";
    /// Default lower bound for the front knee
    pub const FRONT_KNEE_MIN: f64 = 80.0;
    /// Key: front knee angle above which the lunge is too shallow
    pub const FRONT_KNEE_MAX_KEY: &str = "lunge_front_knee_angle_max";
    /// Default upper bound for the front knee
    pub const FRONT_KNEE_MAX: f64 = 100.0;
    /// Key: back knee angle below which the knee is bent too far
    pub const BACK_KNEE_MIN_KEY: &str = "lunge_back_knee_angle_min";
    /// Default lower bound for the back knee
    pub const BACK_KNEE_MIN: f64 = 80.0;
    /// Key: back knee angle above which the back knee is not lowered enough
    pub const BACK_KNEE_MAX_KEY: &str = "lunge_back_knee_angle_max";
    /// Default upper bound for the back knee
    pub const BACK_KNEE_MAX: f64 = 100.0;
    /// Key: knee angle that starts a lunge
    pub const START_ANGLE_KEY: &str = "lunge_start_angle";
    /// Default start angle (legs straight)
    pub const START_ANGLE: f64 = 160.0;
    /// Key: knee angle that marks the descent
    pub const DOWN_ANGLE_KEY: &str = "lunge_down_angle";
    /// Default descent angle
    pub const DOWN_ANGLE: f64 = 120.0;
    /// Key: knee angle at which the lunge completes
    pub const UP_ANGLE_KEY: &str = "lunge_up_angle";
    /// Default completion angle
    pub const UP_ANGLE: f64 = 150.0;
}

/// Jumping jack thresholds
pub mod jumping_jack {
    /// Key: hip-shoulder-wrist angle of fully raised arms
    pub const ARM_EXTENSION_KEY: &str = "jumping_jack_arm_extension";
    /// Default raised-arm angle
    pub const ARM_EXTENSION: f64 = 140.0;
    /// Key: angle between the legs at the hips when spread
    pub const LEG_SPREAD_KEY: &str = "jumping_jack_leg_spread";
    /// Default spread angle
    pub const LEG_SPREAD: f64 = 35.0;
    /// Key: arm angle above which a jumping jack starts
    pub const ARM_START_KEY: &str = "jumping_jack_arm_start";
    /// Default start arm angle
    pub const ARM_START: f64 = 90.0;
    /// Key: arm angle below which the arms count as down
    pub const ARMS_DOWN_KEY: &str = "jumping_jack_arms_down";
    /// Default lowered-arm angle
    pub const ARMS_DOWN: f64 = 80.0;
    /// Key: leg angle below which the feet count as together
    pub const LEGS_TOGETHER_KEY: &str = "jumping_jack_legs_together";
    /// Default closed-leg angle
    pub const LEGS_TOGETHER: f64 = 20.0;
    /// Key: average cycle time in seconds below which the pace is too fast
    pub const FAST_CYCLE_KEY: &str = "jumping_jack_fast_cycle";
    /// Default fast cycle time
    pub const FAST_CYCLE: f64 = 0.5;
    /// Key: average cycle time in seconds above which the pace is too slow
    pub const SLOW_CYCLE_KEY: &str = "jumping_jack_slow_cycle";
    /// Default slow cycle time
    pub const SLOW_CYCLE: f64 = 2.0;
    /// Key: longest gap between starts still counted as one cycle
    pub const MAX_CYCLE_KEY: &str = "jumping_jack_max_cycle";
    /// Default longest cycle
    pub const MAX_CYCLE: f64 = 5.0;
    /// Key: arm and leg angle smoothing window length
    pub const SMOOTHING_WINDOW_KEY: &str = "jumping_jack_smoothing_window";
    /// Default smoothing window length
    pub const SMOOTHING_WINDOW: f64 = 5.0;
    /// Key: number of recent cycles averaged for pace feedback
    pub const RHYTHM_WINDOW_KEY: &str = "jumping_jack_rhythm_window";
    /// Default pace window length
    pub const RHYTHM_WINDOW: f64 = 10.0;
    /// Key: cycles needed before pace feedback is given
    pub const MIN_RHYTHM_SAMPLES_KEY: &str = "jumping_jack_min_rhythm_samples";
    /// Default cycles needed
    pub const MIN_RHYTHM_SAMPLES: f64 = 4.0;
}
