// ABOUTME: Feedback texts emitted by the exercise analyzers
// ABOUTME: Shared by analyzers, session statistics, and tests so wording stays in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Squat feedback
pub mod squat {
    /// Knee angle went below the "too deep" threshold
    pub const TOO_DEEP: &str = "Don't squat too deep";
    /// Squat was abandoned before reaching depth
    pub const NOT_DEEP_ENOUGH: &str = "Lower your hips";
    /// Torso too upright
    pub const BEND_FORWARD_MORE: &str = "Bend forward more";
    /// Torso leaning too far forward
    pub const FORWARD_BEND_TOO_MUCH: &str = "Forward bending too much";
    /// Rep completed without corrections
    pub const CORRECT_FORM: &str = "Correct form";
}

/// Bicep curl feedback
pub mod bicep_curl {
    /// Arm not extended at the bottom
    pub const EXTEND_FULLY: &str = "Extend your arm fully at the bottom";
    /// Arm not flexed enough at the top
    pub const CURL_HIGHER: &str = "Curl the weight higher";
    /// Upper arm moved away from the torso
    pub const ELBOW_DRIFT: &str = "Keep your upper arm still, excessive elbow movement";
    /// Torso swing above the detection threshold
    pub const SLIGHT_SWING: &str = "Your body is slightly swinging. Keep your body stable.";
    /// Torso swing above the excessive threshold
    pub const EXCESSIVE_SWING: &str = "Your body is excessively swinging. Keep your body stable.";
    /// Elbow angle missing for too many consecutive frames
    pub const LOW_CONFIDENCE: &str = "Unable to detect elbow movement accurately";
    /// Rep completed without corrections
    pub const CORRECT_FORM: &str = "Correct form, keep it up";
}

/// Plank feedback
pub mod plank {
    /// Hips above the shoulder-ankle line
    pub const LOWER_HIPS: &str = "Lower your hips, don't pike";
    /// Hips below the shoulder-ankle line
    pub const RAISE_HIPS: &str = "Raise your hips, don't sag";
    /// Hip angle departs from a straight line
    pub const STRAIGHTEN_BODY: &str = "Straighten your body";
    /// Position valid and aligned
    pub const GOOD_FORM: &str = "Good plank form";
    /// Position lost while holding
    pub const PAUSED: &str = "Plank paused, get back into position to resume the timer";
}

/// Pushup feedback
pub mod pushup {
    /// Elbow angle below the "too low" threshold
    pub const TOO_LOW: &str = "You're going too low";
    /// Pushup abandoned before reaching depth
    pub const LOWER_CHEST: &str = "Lower your chest more";
    /// Hips sagging below the body line
    pub const HIPS_UP: &str = "Keep your hips up, core engaged";
    /// Hips piking above the body line
    pub const HIPS_DOWN: &str = "Lower your hips, maintain a straight line";
    /// Rep completed without corrections
    pub const CORRECT_FORM: &str = "Correct form";
}

/// Lunge feedback
pub mod lunge {
    /// Front knee angle below its lower bound
    pub const FRONT_KNEE_TOO_BENT: &str = "Front knee bent too much";
    /// Front knee angle above its upper bound
    pub const BEND_FRONT_KNEE: &str = "Bend front knee more";
    /// Back knee angle below its lower bound
    pub const BACK_KNEE_TOO_BENT: &str = "Back knee bent too much";
    /// Back knee angle above its upper bound
    pub const LOWER_BACK_KNEE: &str = "Lower your back knee more";
    /// Rep completed without corrections
    pub const CORRECT_FORM: &str = "Correct form";
}

/// Jumping jack feedback
pub mod jumping_jack {
    /// Arms lowered before reaching full extension
    pub const RAISE_ARMS: &str = "Raise your arms higher";
    /// Arms lowered before the legs spread
    pub const SPREAD_LEGS: &str = "Spread your legs wider";
    /// Average cycle faster than the fast threshold
    pub const SLOW_DOWN: &str = "Slow down for better form";
    /// Average cycle slower than the slow threshold
    pub const KEEP_RHYTHM: &str = "Try to keep a steady rhythm";
    /// Rep completed without corrections
    pub const GOOD_FORM: &str = "Good jumping jack form";
    /// Timed set reached its target duration
    pub const TIME_COMPLETE: &str = "Time complete!";
}

/// Plank completion text with the held duration
#[must_use]
pub fn plank_completed(held_seconds: f64) -> String {
    format!("Plank complete! Held for {held_seconds:.0}s")
}

/// Plank stop text with the held duration
#[must_use]
pub fn plank_stopped(held_seconds: f64) -> String {
    format!("Plank stopped; held for {held_seconds:.0}s")
}
