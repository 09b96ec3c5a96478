// ABOUTME: Concrete exercise analyzers implementing the shared analyzer contract
// ABOUTME: Rep counters for squat, curl, pushup, lunge and jumping jack; plank measures hold time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bicep curl analyzer
pub mod bicep_curl;
/// Jumping jack analyzer
pub mod jumping_jack;
/// Lunge analyzer
pub mod lunge;
/// Plank hold analyzer
pub mod plank;
/// Pushup analyzer
pub mod pushup;
/// Squat analyzer
pub mod squat;

pub use bicep_curl::{BicepCurlAnalyzer, BicepCurlMetrics, BicepCurlState};
pub use jumping_jack::{JumpingJackAnalyzer, JumpingJackMetrics, JumpingJackState};
pub use lunge::{LungeAnalyzer, LungeMetrics, LungeState};
pub use plank::{PlankAnalyzer, PlankMetrics, PlankState};
pub use pushup::{PushupAnalyzer, PushupMetrics, PushupState};
pub use squat::{SquatAnalyzer, SquatMetrics, SquatState};
