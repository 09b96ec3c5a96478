// ABOUTME: Configuration module for tracker settings loaded at startup
// ABOUTME: Resolves threshold files and environment overrides into one ThresholdConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the workout tracker
//!
//! - **Environment**: threshold file path, per-key threshold overrides, and the
//!   landmark visibility threshold, all read from environment variables

/// Environment-driven tracker settings
pub mod environment;

pub use environment::{ConfigError, TrackerSettings};
