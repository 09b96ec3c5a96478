// ABOUTME: Feedback item model emitted by exercise analyzers
// ABOUTME: Defines the ordered priority scale used when sorting feedback for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a feedback message
///
/// Variants are declared in ascending order so the derived `Ord` ranks
/// `Info < Low < High < Warning < Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPriority {
    /// Neutral status information
    Info,
    /// Minor hint
    Low,
    /// Form error
    High,
    /// Form error or detection problem that needs immediate attention
    Warning,
    /// Positive confirmation (clean rep, completed hold)
    Success,
}

impl FeedbackPriority {
    /// Whether feedback at this priority marks the current rep as erroneous
    #[must_use]
    pub const fn is_corrective(self) -> bool {
        matches!(self, Self::High | Self::Warning)
    }

    /// Lowercase label used in text output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::High => "high",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for FeedbackPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single feedback message with its priority
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Message shown to the user
    pub text: String,
    /// Display priority
    pub priority: FeedbackPriority,
}

impl FeedbackItem {
    /// Create a feedback item
    #[must_use]
    pub fn new(text: impl Into<String>, priority: FeedbackPriority) -> Self {
        Self {
            text: text.into(),
            priority,
        }
    }

    /// Warning-priority item
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackPriority::Warning)
    }

    /// Info-priority item
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackPriority::Info)
    }

    /// Success-priority item
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, FeedbackPriority::Success)
    }
}

impl fmt::Display for FeedbackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.priority, self.text)
    }
}
