// ABOUTME: State shared by every analyzer: feedback manager, rep counter, and per-rep error flag
// ABOUTME: Concrete analyzers embed it and route all persistent feedback through it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseCounter, StateUpdate};
use crate::feedback::FeedbackManager;
use workout_core::{DetectionGap, FeedbackItem, FeedbackPriority};

/// Feedback and counters owned by one analyzer instance
#[derive(Debug, Clone, Default)]
pub struct AnalyzerCore {
    feedback: FeedbackManager,
    rep_count: u32,
    error_reps: u32,
    rep_error: bool,
}

impl AnalyzerCore {
    /// Fresh core with zero counters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new rep or hold attempt
    pub fn begin_attempt(&mut self) {
        self.feedback.clear();
        self.rep_error = false;
    }

    /// Store feedback; corrective priorities flag the current rep
    pub fn add(&mut self, text: &str, priority: FeedbackPriority) {
        if priority.is_corrective() {
            self.rep_error = true;
        }
        self.feedback.add(text, priority);
    }

    /// Store every item of a form analysis
    pub fn record(&mut self, items: impl IntoIterator<Item = FeedbackItem>) {
        for item in items {
            if item.priority.is_corrective() {
                self.rep_error = true;
            }
            self.feedback.add_item(item);
        }
    }

    /// Withdraw stored feedback that a later item supersedes
    ///
    /// The per-rep error flag is left as it is.
    pub fn remove(&mut self, text: &str) {
        self.feedback.remove(text);
    }

    /// Count a finished rep and return whether it was clean
    pub fn complete_rep(&mut self) -> bool {
        self.rep_count = self.rep_count.saturating_add(1);
        if self.rep_error {
            self.error_reps = self.error_reps.saturating_add(1);
        }
        !self.rep_error
    }

    /// Completed reps
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Completed reps with corrective feedback
    #[must_use]
    pub const fn error_reps(&self) -> u32 {
        self.error_reps
    }

    /// Whether corrective feedback fired during the current rep
    #[must_use]
    pub const fn rep_error(&self) -> bool {
        self.rep_error
    }

    /// Persistent feedback snapshot
    #[must_use]
    pub fn feedback(&self) -> Vec<FeedbackItem> {
        self.feedback.get()
    }

    /// Feedback manager of this analyzer
    #[must_use]
    pub const fn feedback_manager(&self) -> &FeedbackManager {
        &self.feedback
    }

    /// Rep counter value
    #[must_use]
    pub const fn reps_counter(&self) -> ExerciseCounter {
        ExerciseCounter::Reps {
            count: self.rep_count,
            errors: self.error_reps,
        }
    }

    /// Update carrying the persistent feedback plus an optional transient notice
    ///
    /// The notice goes after every stored item of equal or higher priority.
    #[must_use]
    pub fn update<S>(&self, state: S, transient: Option<FeedbackItem>) -> StateUpdate<S> {
        let mut feedback = self.feedback.get();
        if let Some(item) = transient {
            let at = feedback.partition_point(|stored| stored.priority >= item.priority);
            feedback.insert(at, item);
        }
        StateUpdate { state, feedback }
    }

    /// Update for a frame that could not be analyzed
    #[must_use]
    pub fn gap_update<S>(&self, state: S, gap: DetectionGap) -> StateUpdate<S> {
        self.update(state, Some(FeedbackItem::warning(gap.feedback_text())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_core::BodyPart;

    #[test]
    fn test_corrective_feedback_marks_rep() {
        let mut core = AnalyzerCore::new();
        core.add("fine", FeedbackPriority::Low);
        assert!(!core.rep_error());
        core.add("bad", FeedbackPriority::High);
        assert!(!core.complete_rep());
        assert_eq!(core.error_reps(), 1);

        core.begin_attempt();
        assert!(core.feedback().is_empty());
        assert!(core.complete_rep());
        assert_eq!(core.rep_count(), 2);
        assert_eq!(core.error_reps(), 1);
    }

    #[test]
    fn test_gap_notice_is_not_stored() {
        let mut core = AnalyzerCore::new();
        core.add("Lower your hips", FeedbackPriority::High);
        let update = core.gap_update("IDLE", DetectionGap::new(BodyPart::Arms));
        assert_eq!(update.feedback.len(), 2);
        assert_eq!(update.feedback[0].text, "Can't detect arm position");
        assert_eq!(update.feedback[0].priority, FeedbackPriority::Warning);
        assert_eq!(update.feedback[1].priority, FeedbackPriority::High);
        assert_eq!(core.feedback().len(), 1);
    }

    #[test]
    fn test_gap_notice_keeps_priority_order() {
        let mut core = AnalyzerCore::new();
        core.add("Keep going", FeedbackPriority::Info);
        core.add("Lower your hips", FeedbackPriority::High);
        core.add("Correct form", FeedbackPriority::Success);
        core.add("Looking steady", FeedbackPriority::Low);

        let update = core.gap_update("IDLE", DetectionGap::new(BodyPart::Legs));
        let priorities: Vec<FeedbackPriority> =
            update.feedback.iter().map(|item| item.priority).collect();
        assert_eq!(
            priorities,
            [
                FeedbackPriority::Success,
                FeedbackPriority::Warning,
                FeedbackPriority::High,
                FeedbackPriority::Low,
                FeedbackPriority::Info,
            ]
        );
        assert_eq!(update.feedback[1].text, "Can't detect legs");
    }

    #[test]
    fn test_transient_notice_follows_equal_priority() {
        let mut core = AnalyzerCore::new();
        core.add("Hold still", FeedbackPriority::Warning);
        let update = core.update("IDLE", Some(FeedbackItem::warning("Can't detect torso")));
        assert_eq!(update.feedback[0].text, "Hold still");
        assert_eq!(update.feedback[1].text, "Can't detect torso");
    }
}
