// ABOUTME: Per-exercise counters of feedback emissions across a workout session
// ABOUTME: Reports the most frequent form issues and per-exercise totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use workout_core::{ExerciseKind, FeedbackItem, FeedbackPriority};

/// Emission count of one feedback text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCount {
    /// Feedback text
    pub text: String,
    /// Highest priority the text was emitted with
    pub priority: FeedbackPriority,
    /// Number of emissions
    pub count: u32,
}

/// Feedback emission statistics for one session
///
/// An emission is a text newly entering an analyzer's persistent feedback set;
/// a text that stays in the set over many frames counts once.
#[derive(Debug, Clone, Default)]
pub struct SessionFeedbackStats {
    by_exercise: HashMap<ExerciseKind, HashMap<String, (FeedbackPriority, u32)>>,
}

impl SessionFeedbackStats {
    /// Empty statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one emission of `item` for `exercise`
    pub fn record(&mut self, exercise: ExerciseKind, item: &FeedbackItem) {
        let entry = self
            .by_exercise
            .entry(exercise)
            .or_default()
            .entry(item.text.clone())
            .or_insert((item.priority, 0));
        entry.0 = entry.0.max(item.priority);
        entry.1 = entry.1.saturating_add(1);
    }

    /// Emissions of `text` for `exercise`
    #[must_use]
    pub fn count(&self, exercise: ExerciseKind, text: &str) -> u32 {
        self.by_exercise
            .get(&exercise)
            .and_then(|texts| texts.get(text))
            .map_or(0, |(_, count)| *count)
    }

    /// Most frequent non-success feedback, highest count first
    ///
    /// `None` combines every exercise. Ties are ordered by text.
    #[must_use]
    pub fn common_issues(&self, exercise: Option<ExerciseKind>, limit: usize) -> Vec<IssueCount> {
        let mut combined: HashMap<&str, (FeedbackPriority, u32)> = HashMap::new();
        let selected = self
            .by_exercise
            .iter()
            .filter(|(kind, _)| exercise.is_none_or(|wanted| wanted == **kind));
        for (_, texts) in selected {
            for (text, (priority, count)) in texts {
                let entry = combined.entry(text).or_insert((*priority, 0));
                entry.0 = entry.0.max(*priority);
                entry.1 = entry.1.saturating_add(*count);
            }
        }

        let mut issues: Vec<IssueCount> = combined
            .into_iter()
            .filter(|(_, (priority, _))| *priority != FeedbackPriority::Success)
            .map(|(text, (priority, count))| IssueCount {
                text: text.to_owned(),
                priority,
                count,
            })
            .collect();
        issues.sort_by(|a, b| (Reverse(a.count), &a.text).cmp(&(Reverse(b.count), &b.text)));
        issues.truncate(limit);
        issues
    }

    /// Total emissions per exercise, in [`ExerciseKind::ALL`] order
    #[must_use]
    pub fn exercise_totals(&self) -> Vec<(ExerciseKind, u32)> {
        ExerciseKind::ALL
            .into_iter()
            .filter_map(|kind| {
                self.by_exercise.get(&kind).map(|texts| {
                    let total = texts
                        .values()
                        .fold(0u32, |acc, (_, count)| acc.saturating_add(*count));
                    (kind, total)
                })
            })
            .collect()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_exercise.is_empty()
    }

    /// Forget every recorded emission
    pub fn clear(&mut self) {
        self.by_exercise.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_issues_skip_success_and_sort() {
        let mut stats = SessionFeedbackStats::new();
        let deep = FeedbackItem::new("Squat too deep", FeedbackPriority::High);
        let lean = FeedbackItem::new("Bend forward more", FeedbackPriority::High);
        let good = FeedbackItem::success("Correct form");
        for _ in 0..3 {
            stats.record(ExerciseKind::Squat, &deep);
            stats.record(ExerciseKind::Squat, &good);
        }
        stats.record(ExerciseKind::Squat, &lean);

        let issues = stats.common_issues(Some(ExerciseKind::Squat), 5);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].text, "Squat too deep");
        assert_eq!(issues[0].count, 3);
        assert_eq!(issues[1].text, "Bend forward more");
        assert!(stats.common_issues(Some(ExerciseKind::Plank), 5).is_empty());
    }

    #[test]
    fn test_combined_issues_and_totals() {
        let mut stats = SessionFeedbackStats::new();
        let hips = FeedbackItem::new("Raise your hips", FeedbackPriority::High);
        stats.record(ExerciseKind::Plank, &hips);
        stats.record(ExerciseKind::Pushup, &hips);
        stats.record(ExerciseKind::Pushup, &FeedbackItem::success("Correct form"));

        let issues = stats.common_issues(None, 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].count, 2);
        assert_eq!(
            stats.exercise_totals(),
            vec![(ExerciseKind::Plank, 1), (ExerciseKind::Pushup, 2)]
        );

        stats.clear();
        assert!(stats.is_empty());
        assert_eq!(stats.count(ExerciseKind::Plank, "Raise your hips"), 0);
    }
}
