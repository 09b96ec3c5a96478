// ABOUTME: Feedback manager holding the de-duplicated, priority-ordered feedback of one attempt
// ABOUTME: Prevents flooding the consumer with repeated or conflicting messages within a rep or hold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::trace;
use workout_core::{FeedbackItem, FeedbackPriority};

#[derive(Debug, Clone)]
struct Entry {
    item: FeedbackItem,
    seq: u64,
}

/// Current feedback set of a single analyzer
///
/// Stores at most one entry per text. Re-adding a text at a lower or equal
/// priority is a no-op; a higher priority replaces the stored one but keeps
/// its original insertion position for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct FeedbackManager {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl FeedbackManager {
    /// Create an empty manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text`, or upgrade it if already present at a lower priority
    ///
    /// Returns `true` when the stored set changed.
    pub fn add(&mut self, text: impl Into<String>, priority: FeedbackPriority) -> bool {
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.text == text) {
            if priority > entry.item.priority {
                trace!(text = %text, from = %entry.item.priority, to = %priority, "Feedback upgraded");
                entry.item.priority = priority;
                return true;
            }
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            item: FeedbackItem::new(text, priority),
            seq,
        });
        true
    }

    /// Add an existing feedback item
    pub fn add_item(&mut self, item: FeedbackItem) -> bool {
        self.add(item.text, item.priority)
    }

    /// Drop `text`; returns `true` when it was stored
    pub fn remove(&mut self, text: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.item.text != text);
        self.entries.len() != before
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot ordered by priority (highest first), then insertion order
    #[must_use]
    pub fn get(&self) -> Vec<FeedbackItem> {
        let mut ordered: Vec<&Entry> = self.entries.iter().collect();
        ordered.sort_by(|a, b| {
            b.item
                .priority
                .cmp(&a.item.priority)
                .then(a.seq.cmp(&b.seq))
        });
        ordered.into_iter().map(|e| e.item.clone()).collect()
    }

    /// Whether `text` is currently stored
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.item.text == text)
    }

    /// Stored priority of `text`
    #[must_use]
    pub fn priority_of(&self, text: &str) -> Option<FeedbackPriority> {
        self.entries
            .iter()
            .find(|e| e.item.text == text)
            .map(|e| e.item.priority)
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_text_is_stored_once() {
        let mut manager = FeedbackManager::new();
        assert!(manager.add("Lower your hips", FeedbackPriority::High));
        assert!(!manager.add("Lower your hips", FeedbackPriority::High));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_lower_priority_does_not_downgrade() {
        let mut manager = FeedbackManager::new();
        manager.add("Straighten your body", FeedbackPriority::Warning);
        assert!(!manager.add("Straighten your body", FeedbackPriority::Low));
        assert_eq!(
            manager.priority_of("Straighten your body"),
            Some(FeedbackPriority::Warning)
        );
    }

    #[test]
    fn test_ordering_is_priority_then_insertion() {
        let mut manager = FeedbackManager::new();
        manager.add("a", FeedbackPriority::Low);
        manager.add("b", FeedbackPriority::High);
        manager.add("c", FeedbackPriority::High);
        manager.add("d", FeedbackPriority::Info);
        // Upgrade keeps its original position among equals
        manager.add("a", FeedbackPriority::High);

        let texts: Vec<String> = manager.get().into_iter().map(|f| f.text).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_clear_empties_and_get_is_non_destructive() {
        let mut manager = FeedbackManager::new();
        manager.add("x", FeedbackPriority::Success);
        assert_eq!(manager.get().len(), 1);
        assert_eq!(manager.get().len(), 1);
        manager.clear();
        assert!(manager.get().is_empty());
    }

    #[test]
    fn test_remove_drops_only_that_text() {
        let mut manager = FeedbackManager::new();
        manager.add("slight", FeedbackPriority::High);
        manager.add("drift", FeedbackPriority::High);
        assert!(manager.remove("slight"));
        assert!(!manager.remove("slight"));
        assert!(!manager.contains("slight"));
        assert!(manager.contains("drift"));
    }
}
