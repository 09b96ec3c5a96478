// ABOUTME: Integration tests for the per-attempt feedback manager
// ABOUTME: Covers de-duplication, priority upgrades, ordering, and attempt resets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_analysis::FeedbackManager;
use workout_core::{FeedbackItem, FeedbackPriority};

fn texts(manager: &FeedbackManager) -> Vec<String> {
    manager.get().into_iter().map(|f| f.text).collect()
}

#[test]
fn test_full_priority_scale_ordering() {
    let mut manager = FeedbackManager::new();
    manager.add("info", FeedbackPriority::Info);
    manager.add("low", FeedbackPriority::Low);
    manager.add("high", FeedbackPriority::High);
    manager.add("warning", FeedbackPriority::Warning);
    manager.add("success", FeedbackPriority::Success);

    assert_eq!(texts(&manager), ["success", "warning", "high", "low", "info"]);
}

#[test]
fn test_repeated_frames_do_not_flood() {
    let mut manager = FeedbackManager::new();
    for _ in 0..30 {
        manager.add("Raise your hips, don't sag", FeedbackPriority::High);
    }
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_upgrade_changes_priority_and_position() {
    let mut manager = FeedbackManager::new();
    manager.add("first", FeedbackPriority::Low);
    manager.add("second", FeedbackPriority::High);
    assert_eq!(texts(&manager), ["second", "first"]);

    assert!(manager.add("first", FeedbackPriority::Warning));
    assert_eq!(texts(&manager), ["first", "second"]);
    assert_eq!(manager.priority_of("first"), Some(FeedbackPriority::Warning));
}

#[test]
fn test_add_item_and_contains() {
    let mut manager = FeedbackManager::new();
    assert!(manager.add_item(FeedbackItem::success("Correct form")));
    assert!(!manager.add_item(FeedbackItem::info("Correct form")));
    assert!(manager.contains("Correct form"));
    assert!(!manager.contains("correct form"));
    assert_eq!(manager.priority_of("missing"), None);
}

#[test]
fn test_clear_starts_a_fresh_attempt() {
    let mut manager = FeedbackManager::new();
    manager.add("old", FeedbackPriority::High);
    manager.clear();
    assert!(manager.is_empty());

    manager.add("new", FeedbackPriority::Low);
    manager.add("old", FeedbackPriority::Low);
    assert_eq!(texts(&manager), ["new", "old"]);
}
