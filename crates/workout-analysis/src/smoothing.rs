// ABOUTME: Fixed-capacity rolling average used to smooth noisy per-frame readings
// ABOUTME: Oldest readings are evicted once the window is full
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;

/// Bounded FIFO of recent readings with a running mean
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Create a window holding at most `capacity` readings (minimum one)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a reading and return the mean of the window
    pub fn push(&mut self, value: f64) -> f64 {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
        self.mean().unwrap_or(value)
    }

    /// Mean of the readings currently held
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// Drop every reading
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of readings held
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no reading is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the window reached its capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Maximum number of readings
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_reading() {
        let mut window = RollingWindow::new(3);
        window.push(3.0);
        window.push(6.0);
        assert!((window.push(9.0) - 6.0).abs() < f64::EPSILON);
        assert!(window.is_full());
        assert!((window.push(12.0) - 9.0).abs() < f64::EPSILON);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_single_spike_is_damped() {
        let mut window = RollingWindow::new(5);
        for _ in 0..4 {
            window.push(10.0);
        }
        assert!((window.push(60.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_capacity_holds_one_reading() {
        let mut window = RollingWindow::new(0);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.mean(), Some(2.0));
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.mean(), None);
    }
}
