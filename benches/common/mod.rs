// ABOUTME: Common benchmark utilities and pose fixtures for performance testing
// ABOUTME: Provides deterministic landmark recordings for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and test fixtures.
//!
//! Provides deterministic pose recordings for Criterion benchmarks.

pub mod fixtures;
