// ABOUTME: Numeric estimation algorithms backing the aggregators
// ABOUTME: Currently repetition-max normalization; one module per algorithm family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

/// Repetition-max estimation and target normalization.
pub mod rep_max;
