// ABOUTME: Error types for the insights engine
// ABOUTME: Strict parameter parsing and configuration validation are the only fallible surfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

use thiserror::Error;

/// Errors surfaced by the insights engine.
///
/// Aggregation itself is infallible by contract: malformed samples are
/// dropped one by one and missing data degrades to null or omitted points.
/// What remains fallible is strict parsing of enumerated parameters and
/// configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightsError {
    /// A period string matched none of the enumerated lookback windows.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// An interval string matched none of the enumerated granularities.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A rep-max target string matched none of the enumerated targets.
    #[error("Invalid rep-max target: {0}")]
    InvalidRmTarget(String),

    /// A rep-max formula string matched none of the known formulas.
    #[error("Invalid rep-max formula: {0}")]
    InvalidRmFormula(String),

    /// A body-part string matched none of the known tags.
    #[error("Invalid body part: {0}")]
    InvalidBodyPart(String),

    /// A configuration knob failed range validation.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Human-readable reason the value was rejected.
        reason: String,
    },
}

/// Convenience alias for engine results.
pub type InsightsResult<T> = Result<T, InsightsError>;
