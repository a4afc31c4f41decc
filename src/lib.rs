// ABOUTME: Library entry point for the Liftbook insights engine
// ABOUTME: Calendar-aligned trend aggregation and streak statistics over workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

#![deny(unsafe_code)]

//! # Liftbook Insights
//!
//! The analytics engine of the Liftbook workout diary: turns sparse,
//! irregularly dated workout and body-measurement records into
//! calendar-aligned, chart-ready series and consecutive-day streak
//! statistics. Storage, authentication, and transport live in the server
//! crates; this crate only ever sees already-loaded records and validated
//! parameters.
//!
//! ## Features
//!
//! - **Calendar bucketing**: Monday-aligned weeks and fortnights, calendar
//!   months and quarters, tracking the real calendar rather than fixed-size
//!   windows
//! - **Rep-max normalization**: heterogeneous weight/rep sets become one
//!   comparable strength metric per day (Epley by default)
//! - **Measured vs. estimated**: every point says whether it was read off a
//!   single measurement or inferred by formula or averaging
//! - **Streaks**: current and longest consecutive-day runs with a
//!   configurable grace window for an unlogged "today"
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use liftbook_insights::{EngineConfig, TrendEngine};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let engine = TrendEngine::anchored(today, EngineConfig::default());
//!
//! let logged = [
//!     NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
//! ];
//! let streaks = engine.streaks(&logged);
//! assert_eq!(streaks.current_streak, 3);
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Numeric estimation algorithms (repetition-max formulas).
pub mod algorithms;

/// Body-composition trend aggregation.
pub mod body_analyzer;

/// Calendar-aligned partitioning of day-keyed values.
pub mod bucketizer;

/// Stateless calendar arithmetic.
pub mod calendar;

/// Cardio trend aggregation.
pub mod cardio_analyzer;

/// Engine policy configuration with environment overrides.
pub mod config;

/// Named constants for formulas, units, and policy defaults.
pub mod constants;

/// The facade binding a "now" snapshot to the aggregators.
pub mod engine;

/// Engine error types.
pub mod errors;

/// Input records and chart-ready output types.
pub mod models;

/// Per-exercise strength trend aggregation.
pub mod strength_analyzer;

/// Consecutive-day streak computation.
pub mod streak_calculator;

/// Lookback periods and bucket granularities.
pub mod timeframe;

/// Training-volume trend aggregation.
pub mod volume_analyzer;

pub use algorithms::rep_max::{RepMaxFormula, RmTarget};
pub use config::EngineConfig;
pub use engine::TrendEngine;
pub use errors::{InsightsError, InsightsResult};
pub use models::{
    BodyCompositionReport, BodyMeasurement, BodyPart, BodyPartFilter, CardioSession,
    CardioTrendReport, StreakSummary, TrendPoint, VolumeTrendReport, WorkoutSet,
};
pub use timeframe::{TrendInterval, TrendPeriod};
