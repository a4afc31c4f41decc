// ABOUTME: Facade over the aggregators binding one "now" snapshot and the engine config
// ABOUTME: Report-assembly callers go through these five entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! The trend engine facade.
//!
//! Every computation resolves its lookback window and streak anchor against
//! a single calendar date captured when the engine was constructed, so one
//! request assembling several reports can never straddle midnight and
//! identical inputs always produce identical output.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::algorithms::rep_max::{RepMaxFormula, RmTarget};
use crate::body_analyzer;
use crate::cardio_analyzer;
use crate::config::EngineConfig;
use crate::models::{
    BodyCompositionReport, BodyMeasurement, BodyPartFilter, CardioSession, CardioTrendReport,
    StreakSummary, TrendPoint, VolumeTrendReport, WorkoutSet,
};
use crate::strength_analyzer;
use crate::streak_calculator;
use crate::timeframe::{TrendInterval, TrendPeriod};
use crate::volume_analyzer;

/// Pure computation facade for all workout analytics.
///
/// Holds no records, no caches, no I/O handles, so one engine can serve
/// concurrent requests freely. The only state is the "today" snapshot and
/// the policy configuration.
#[derive(Debug, Clone, Copy)]
pub struct TrendEngine {
    today: NaiveDate,
    config: EngineConfig,
}

impl Default for TrendEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendEngine {
    /// Engine anchored at the server's local calendar date, default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine anchored at the server's local calendar date with explicit
    /// policy, typically from [`EngineConfig::from_environment`].
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            today: Local::now().date_naive(),
            config,
        }
    }

    /// Engine with a fixed "today"; for tests and backfill jobs.
    #[must_use]
    pub const fn anchored(today: NaiveDate, config: EngineConfig) -> Self {
        Self { today, config }
    }

    /// The calendar date every window and streak resolves against.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Per-exercise strength trend normalized to `target` with the default
    /// (Epley) formula. Empty buckets are omitted.
    #[must_use]
    pub fn strength_trend(
        &self,
        sets: &[WorkoutSet],
        period: TrendPeriod,
        interval: TrendInterval,
        target: RmTarget,
    ) -> Vec<TrendPoint> {
        debug!(
            sets = sets.len(),
            period = period.as_str(),
            interval = interval.as_str(),
            target = target.as_str(),
            "computing strength trend"
        );
        strength_analyzer::weight_trend(
            sets,
            period,
            interval,
            target,
            RepMaxFormula::default(),
            self.today,
        )
    }

    /// Cardio trend: parallel distance, duration, and average-speed series.
    #[must_use]
    pub fn cardio_trend(
        &self,
        sessions: &[CardioSession],
        period: TrendPeriod,
        interval: TrendInterval,
    ) -> CardioTrendReport {
        debug!(
            sessions = sessions.len(),
            period = period.as_str(),
            interval = interval.as_str(),
            "computing cardio trend"
        );
        cardio_analyzer::cardio_trend(sessions, period, interval, self.today)
    }

    /// Training-volume trend for one body-part selection. Bucketed series
    /// are zero-filled across the whole window.
    #[must_use]
    pub fn volume_trend(
        &self,
        sets: &[WorkoutSet],
        period: TrendPeriod,
        interval: TrendInterval,
        filter: BodyPartFilter,
    ) -> VolumeTrendReport {
        debug!(
            sets = sets.len(),
            period = period.as_str(),
            interval = interval.as_str(),
            body_part = filter.as_str(),
            "computing volume trend"
        );
        volume_analyzer::volume_trend(sets, period, interval, filter, self.today)
    }

    /// Body-composition trend: independent weight, muscle-mass, and
    /// body-fat series.
    #[must_use]
    pub fn body_composition_trend(
        &self,
        measurements: &[BodyMeasurement],
        period: TrendPeriod,
        interval: TrendInterval,
    ) -> BodyCompositionReport {
        debug!(
            measurements = measurements.len(),
            period = period.as_str(),
            interval = interval.as_str(),
            "computing body composition trend"
        );
        body_analyzer::body_composition_trend(
            measurements,
            period,
            interval,
            self.config.sparse_span_ratio,
            self.today,
        )
    }

    /// Current and longest consecutive-day streaks over the full history.
    #[must_use]
    pub fn streaks(&self, activity_dates: &[NaiveDate]) -> StreakSummary {
        debug!(dates = activity_dates.len(), "computing streaks");
        streak_calculator::compute_streaks(
            activity_dates,
            self.today,
            self.config.streak_grace_days,
        )
    }
}
