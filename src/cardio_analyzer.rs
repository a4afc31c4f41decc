// ABOUTME: Cardio trend aggregation into parallel distance, duration, and speed series
// ABOUTME: Day-level sums with unit conversion; average speed derives only from complete pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Cardio trend aggregation.
//!
//! Distance and duration are summed per calendar day and, when bucketed,
//! summed again per bucket. Sums of measurements stay measurements, so no
//! point in these series is ever flagged estimated. Average speed exists
//! only where a span has both a distance and a nonzero duration; everywhere
//! else the speed point is null while the measured series keep their values.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::bucketizer;
use crate::constants::units::{METERS_PER_KILOMETER, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::models::{CardioSession, CardioTrendReport, TrendPoint};
use crate::timeframe::{TrendInterval, TrendPeriod};

/// Distance and duration accumulated over one span, storage units.
///
/// A `None` side means no session in the span carried that measurement,
/// which is different from a measured zero.
#[derive(Debug, Clone, Copy, Default)]
struct SpanTotals {
    distance_m: Option<f64>,
    duration_sec: Option<f64>,
}

impl SpanTotals {
    fn add_session(&mut self, session: &CardioSession) {
        if let Some(meters) = session.distance_m.filter(|v| v.is_finite()) {
            *self.distance_m.get_or_insert(0.0) += meters;
        }
        if let Some(seconds) = session.duration_sec.filter(|v| v.is_finite()) {
            *self.duration_sec.get_or_insert(0.0) += seconds;
        }
    }

    fn merge(&mut self, other: Self) {
        if let Some(meters) = other.distance_m {
            *self.distance_m.get_or_insert(0.0) += meters;
        }
        if let Some(seconds) = other.duration_sec {
            *self.duration_sec.get_or_insert(0.0) += seconds;
        }
    }
}

/// Cardio trend for one exercise's sessions.
#[must_use]
pub fn cardio_trend(
    sessions: &[CardioSession],
    period: TrendPeriod,
    interval: TrendInterval,
    today: NaiveDate,
) -> CardioTrendReport {
    let window_start = period.start_date(today);

    let mut by_day: BTreeMap<NaiveDate, SpanTotals> = BTreeMap::new();
    for session in sessions {
        let day = session.day();
        if day < window_start || day > today {
            continue;
        }
        by_day.entry(day).or_default().add_session(session);
    }

    let mut report = CardioTrendReport::default();
    for bucket in bucketizer::partition(by_day, window_start, today, interval) {
        let mut totals = SpanTotals::default();
        for &(_, day_totals) in &bucket.days {
            totals.merge(day_totals);
        }

        let distance_km = totals.distance_m.map(|m| m / METERS_PER_KILOMETER);
        let duration_min = totals.duration_sec.map(|s| s / SECONDS_PER_MINUTE);
        let speed = average_speed(distance_km, duration_min);

        report.distance_km.push(TrendPoint {
            label: bucket.label.clone(),
            value: distance_km,
            estimated: false,
        });
        report.duration_min.push(TrendPoint {
            label: bucket.label.clone(),
            value: duration_min,
            estimated: false,
        });
        report.avg_speed_kmh.push(TrendPoint {
            label: bucket.label,
            value: speed,
            estimated: false,
        });
    }
    report
}

/// km/h over a span, rounded to one decimal; `None` unless both sides are
/// present and time actually passed.
fn average_speed(distance_km: Option<f64>, duration_min: Option<f64>) -> Option<f64> {
    match (distance_km, duration_min) {
        (Some(km), Some(minutes)) if minutes > 0.0 => {
            Some(round_tenth(km / (minutes / MINUTES_PER_HOUR)))
        }
        _ => None,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
