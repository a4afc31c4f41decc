// ABOUTME: Partitions day-keyed values into contiguous calendar-aligned buckets with labels
// ABOUTME: Monday weeks and fortnights, calendar months and quarters, raw per-day passthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Calendar bucketing.
//!
//! The grid always starts at the first day of the calendar unit containing
//! the window start (for weeks and fortnights that extends the window
//! backward to a Monday, so the head bucket is never a truncated partial
//! week) and runs bucket by bucket until the unit containing "today", whose
//! end is clipped to today. Buckets are therefore contiguous, non-overlapping
//! and ascending by construction, covering `[effective_start, today]` exactly.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar;
use crate::timeframe::TrendInterval;

/// One calendar-aligned span and the day-keyed values falling inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct DateBucket<V> {
    /// First calendar day of the span.
    pub start: NaiveDate,
    /// Last calendar day of the span, clipped to today for the tail bucket.
    pub end: NaiveDate,
    /// Unclipped span width in days: 7 for weeks, 14 for fortnights, the
    /// month or quarter length otherwise, 1 in per-day mode.
    pub nominal_days: i64,
    /// Display label for the span.
    pub label: String,
    /// `(day, value)` pairs inside the span, ascending by day.
    pub days: Vec<(NaiveDate, V)>,
}

/// Partition `day_values` into ordered buckets covering the window.
///
/// `TrendInterval::All` skips grid building entirely: each present day
/// becomes its own single-day bucket and no empty days are filled in. The
/// grid intervals emit every bucket of the span, empty or not; whether empty
/// buckets survive into the final series is the calling aggregator's policy.
///
/// Values dated outside `[effective_start, today]` are silently dropped.
#[must_use]
pub fn partition<V>(
    day_values: BTreeMap<NaiveDate, V>,
    window_start: NaiveDate,
    today: NaiveDate,
    interval: TrendInterval,
) -> Vec<DateBucket<V>> {
    if window_start > today {
        return Vec::new();
    }
    if interval == TrendInterval::All {
        return per_day_buckets(day_values, window_start, today);
    }
    let mut grid = build_grid(window_start, today, interval);
    fill_grid(&mut grid, day_values);
    grid
}

/// `"YYYY-MM-DD"` label for single-day points.
#[must_use]
pub fn day_label(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

fn per_day_buckets<V>(
    day_values: BTreeMap<NaiveDate, V>,
    window_start: NaiveDate,
    today: NaiveDate,
) -> Vec<DateBucket<V>> {
    day_values
        .into_iter()
        .filter(|(day, _)| *day >= window_start && *day <= today)
        .map(|(day, value)| DateBucket {
            start: day,
            end: day,
            nominal_days: 1,
            label: day_label(day),
            days: vec![(day, value)],
        })
        .collect()
}

fn build_grid<V>(
    window_start: NaiveDate,
    today: NaiveDate,
    interval: TrendInterval,
) -> Vec<DateBucket<V>> {
    let mut cursor = match interval {
        TrendInterval::Week | TrendInterval::Fortnight => calendar::week_start(window_start),
        TrendInterval::Month => calendar::month_start(window_start),
        TrendInterval::Quarter => calendar::quarter_start(window_start),
        TrendInterval::All => return Vec::new(),
    };
    let mut buckets = Vec::new();
    while cursor <= today {
        let grid_end = match interval {
            TrendInterval::Week => cursor + Duration::days(6),
            TrendInterval::Fortnight => cursor + Duration::days(13),
            TrendInterval::Month => calendar::month_end(cursor),
            TrendInterval::Quarter => calendar::quarter_end(cursor),
            TrendInterval::All => cursor,
        };
        let end = grid_end.min(today);
        buckets.push(DateBucket {
            start: cursor,
            end,
            nominal_days: (grid_end - cursor).num_days() + 1,
            label: bucket_label(interval, cursor, end),
            days: Vec::new(),
        });
        cursor = grid_end + Duration::days(1);
    }
    buckets
}

fn bucket_label(interval: TrendInterval, start: NaiveDate, end: NaiveDate) -> String {
    match interval {
        TrendInterval::Week | TrendInterval::Fortnight => {
            format!("{} ~ {}", start.format("%m-%d"), end.format("%m-%d"))
        }
        TrendInterval::Month => start.format("%Y-%m").to_string(),
        TrendInterval::Quarter => format!("{}-Q{}", start.year(), calendar::quarter_of(start)),
        TrendInterval::All => day_label(start),
    }
}

/// Single ascending pass: the map and the grid are both ordered, so each day
/// is offered to buckets in turn until one whose end reaches it takes it.
fn fill_grid<V>(grid: &mut [DateBucket<V>], day_values: BTreeMap<NaiveDate, V>) {
    let mut days = day_values.into_iter().peekable();
    for bucket in grid {
        while let Some((day, value)) = days.next_if(|(day, _)| *day <= bucket.end) {
            if day >= bucket.start {
                bucket.days.push((day, value));
            }
        }
    }
}
