// ABOUTME: Per-exercise strength trend via repetition-max normalization and day-max carry
// ABOUTME: Sets become comparable weights, days keep their best lift, buckets keep their best day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Strength trend aggregation.
//!
//! Pipeline: filter sets the target accepts, normalize each to a comparable
//! weight, carry the best value per calendar day, then the best day per
//! bucket. A day's estimation flag is the flag of the sample that won the
//! day, not an OR across the day; a bucket is additionally estimated when
//! more than one day fed it, since collapsing days is itself an
//! approximation. Empty buckets are omitted rather than emitted as nulls.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::algorithms::rep_max::{RepMaxFormula, RmTarget};
use crate::bucketizer;
use crate::models::{TrendPoint, WorkoutSet};
use crate::timeframe::{TrendInterval, TrendPeriod};

/// Best comparable lift of one calendar day.
#[derive(Debug, Clone, Copy)]
struct DayBest {
    weight_kg: f64,
    estimated: bool,
}

/// Per-exercise weight trend for one repetition-max target.
///
/// `sets` is expected to hold one exercise's history, already filtered by
/// the storage layer; dates outside `[period start, today]` are dropped
/// here as well so a wider slice cannot skew the series.
#[must_use]
pub fn weight_trend(
    sets: &[WorkoutSet],
    period: TrendPeriod,
    interval: TrendInterval,
    target: RmTarget,
    formula: RepMaxFormula,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let window_start = period.start_date(today);
    let by_day = day_maxima(sets, target, formula, window_start, today);

    bucketizer::partition(by_day, window_start, today, interval)
        .into_iter()
        .filter(|bucket| !bucket.days.is_empty())
        .map(|bucket| {
            let contributing_days = bucket.days.len();
            let mut best: Option<DayBest> = None;
            for &(_, day) in &bucket.days {
                // Strict comparison keeps the earliest day on ties.
                if best.is_none_or(|b| day.weight_kg > b.weight_kg) {
                    best = Some(day);
                }
            }
            TrendPoint {
                label: bucket.label,
                value: best.map(|b| b.weight_kg),
                estimated: best.is_some_and(|b| b.estimated) || contributing_days > 1,
            }
        })
        .collect()
}

/// Reduce raw sets to the best comparable weight per calendar day.
///
/// Sets are walked in timestamp order so that same-value ties resolve to
/// the earliest sample regardless of input order.
fn day_maxima(
    sets: &[WorkoutSet],
    target: RmTarget,
    formula: RepMaxFormula,
    window_start: NaiveDate,
    today: NaiveDate,
) -> BTreeMap<NaiveDate, DayBest> {
    let mut eligible: Vec<&WorkoutSet> = sets
        .iter()
        .filter(|set| target.accepts(set.weight_kg, set.reps))
        .collect();
    eligible.sort_by_key(|set| set.recorded_at);

    let mut by_day = BTreeMap::new();
    for set in eligible {
        let (Some(weight), Some(reps)) = (set.weight_kg, set.reps) else {
            continue;
        };
        let day = set.day();
        if day < window_start || day > today {
            continue;
        }
        let comparable = target.comparable(weight, reps, formula);
        if !comparable.weight_kg.is_finite() {
            continue;
        }
        let candidate = DayBest {
            weight_kg: comparable.weight_kg,
            estimated: comparable.estimated,
        };
        by_day
            .entry(day)
            .and_modify(|best: &mut DayBest| {
                if candidate.weight_kg > best.weight_kg {
                    *best = candidate;
                }
            })
            .or_insert(candidate);
    }
    by_day
}
