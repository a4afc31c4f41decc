// ABOUTME: Training-volume trend: tonnage per calendar span, filtered by body part
// ABOUTME: Zero-fills bucketed series so rest periods stay visible; raw mode lists lifted days only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Volume trend aggregation.
//!
//! Tonnage is `weight x reps` summed per calendar day, with absent fields
//! contributing nothing. Bucketed series emit every bucket of the window
//! with `0` where nothing was lifted; the per-day mode lists only days with
//! nonzero tonnage. Sets tagged cardio never count, whatever the filter.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::bucketizer;
use crate::models::{BodyPart, BodyPartFilter, TrendPoint, VolumeTrendReport, WorkoutSet};
use crate::timeframe::{TrendInterval, TrendPeriod};

/// Training-volume trend for one body-part selection.
#[must_use]
pub fn volume_trend(
    sets: &[WorkoutSet],
    period: TrendPeriod,
    interval: TrendInterval,
    filter: BodyPartFilter,
    today: NaiveDate,
) -> VolumeTrendReport {
    let window_start = period.start_date(today);

    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for set in sets {
        if set.body_part == BodyPart::Cardio || !filter.matches(set.body_part) {
            continue;
        }
        let day = set.day();
        if day < window_start || day > today {
            continue;
        }
        *by_day.entry(day).or_insert(0.0) += tonnage(set);
    }

    let all_mode = interval == TrendInterval::All;
    let points = bucketizer::partition(by_day, window_start, today, interval)
        .into_iter()
        .filter_map(|bucket| {
            let total: f64 = bucket.days.iter().map(|(_, tonnage)| tonnage).sum();
            let keep = !all_mode || total.abs() > 0.0;
            keep.then(|| TrendPoint {
                label: bucket.label,
                value: Some(total),
                estimated: false,
            })
        })
        .collect();

    VolumeTrendReport {
        body_part: filter,
        points,
    }
}

/// Weight times reps, with absent or non-finite fields counting as zero.
fn tonnage(set: &WorkoutSet) -> f64 {
    let weight = set.weight_kg.filter(|w| w.is_finite()).unwrap_or(0.0);
    let reps = f64::from(set.reps.unwrap_or(0));
    weight * reps
}
