// ABOUTME: Body-composition trend: independent per-metric means over calendar buckets
// ABOUTME: Flags averaged points as estimates; raw mode emits each measurement untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Body-composition trend aggregation.
//!
//! Weight, muscle mass, and body fat are independent series over the same
//! bucket grid: a scale that reports only weight still lands in the weight
//! series while the other two skip that bucket. Averaged points round to
//! one decimal and are flagged estimated when several samples fed them or
//! when the bucket's measurement dates sprawl across most of its nominal
//! width. The per-sample mode reproduces measurements as logged, never
//! estimated.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::bucketizer::{self, DateBucket};
use crate::models::{BodyCompositionReport, BodyMeasurement, TrendPoint};
use crate::timeframe::{TrendInterval, TrendPeriod};

/// One measurement's metric values with non-finite noise already dropped.
#[derive(Debug, Clone, Copy)]
struct MetricSnapshot {
    body_weight: Option<f64>,
    muscle_mass: Option<f64>,
    body_fat: Option<f64>,
}

impl MetricSnapshot {
    fn of(measurement: &BodyMeasurement) -> Self {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        Self {
            body_weight: finite(measurement.body_weight_kg),
            muscle_mass: finite(measurement.muscle_mass_kg),
            body_fat: finite(measurement.body_fat_pct),
        }
    }
}

/// Body-composition trend over one user's measurements.
///
/// `sparse_span_ratio` is the configured fraction of a bucket's nominal
/// width beyond which the bucket's measurement dates count as sparse.
#[must_use]
pub fn body_composition_trend(
    measurements: &[BodyMeasurement],
    period: TrendPeriod,
    interval: TrendInterval,
    sparse_span_ratio: f64,
    today: NaiveDate,
) -> BodyCompositionReport {
    let window_start = period.start_date(today);

    if interval == TrendInterval::All {
        return per_sample_report(measurements, window_start, today);
    }

    let mut by_day: BTreeMap<NaiveDate, Vec<MetricSnapshot>> = BTreeMap::new();
    for measurement in measurements {
        let day = measurement.day();
        if day < window_start || day > today {
            continue;
        }
        by_day
            .entry(day)
            .or_default()
            .push(MetricSnapshot::of(measurement));
    }

    let mut report = BodyCompositionReport::default();
    for bucket in bucketizer::partition(by_day, window_start, today, interval) {
        let sparse = sparse_dates(&bucket, sparse_span_ratio);
        if let Some(point) = metric_mean(&bucket, sparse, |s| s.body_weight) {
            report.body_weight.push(point);
        }
        if let Some(point) = metric_mean(&bucket, sparse, |s| s.muscle_mass) {
            report.muscle_mass.push(point);
        }
        if let Some(point) = metric_mean(&bucket, sparse, |s| s.body_fat) {
            report.body_fat.push(point);
        }
    }
    report
}

/// Whether the bucket's measurement dates stretch over more of its nominal
/// width than the configured ratio allows. A lone date never counts.
fn sparse_dates(bucket: &DateBucket<Vec<MetricSnapshot>>, sparse_span_ratio: f64) -> bool {
    match (bucket.days.first(), bucket.days.last()) {
        (Some((first, _)), Some((last, _))) => {
            (*last - *first).num_days() as f64 > sparse_span_ratio * bucket.nominal_days as f64
        }
        _ => false,
    }
}

/// Mean of one metric over a bucket, or `None` when nothing contributed.
fn metric_mean(
    bucket: &DateBucket<Vec<MetricSnapshot>>,
    sparse: bool,
    metric: impl Fn(&MetricSnapshot) -> Option<f64>,
) -> Option<TrendPoint> {
    let mut sum = 0.0;
    let mut count: u32 = 0;
    for (_, snapshots) in &bucket.days {
        for snapshot in snapshots {
            if let Some(value) = metric(snapshot) {
                sum += value;
                count += 1;
            }
        }
    }

    if count == 0 {
        return None;
    }

    Some(TrendPoint {
        label: bucket.label.clone(),
        value: Some(round_tenth(sum / f64::from(count))),
        estimated: count > 1 || sparse,
    })
}

/// One point per measurement per metric, values as logged.
fn per_sample_report(
    measurements: &[BodyMeasurement],
    window_start: NaiveDate,
    today: NaiveDate,
) -> BodyCompositionReport {
    let mut ordered: Vec<&BodyMeasurement> = measurements
        .iter()
        .filter(|m| {
            let day = m.day();
            day >= window_start && day <= today
        })
        .collect();
    ordered.sort_by_key(|m| m.recorded_at);

    let mut report = BodyCompositionReport::default();
    for measurement in ordered {
        let snapshot = MetricSnapshot::of(measurement);
        let label = bucketizer::day_label(measurement.day());
        if let Some(value) = snapshot.body_weight {
            report.body_weight.push(raw_point(label.clone(), value));
        }
        if let Some(value) = snapshot.muscle_mass {
            report.muscle_mass.push(raw_point(label.clone(), value));
        }
        if let Some(value) = snapshot.body_fat {
            report.body_fat.push(raw_point(label, value));
        }
    }
    report
}

fn raw_point(label: String, value: f64) -> TrendPoint {
    TrendPoint {
        label,
        value: Some(value),
        estimated: false,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
