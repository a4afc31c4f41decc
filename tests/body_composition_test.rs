// ABOUTME: Integration tests for the body-composition trend
// ABOUTME: Covers per-metric independence, mean rounding, estimation flags, and raw mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use liftbook_insights::{BodyMeasurement, EngineConfig, TrendEngine, TrendInterval, TrendPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn weigh_in(
    body_weight_kg: Option<f64>,
    muscle_mass_kg: Option<f64>,
    body_fat_pct: Option<f64>,
    at: DateTime<Local>,
) -> BodyMeasurement {
    BodyMeasurement {
        height_cm: None,
        body_weight_kg,
        muscle_mass_kg,
        body_fat_pct,
        recorded_at: at,
    }
}

fn engine() -> TrendEngine {
    TrendEngine::anchored(date(2025, 6, 15), EngineConfig::default())
}

#[test]
fn test_single_measurement_bucket_is_exact() {
    let measurements = vec![weigh_in(Some(82.3), None, None, noon(2025, 6, 10))];
    let report = engine().body_composition_trend(
        &measurements,
        TrendPeriod::OneMonth,
        TrendInterval::Month,
    );

    assert_eq!(report.body_weight.len(), 1);
    assert_eq!(report.body_weight[0].label, "2025-06");
    assert!((report.body_weight[0].value.unwrap() - 82.3).abs() < 1e-9);
    assert!(!report.body_weight[0].estimated);
    assert!(report.muscle_mass.is_empty());
    assert!(report.body_fat.is_empty());
}

#[test]
fn test_bucket_mean_rounds_to_one_decimal_and_is_estimated() {
    let measurements = vec![
        weigh_in(Some(80.0), None, None, noon(2025, 6, 3)),
        weigh_in(Some(81.5), None, None, noon(2025, 6, 10)),
    ];
    let report = engine().body_composition_trend(
        &measurements,
        TrendPeriod::OneMonth,
        TrendInterval::Month,
    );

    // (80.0 + 81.5) / 2 = 80.75, reported as 80.8.
    assert!((report.body_weight[0].value.unwrap() - 80.8).abs() < 1e-9);
    assert!(report.body_weight[0].estimated);
}

#[test]
fn test_metrics_average_and_flag_independently() {
    let measurements = vec![
        weigh_in(Some(80.0), None, Some(20.0), noon(2025, 6, 3)),
        weigh_in(Some(82.0), None, None, noon(2025, 6, 5)),
    ];
    let report = engine().body_composition_trend(
        &measurements,
        TrendPeriod::OneMonth,
        TrendInterval::Month,
    );

    // Weight averaged two samples; fat came from a single reading in a
    // narrow date range, so it stays exact.
    assert!((report.body_weight[0].value.unwrap() - 81.0).abs() < 1e-9);
    assert!(report.body_weight[0].estimated);
    assert!((report.body_fat[0].value.unwrap() - 20.0).abs() < 1e-9);
    assert!(!report.body_fat[0].estimated);
    assert!(report.muscle_mass.is_empty());
}

#[test]
fn test_wide_date_spread_marks_even_single_readings_estimated() {
    // Two weigh-ins 85 days apart inside one quarter: the bucket's dates
    // cover more than 80% of its 90-day width, so even the metric that got
    // a single reading is not representative of the span it labels.
    let anchor = TrendEngine::anchored(date(2025, 3, 31), EngineConfig::default());
    let measurements = vec![
        weigh_in(Some(80.0), None, Some(20.0), noon(2025, 1, 2)),
        weigh_in(Some(82.0), None, None, noon(2025, 3, 28)),
    ];
    let report = anchor.body_composition_trend(
        &measurements,
        TrendPeriod::SixMonths,
        TrendInterval::Quarter,
    );

    assert_eq!(report.body_fat.len(), 1);
    assert_eq!(report.body_fat[0].label, "2025-Q1");
    assert!(report.body_fat[0].estimated);

    // Raising the allowed spread past the actual one clears the flag.
    let lenient = TrendEngine::anchored(
        date(2025, 3, 31),
        EngineConfig {
            sparse_span_ratio: 1.0,
            ..EngineConfig::default()
        },
    );
    let report = lenient.body_composition_trend(
        &measurements,
        TrendPeriod::SixMonths,
        TrendInterval::Quarter,
    );
    assert!(!report.body_fat[0].estimated);
    assert!(report.body_weight[0].estimated);
}

#[test]
fn test_empty_buckets_are_omitted_per_metric() {
    let measurements = vec![weigh_in(Some(81.0), Some(36.2), None, noon(2025, 2, 14))];
    let report = engine().body_composition_trend(
        &measurements,
        TrendPeriod::SixMonths,
        TrendInterval::Month,
    );

    assert_eq!(report.body_weight.len(), 1);
    assert_eq!(report.body_weight[0].label, "2025-02");
    assert_eq!(report.muscle_mass.len(), 1);
    assert!(report.body_fat.is_empty());
}

#[test]
fn test_raw_mode_emits_each_sample_unrounded() {
    let measurements = vec![
        weigh_in(Some(83.456), None, Some(21.05), noon(2025, 6, 10)),
        weigh_in(Some(83.1), None, None, noon(2025, 6, 10)),
    ];
    let report =
        engine().body_composition_trend(&measurements, TrendPeriod::OneMonth, TrendInterval::All);

    // Both same-day samples survive as separate raw points.
    assert_eq!(report.body_weight.len(), 2);
    assert_eq!(report.body_weight[0].label, "2025-06-10");
    assert!((report.body_weight[0].value.unwrap() - 83.456).abs() < 1e-12);
    assert!((report.body_weight[1].value.unwrap() - 83.1).abs() < 1e-12);
    assert!((report.body_fat[0].value.unwrap() - 21.05).abs() < 1e-12);
    for point in report.body_weight.iter().chain(report.body_fat.iter()) {
        assert!(!point.estimated);
    }
}

#[test]
fn test_non_finite_values_are_dropped_not_propagated() {
    let measurements = vec![
        weigh_in(Some(f64::NAN), Some(f64::INFINITY), Some(20.0), noon(2025, 6, 10)),
        weigh_in(Some(81.0), None, None, noon(2025, 6, 12)),
    ];
    let report = engine().body_composition_trend(
        &measurements,
        TrendPeriod::OneMonth,
        TrendInterval::Month,
    );

    // The NaN weight is excluded from numerator and denominator alike.
    assert!((report.body_weight[0].value.unwrap() - 81.0).abs() < 1e-9);
    assert!(report.muscle_mass.is_empty());
    assert!((report.body_fat[0].value.unwrap() - 20.0).abs() < 1e-9);
}
