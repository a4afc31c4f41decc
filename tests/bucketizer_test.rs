// ABOUTME: Property-style integration tests for the calendar bucket grid
// ABOUTME: Sweeps period and interval combinations checking coverage, order, and alignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use liftbook_insights::bucketizer::partition;
use liftbook_insights::{TrendInterval, TrendPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const PERIODS: [TrendPeriod; 6] = [
    TrendPeriod::OneMonth,
    TrendPeriod::ThreeMonths,
    TrendPeriod::SixMonths,
    TrendPeriod::OneYear,
    TrendPeriod::TwoYears,
    TrendPeriod::All,
];

const GRID_INTERVALS: [TrendInterval; 4] = [
    TrendInterval::Week,
    TrendInterval::Fortnight,
    TrendInterval::Month,
    TrendInterval::Quarter,
];

#[test]
fn test_grid_is_contiguous_ordered_and_covers_the_window() {
    let today = date(2025, 6, 15);

    for period in PERIODS {
        let window_start = period.start_date(today);
        for interval in GRID_INTERVALS {
            let buckets =
                partition(BTreeMap::<NaiveDate, ()>::new(), window_start, today, interval);

            assert!(
                !buckets.is_empty(),
                "{period:?}/{interval:?} produced no buckets"
            );
            assert!(
                buckets[0].start <= window_start,
                "{period:?}/{interval:?} first bucket misses the window start"
            );
            assert_eq!(
                buckets.last().unwrap().end,
                today,
                "{period:?}/{interval:?} last bucket must end today"
            );
            for pair in buckets.windows(2) {
                assert_eq!(
                    pair[1].start,
                    pair[0].end.succ_opt().unwrap(),
                    "{period:?}/{interval:?} grid has a gap or overlap"
                );
            }
            for bucket in &buckets {
                assert!(bucket.start <= bucket.end);
                assert!(!bucket.label.is_empty());
            }
        }
    }
}

#[test]
fn test_weekly_buckets_start_on_monday_and_span_seven_days() {
    let today = date(2025, 6, 15);

    for period in PERIODS {
        let window_start = period.start_date(today);
        let buckets = partition(
            BTreeMap::<NaiveDate, ()>::new(),
            window_start,
            today,
            TrendInterval::Week,
        );

        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.start.weekday(), Weekday::Mon);
            assert_eq!(bucket.nominal_days, 7);
            let span = (bucket.end - bucket.start).num_days() + 1;
            if i + 1 < buckets.len() {
                assert_eq!(span, 7);
            } else {
                assert!(span <= 7, "tail bucket may only shrink");
            }
        }
    }
}

#[test]
fn test_fortnight_buckets_hold_fourteen_days() {
    let today = date(2025, 6, 15);
    let window_start = TrendPeriod::ThreeMonths.start_date(today);
    let buckets = partition(
        BTreeMap::<NaiveDate, ()>::new(),
        window_start,
        today,
        TrendInterval::Fortnight,
    );

    for bucket in &buckets {
        assert_eq!(bucket.start.weekday(), Weekday::Mon);
        assert_eq!(bucket.nominal_days, 14);
    }
    // 2025-03-15 sits in the Monday fortnight opening 03-10.
    assert_eq!(buckets[0].start, date(2025, 3, 10));
    assert_eq!(buckets[0].label, "03-10 ~ 03-23");
}

#[test]
fn test_monthly_grid_follows_calendar_month_lengths() {
    let today = date(2025, 3, 31);
    let window_start = TrendPeriod::SixMonths.start_date(today);
    let buckets = partition(
        BTreeMap::<NaiveDate, ()>::new(),
        window_start,
        today,
        TrendInterval::Month,
    );

    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2024-09", "2024-10", "2024-11", "2024-12", "2025-01", "2025-02", "2025-03"]
    );
    // 2025 is not a leap year.
    let nominal: Vec<i64> = buckets.iter().map(|b| b.nominal_days).collect();
    assert_eq!(nominal, vec![30, 31, 30, 31, 31, 28, 31]);
}

#[test]
fn test_quarter_grid_boundaries() {
    let today = date(2025, 5, 10);
    let window_start = TrendPeriod::OneYear.start_date(today);
    let buckets = partition(
        BTreeMap::<NaiveDate, ()>::new(),
        window_start,
        today,
        TrendInterval::Quarter,
    );

    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2024-Q2", "2024-Q3", "2024-Q4", "2025-Q1", "2025-Q2"]
    );
    assert_eq!(buckets[0].start, date(2024, 4, 1));
    assert_eq!(buckets.last().unwrap().end, today);
}

#[test]
fn test_all_interval_emits_only_sampled_days() {
    let today = date(2025, 6, 15);
    let mut samples = BTreeMap::new();
    samples.insert(date(2025, 6, 2), 1);
    samples.insert(date(2025, 6, 9), 2);

    let buckets = partition(samples, date(2025, 5, 15), today, TrendInterval::All);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label, "2025-06-02");
    assert_eq!(buckets[0].nominal_days, 1);
    assert_eq!(buckets[1].days, vec![(date(2025, 6, 9), 2)]);
}

#[test]
fn test_samples_land_in_their_buckets() {
    let today = date(2025, 6, 15);
    let mut samples = BTreeMap::new();
    samples.insert(date(2025, 5, 12), 10);
    samples.insert(date(2025, 5, 18), 20);
    samples.insert(date(2025, 6, 15), 30);

    let buckets = partition(samples, date(2025, 5, 15), today, TrendInterval::Week);

    // Monday week 05-12 ~ 05-18 catches both May days, the backward
    // extension included.
    assert_eq!(buckets[0].days, vec![(date(2025, 5, 12), 10), (date(2025, 5, 18), 20)]);
    let tail = buckets.last().unwrap();
    assert_eq!(tail.days, vec![(date(2025, 6, 15), 30)]);

    let placed: usize = buckets.iter().map(|b| b.days.len()).sum();
    assert_eq!(placed, 3);
}

#[test]
fn test_inverted_window_produces_nothing() {
    let buckets = partition(
        BTreeMap::<NaiveDate, ()>::new(),
        date(2025, 7, 1),
        date(2025, 6, 15),
        TrendInterval::Month,
    );
    assert!(buckets.is_empty());
}
