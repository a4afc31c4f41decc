// ABOUTME: Stateless calendar arithmetic shared by period resolution and the bucketizer
// ABOUTME: Monday-aligned weeks, month and quarter bounds, checked calendar-unit subtraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Pure calendar helpers.
//!
//! Every function takes the dates it operates on as explicit arguments and
//! holds no state, so calendar math stays trivially testable and safe to call
//! from concurrent requests.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::constants::windows;

/// The Monday on or before `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(offset)
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .map_or(date, |next| next - Duration::days(1))
}

/// One-based quarter index of `date` (Jan-Mar is 1).
#[must_use]
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// First day of the calendar quarter containing `date`.
#[must_use]
pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    let first_month = date.month0() / 3 * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
}

/// Last day of the calendar quarter containing `date`.
#[must_use]
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    quarter_start(date)
        .checked_add_months(Months::new(3))
        .map_or(date, |next| next - Duration::days(1))
}

/// `date` minus `months` whole calendar months.
///
/// Calendar-unit subtraction, not a fixed day count: one month before
/// March 31 is the last day of February.
#[must_use]
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// `date` minus `years` whole calendar years (Feb 29 clamps to Feb 28).
#[must_use]
pub fn years_back(date: NaiveDate, years: u32) -> NaiveDate {
    months_back(date, years.saturating_mul(12))
}

/// Sentinel start date for the unbounded lookback window.
#[must_use]
pub fn all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(windows::ALL_TIME_START_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}
