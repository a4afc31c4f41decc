// ABOUTME: Consecutive-day workout streaks from raw activity dates
// ABOUTME: Longest run over the whole history; current run anchored inside a grace window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Streak computation.
//!
//! Works on calendar days: several records on one day count once, and the
//! input needs no ordering. Future-dated records are anomalies and are
//! ignored. The current streak anchors on the most recent logged day within
//! the grace window ending today, so an unlogged "today" keeps an active
//! streak alive until the grace window has fully elapsed.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::StreakSummary;

/// Current and longest consecutive-day streaks over `activity_dates`.
#[must_use]
pub fn compute_streaks(
    activity_dates: &[NaiveDate],
    today: NaiveDate,
    grace_days: u32,
) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = activity_dates
        .iter()
        .copied()
        .filter(|day| *day <= today)
        .collect();

    StreakSummary {
        current_streak: current_streak(&days, today, grace_days),
        longest_streak: longest_streak(&days),
    }
}

/// Longest run of consecutive calendar days anywhere in the history.
fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

/// Run of logged days ending at the anchor: the most recent logged day in
/// `[today - grace_days, today]`. No logged day there means no current
/// streak.
fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate, grace_days: u32) -> u32 {
    let anchor = (0..=i64::from(grace_days))
        .map(|back| today - Duration::days(back))
        .find(|candidate| days.contains(candidate));
    let Some(anchor) = anchor else {
        return 0;
    };

    let mut streak = 0u32;
    let mut cursor = anchor;
    while days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}
