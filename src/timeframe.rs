// ABOUTME: Lookback period and bucket granularity enums with calendar-aware resolution
// ABOUTME: Lenient wire parsing falls back to defaults; strict parsing reports the bad value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::errors::InsightsError;

/// How far back a trend reaches, counted in calendar units from "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendPeriod {
    /// One calendar month back.
    #[serde(rename = "1month")]
    OneMonth,
    /// Three calendar months back. Default when a period string is unknown.
    #[default]
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Six calendar months back.
    #[serde(rename = "6months")]
    SixMonths,
    /// One calendar year back.
    #[serde(rename = "1year")]
    OneYear,
    /// Two calendar years back.
    #[serde(rename = "2years")]
    TwoYears,
    /// Unbounded; resolves to a fixed far-past sentinel.
    #[serde(rename = "all")]
    All,
}

impl TrendPeriod {
    /// Inclusive start of the lookback window relative to `today`.
    ///
    /// Uses calendar-unit subtraction, so "one month back" from March 31
    /// lands on the last day of February rather than 31 days earlier.
    #[must_use]
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::OneMonth => calendar::months_back(today, 1),
            Self::ThreeMonths => calendar::months_back(today, 3),
            Self::SixMonths => calendar::months_back(today, 6),
            Self::OneYear => calendar::years_back(today, 1),
            Self::TwoYears => calendar::years_back(today, 2),
            Self::All => calendar::all_time_start(),
        }
    }

    /// Canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
            Self::TwoYears => "2years",
            Self::All => "all",
        }
    }

    /// Lenient parse: unrecognized values fall back to [`Self::ThreeMonths`].
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_str(value).unwrap_or_default()
    }
}

impl FromStr for TrendPeriod {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1month" => Ok(Self::OneMonth),
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            "1year" => Ok(Self::OneYear),
            "2years" => Ok(Self::TwoYears),
            "all" => Ok(Self::All),
            other => Err(InsightsError::InvalidPeriod(other.into())),
        }
    }
}

/// Granularity of the calendar buckets a trend is grouped into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendInterval {
    /// Monday-aligned calendar weeks.
    #[serde(rename = "1week")]
    Week,
    /// Monday-aligned fortnights (week pairs).
    #[serde(rename = "2weeks")]
    Fortnight,
    /// Calendar months. Default when an interval string is unknown.
    #[default]
    #[serde(rename = "1month")]
    Month,
    /// Calendar quarters (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
    #[serde(rename = "3months")]
    Quarter,
    /// No bucketing: one point per raw sample day.
    #[serde(rename = "all")]
    All,
}

impl TrendInterval {
    /// Canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "1week",
            Self::Fortnight => "2weeks",
            Self::Month => "1month",
            Self::Quarter => "3months",
            Self::All => "all",
        }
    }

    /// True for the grid-building granularities, false for [`Self::All`].
    #[must_use]
    pub const fn is_bucketed(self) -> bool {
        !matches!(self, Self::All)
    }

    /// Lenient parse: unrecognized values fall back to [`Self::Month`].
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_str(value).unwrap_or_default()
    }
}

impl FromStr for TrendInterval {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1week" => Ok(Self::Week),
            "2weeks" => Ok(Self::Fortnight),
            "1month" => Ok(Self::Month),
            "3months" => Ok(Self::Quarter),
            "all" => Ok(Self::All),
            other => Err(InsightsError::InvalidInterval(other.into())),
        }
    }
}
