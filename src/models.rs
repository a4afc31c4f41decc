// ABOUTME: Input record types and chart-ready output types for the insights engine
// ABOUTME: Records mirror storage rows; outputs carry the camelCase JSON contract of the app API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::errors::InsightsError;

/// Body part an exercise is tagged with.
///
/// `Cardio` marks cardio machines logged through the set interface; volume
/// aggregation always skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    /// Chest exercises.
    Chest,
    /// Back exercises.
    Back,
    /// Shoulder exercises.
    Shoulders,
    /// Arm exercises (biceps, triceps, forearms).
    Arms,
    /// Leg exercises.
    Legs,
    /// Core and abdominal exercises.
    Core,
    /// Cardio machines; excluded from tonnage.
    Cardio,
}

impl BodyPart {
    /// Canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Cardio => "cardio",
        }
    }
}

impl FromStr for BodyPart {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "shoulders" => Ok(Self::Shoulders),
            "arms" => Ok(Self::Arms),
            "legs" => Ok(Self::Legs),
            "core" => Ok(Self::Core),
            "cardio" => Ok(Self::Cardio),
            other => Err(InsightsError::InvalidBodyPart(other.into())),
        }
    }
}

/// Body-part selection for the volume trend: everything or one tag.
///
/// Serializes as the plain tag string (`"all"`, `"chest"`, ...) so the report
/// echo matches the query parameter the caller sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPartFilter {
    /// Every strength body part.
    All,
    /// A single body part.
    Only(BodyPart),
}

impl BodyPartFilter {
    /// Whether a set tagged `part` passes this filter.
    #[must_use]
    pub fn matches(self, part: BodyPart) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == part,
        }
    }

    /// Canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(part) => part.as_str(),
        }
    }
}

impl FromStr for BodyPartFilter {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        BodyPart::from_str(s).map(Self::Only)
    }
}

impl Serialize for BodyPartFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BodyPartFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One logged strength set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Exercise this set belongs to.
    pub exercise_id: Uuid,
    /// Body part the exercise is tagged with.
    pub body_part: BodyPart,
    /// Weight on the bar in kilograms; `None` for bodyweight-only sets.
    pub weight_kg: Option<f64>,
    /// Repetitions performed; `None` when the user logged weight only.
    pub reps: Option<u32>,
    /// Wall-clock time the set was logged.
    pub recorded_at: DateTime<Local>,
}

impl WorkoutSet {
    /// Local calendar day the set was logged on.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.date_naive()
    }
}

/// One logged cardio session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioSession {
    /// Exercise this session belongs to.
    pub exercise_id: Uuid,
    /// Distance covered in meters, when the machine reports one.
    pub distance_m: Option<f64>,
    /// Duration in seconds.
    pub duration_sec: Option<f64>,
    /// Wall-clock time the session was logged.
    pub recorded_at: DateTime<Local>,
}

impl CardioSession {
    /// Local calendar day the session was logged on.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.date_naive()
    }
}

/// One body-composition measurement; every metric is independently optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Height in centimeters. Stored for profile display; no trend is
    /// derived from it.
    pub height_cm: Option<f64>,
    /// Body weight in kilograms.
    pub body_weight_kg: Option<f64>,
    /// Skeletal muscle mass in kilograms.
    pub muscle_mass_kg: Option<f64>,
    /// Body fat percentage.
    pub body_fat_pct: Option<f64>,
    /// Wall-clock time the measurement was taken.
    pub recorded_at: DateTime<Local>,
}

impl BodyMeasurement {
    /// Local calendar day the measurement was taken on.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.recorded_at.date_naive()
    }
}

/// One chart point.
///
/// `value = None` means the span holds no usable sample; `estimated` marks
/// values that came out of a formula or a multi-sample aggregation rather
/// than a single direct measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Human-readable span label (`"2025-06"`, `"06-02 ~ 06-08"`, ...).
    pub label: String,
    /// Aggregated value, or `None` for an empty span.
    pub value: Option<f64>,
    /// Whether the value was inferred rather than directly measured.
    #[serde(rename = "isEstimated")]
    pub estimated: bool,
}

/// Cardio trend: three parallel series sharing one label sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardioTrendReport {
    /// Distance per span, kilometers.
    #[serde(rename = "distance")]
    pub distance_km: Vec<TrendPoint>,
    /// Time spent per span, minutes.
    #[serde(rename = "duration")]
    pub duration_min: Vec<TrendPoint>,
    /// Average speed per span, km/h; null where distance or time is missing.
    #[serde(rename = "avgSpeed")]
    pub avg_speed_kmh: Vec<TrendPoint>,
}

/// Training-volume trend for one body-part selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeTrendReport {
    /// The selection this report answers, echoed for the presentation layer.
    pub body_part: BodyPartFilter,
    /// Tonnage per span, kilograms.
    pub points: Vec<TrendPoint>,
}

/// Body-composition trend: one series per metric, independently sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionReport {
    /// Body weight series, kilograms.
    pub body_weight: Vec<TrendPoint>,
    /// Skeletal muscle mass series, kilograms.
    pub muscle_mass: Vec<TrendPoint>,
    /// Body fat series, percent.
    pub body_fat: Vec<TrendPoint>,
}

/// Consecutive-day activity streaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Run of logged days ending in the grace window around today.
    pub current_streak: u32,
    /// Longest run of consecutive logged days on record.
    pub longest_streak: u32,
}
