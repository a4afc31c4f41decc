// ABOUTME: Named constants for rep-max conversion, unit handling, and aggregation policy
// ABOUTME: Replaces magic numbers in the aggregators with documented, referenced values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

//! Engine-wide constants.
//!
//! Values that encode a formula or a unit definition live here as named
//! constants; values that encode tunable product policy have their defaults
//! here and their runtime knobs in [`crate::config::EngineConfig`].

/// Repetition-max estimation constants.
pub mod rep_max {
    /// Epley formula divisor: `1RM = weight * (1 + reps / 30)`.
    ///
    /// Reference: Epley, B. (1985). *Poundage Chart*. Boyd Epley Workout,
    /// University of Nebraska.
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;

    /// Brzycki formula numerator: `1RM = weight * 36 / (37 - reps)`.
    ///
    /// Reference: Brzycki, M. (1993). Strength testing: predicting a one-rep
    /// max from reps-to-fatigue. *JOPERD*, 64(1), 88-90.
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;

    /// Brzycki formula denominator base (`37 - reps`).
    pub const BRZYCKI_DENOMINATOR_BASE: f64 = 37.0;

    /// Rep count at which the raw weight already is the one-rep max.
    pub const ONE_RM_REPS: u32 = 1;

    /// Rep count at which the raw weight already is the five-rep max.
    pub const FIVE_RM_REPS: u32 = 5;

    /// Minimum repetitions for a set to count toward the high-rep trend.
    /// High-rep top weights are charted as lifted, never converted.
    pub const HIGH_REP_THRESHOLD: u32 = 8;
}

/// Unit conversion factors between storage units and display units.
pub mod units {
    /// Cardio distance is stored in meters, charted in kilometers.
    pub const METERS_PER_KILOMETER: f64 = 1000.0;

    /// Cardio duration is stored in seconds, charted in minutes.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Average speed is charted in km/h from kilometers and minutes.
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Estimation-flag policy defaults.
pub mod estimation {
    /// Default ratio of a bucket's nominal width that the contributing
    /// sample dates may span before an averaged point is flagged estimated.
    pub const DEFAULT_SPARSE_SPAN_RATIO: f64 = 0.8;
}

/// Streak policy defaults and limits.
pub mod streaks {
    /// Days an unlogged "today" may lag before the current streak reads 0.
    pub const DEFAULT_GRACE_DAYS: u32 = 1;

    /// Upper bound accepted for the grace window. A week of grace already
    /// stretches the meaning of "current".
    pub const MAX_GRACE_DAYS: u32 = 7;
}

/// Lookback window sentinels.
pub mod windows {
    /// Year of the sentinel start date for the unbounded (`all`) period.
    /// Predates any record a workout diary can plausibly hold.
    pub const ALL_TIME_START_YEAR: i32 = 1970;
}
