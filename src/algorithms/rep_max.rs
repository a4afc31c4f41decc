// ABOUTME: Repetition-max estimation formulas and target normalization for strength sets
// ABOUTME: Converts heterogeneous weight/rep pairs into one comparable metric with an estimation flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftbook

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::rep_max::{
    BRZYCKI_DENOMINATOR_BASE, BRZYCKI_NUMERATOR, EPLEY_REP_DIVISOR, FIVE_RM_REPS,
    HIGH_REP_THRESHOLD, ONE_RM_REPS,
};
use crate::errors::InsightsError;

/// One-rep-max estimation formulas.
///
/// Neither formula is trusted at its reference points: Epley still inflates
/// a true single by a factor of 31/30, and both drift at the extremes
/// (Brzycki's denominator collapses as reps approach 37). The trend
/// therefore passes reference-rep sets through unconverted and only runs a
/// formula when the rep count actually differs from the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepMaxFormula {
    /// Epley (1985): `1RM = weight * (1 + reps / 30)`.
    ///
    /// The diary's default; linear in reps and well-behaved across the
    /// 1-15 rep range users actually log.
    #[default]
    Epley,
    /// Brzycki (1993): `1RM = weight * 36 / (37 - reps)`.
    ///
    /// Slightly more conservative than Epley below 10 reps. Defined for
    /// `reps < 37`; callers stay in sane rep ranges.
    Brzycki,
}

impl RepMaxFormula {
    /// Estimated one-rep max for `weight_kg` lifted `reps` times.
    #[must_use]
    pub fn one_rm(self, weight_kg: f64, reps: u32) -> f64 {
        match self {
            Self::Epley => weight_kg.mul_add(f64::from(reps) / EPLEY_REP_DIVISOR, weight_kg),
            Self::Brzycki => {
                weight_kg * BRZYCKI_NUMERATOR / (BRZYCKI_DENOMINATOR_BASE - f64::from(reps))
            }
        }
    }

    /// Estimated `target`-rep max: the one-rep max scaled back down by the
    /// formula's own factor at `target` repetitions.
    #[must_use]
    pub fn n_rep_max(self, weight_kg: f64, reps: u32, target: u32) -> f64 {
        let one_rm = self.one_rm(weight_kg, reps);
        match self {
            Self::Epley => one_rm / (1.0 + f64::from(target) / EPLEY_REP_DIVISOR),
            Self::Brzycki => {
                one_rm * (BRZYCKI_DENOMINATOR_BASE - f64::from(target)) / BRZYCKI_NUMERATOR
            }
        }
    }

    /// Formula name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Epley => "Epley",
            Self::Brzycki => "Brzycki",
        }
    }

    /// Formula expression for display.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Epley => "1RM = weight x (1 + reps / 30)",
            Self::Brzycki => "1RM = weight x 36 / (37 - reps)",
        }
    }
}

impl FromStr for RepMaxFormula {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            other => Err(InsightsError::InvalidRmFormula(other.into())),
        }
    }
}

/// Repetition-max target the strength trend normalizes every set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RmTarget {
    /// Single-rep max; sets at exactly one rep pass through unconverted.
    #[serde(rename = "1RM")]
    OneRm,
    /// Five-rep max; sets at exactly five reps pass through unconverted.
    #[serde(rename = "5RM")]
    FiveRm,
    /// Top raw weight among high-rep sets (8+ reps); never converted.
    #[serde(rename = "over8RM")]
    OverEight,
}

/// A set's weight normalized to a target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparableWeight {
    /// Weight in kilograms on the target's scale.
    pub weight_kg: f64,
    /// True when the value came out of a formula rather than off the bar.
    pub estimated: bool,
}

impl RmTarget {
    /// Whether a set with these fields can contribute to the trend.
    ///
    /// The convertible targets take any set that has both a finite weight
    /// and a rep count; the high-rep target additionally demands 8+ reps.
    #[must_use]
    pub fn accepts(self, weight_kg: Option<f64>, reps: Option<u32>) -> bool {
        let finite_weight = weight_kg.is_some_and(f64::is_finite);
        match (self, reps) {
            (Self::OverEight, Some(reps)) => finite_weight && reps >= HIGH_REP_THRESHOLD,
            (Self::OneRm | Self::FiveRm, Some(_)) => finite_weight,
            (_, None) => false,
        }
    }

    /// Normalize an accepted set to this target's scale.
    ///
    /// Identity (not estimated) when the set was performed at the target's
    /// reference rep count; formula-derived (estimated) otherwise.
    #[must_use]
    pub fn comparable(self, weight_kg: f64, reps: u32, formula: RepMaxFormula) -> ComparableWeight {
        match self {
            Self::OverEight => ComparableWeight {
                weight_kg,
                estimated: false,
            },
            Self::OneRm if reps == ONE_RM_REPS => ComparableWeight {
                weight_kg,
                estimated: false,
            },
            Self::OneRm => ComparableWeight {
                weight_kg: formula.one_rm(weight_kg, reps),
                estimated: true,
            },
            Self::FiveRm if reps == FIVE_RM_REPS => ComparableWeight {
                weight_kg,
                estimated: false,
            },
            Self::FiveRm => ComparableWeight {
                weight_kg: formula.n_rep_max(weight_kg, reps, FIVE_RM_REPS),
                estimated: true,
            },
        }
    }

    /// Canonical wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneRm => "1RM",
            Self::FiveRm => "5RM",
            Self::OverEight => "over8RM",
        }
    }
}

impl FromStr for RmTarget {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1RM" => Ok(Self::OneRm),
            "5RM" => Ok(Self::FiveRm),
            "over8RM" => Ok(Self::OverEight),
            other => Err(InsightsError::InvalidRmTarget(other.into())),
        }
    }
}
