// ABOUTME: Product-policy configuration for the insights engine
// ABOUTME: Typed knobs with defaults, environment overrides, and range validation

use serde::{Deserialize, Serialize};

use crate::constants::{estimation, streaks};
use crate::errors::{InsightsError, InsightsResult};

/// Environment variable overriding [`EngineConfig::sparse_span_ratio`].
pub const ENV_SPARSE_SPAN_RATIO: &str = "LIFTBOOK_SPARSE_SPAN_RATIO";

/// Environment variable overriding [`EngineConfig::streak_grace_days`].
pub const ENV_STREAK_GRACE_DAYS: &str = "LIFTBOOK_STREAK_GRACE_DAYS";

/// Tunable product policy for the insights engine.
///
/// Everything here changes what users see on charts, not what is
/// mathematically computed: the aggregation rules themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ratio of a bucket's nominal width that contributing sample dates may
    /// span before an averaged body-composition point is flagged estimated.
    pub sparse_span_ratio: f64,
    /// Days an unlogged "today" may lag before the current streak reads 0.
    /// `0` requires today itself to be logged.
    pub streak_grace_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sparse_span_ratio: estimation::DEFAULT_SPARSE_SPAN_RATIO,
            streak_grace_days: streaks::DEFAULT_GRACE_DAYS,
        }
    }
}

impl EngineConfig {
    /// Build from defaults with `LIFTBOOK_*` environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error when an override is present but unparseable, or when
    /// the resulting configuration fails [`Self::validate`].
    pub fn from_environment() -> InsightsResult<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(ENV_SPARSE_SPAN_RATIO) {
            config.sparse_span_ratio =
                val.parse()
                    .map_err(|_| InsightsError::InvalidConfiguration {
                        field: "sparse_span_ratio",
                        reason: format!("{ENV_SPARSE_SPAN_RATIO}={val} is not a number"),
                    })?;
        }

        if let Ok(val) = std::env::var(ENV_STREAK_GRACE_DAYS) {
            config.streak_grace_days =
                val.parse()
                    .map_err(|_| InsightsError::InvalidConfiguration {
                        field: "streak_grace_days",
                        reason: format!("{ENV_STREAK_GRACE_DAYS}={val} is not a day count"),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if any knob is outside its documented range.
    pub fn validate(&self) -> InsightsResult<()> {
        if !self.sparse_span_ratio.is_finite()
            || self.sparse_span_ratio <= 0.0
            || self.sparse_span_ratio > 1.0
        {
            return Err(InsightsError::InvalidConfiguration {
                field: "sparse_span_ratio",
                reason: format!("{} is outside (0, 1]", self.sparse_span_ratio),
            });
        }

        if self.streak_grace_days > streaks::MAX_GRACE_DAYS {
            return Err(InsightsError::InvalidConfiguration {
                field: "streak_grace_days",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.streak_grace_days,
                    streaks::MAX_GRACE_DAYS
                ),
            });
        }

        Ok(())
    }
}
