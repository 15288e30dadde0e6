use std::time::Duration;

use rand::Rng;

use crate::args::{PositiveUsize, TrafficArgs};
use crate::error::ValidationError;

/// Inclusive range the continuous driver samples its pause from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    /// # Errors
    ///
    /// Returns an error when `min > max`.
    pub const fn new(min: Duration, max: Duration) -> Result<Self, ValidationError> {
        if min.as_nanos() > max.as_nanos() {
            return Err(ValidationError::DelayRangeInverted);
        }
        Ok(Self { min, max })
    }

    /// Builds a range from decimal seconds as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error for negative or NaN values, values that do not fit a
    /// [`Duration`], or `min > max`.
    pub fn from_secs(min: f64, max: f64) -> Result<Self, ValidationError> {
        Self::new(secs_to_duration(min)?, secs_to_duration(max)?)
    }

    #[must_use]
    pub const fn min(&self) -> Duration {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Draws a pause uniformly from `[min, max]`.
    pub fn sample<R>(&self, rng: &mut R) -> Duration
    where
        R: Rng + ?Sized,
    {
        rng.gen_range(self.min..=self.max)
    }
}

fn secs_to_duration(secs: f64) -> Result<Duration, ValidationError> {
    if secs.is_nan() || secs < 0.0 {
        return Err(ValidationError::DelayNegative);
    }
    Duration::try_from_secs_f64(secs).map_err(|_err| ValidationError::DelayOutOfRange { value: secs })
}

/// Whether a run is a single batch or an open-ended loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One batch of `requests` distinct targets; `None` means every target.
    Batch { requests: Option<PositiveUsize> },
    /// One target per iteration until cancelled.
    Continuous,
}

/// Immutable settings for one run, validated before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficConfig {
    pub mode: RunMode,
    pub worker_limit: PositiveUsize,
    pub delay_range: DelayRange,
    pub timeout: Duration,
}

impl TrafficConfig {
    /// # Errors
    ///
    /// Returns an error when the delay values are negative or inverted.
    pub fn from_args(args: &TrafficArgs) -> Result<Self, ValidationError> {
        if args.request_timeout.is_zero() {
            return Err(ValidationError::DurationZero);
        }
        let mode = if args.continuous {
            RunMode::Continuous
        } else {
            RunMode::Batch {
                requests: args.requests,
            }
        };
        Ok(Self {
            mode,
            worker_limit: args.workers,
            delay_range: DelayRange::from_secs(args.delay_min, args.delay_max)?,
            timeout: args.request_timeout,
        })
    }
}
