use std::time::Duration;

use super::RequestResult;

/// Running counters for one run or continuous session.
///
/// `total_requests == successful_requests + failed_requests` holds after every
/// fold, and only successful results contribute to the duration total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    success_duration_total: Duration,
}

impl Stats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_requests: 0,
            successful_requests: 0,
            failed_requests: 0,
            success_duration_total: Duration::ZERO,
        }
    }

    /// Folds one result into the counters, returning the updated value.
    #[must_use]
    pub fn fold(self, result: &RequestResult) -> Self {
        let total_requests = self.total_requests.saturating_add(1);
        if result.is_success() {
            Self {
                total_requests,
                successful_requests: self.successful_requests.saturating_add(1),
                success_duration_total: result.duration().map_or(
                    self.success_duration_total,
                    |duration| self.success_duration_total.saturating_add(duration),
                ),
                ..self
            }
        } else {
            Self {
                total_requests,
                failed_requests: self.failed_requests.saturating_add(1),
                ..self
            }
        }
    }

    pub fn record(&mut self, result: &RequestResult) {
        *self = self.fold(result);
    }

    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.total_requests
    }

    #[must_use]
    pub const fn successful_requests(&self) -> u64 {
        self.successful_requests
    }

    #[must_use]
    pub const fn failed_requests(&self) -> u64 {
        self.failed_requests
    }

    #[must_use]
    pub const fn success_duration_total(&self) -> Duration {
        self.success_duration_total
    }

    #[must_use]
    pub fn summarize(&self) -> Summary {
        Summary {
            total_requests: self.total_requests,
            successful_requests: self.successful_requests,
            failed_requests: self.failed_requests,
            success_rate_x10: success_rate_x10(self.successful_requests, self.total_requests),
            average_success_duration: average_duration(
                self.success_duration_total,
                self.successful_requests,
            ),
        }
    }
}

impl<'result> FromIterator<&'result RequestResult> for Stats {
    fn from_iter<I: IntoIterator<Item = &'result RequestResult>>(iter: I) -> Self {
        iter.into_iter().fold(Stats::new(), Stats::fold)
    }
}

impl<'result> Extend<&'result RequestResult> for Stats {
    fn extend<I: IntoIterator<Item = &'result RequestResult>>(&mut self, iter: I) {
        for result in iter {
            self.record(result);
        }
    }
}

/// Final figures derived from [`Stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    /// Success rate in tenths of a percent, rounded half up (`500` is 50.0%).
    pub success_rate_x10: u64,
    /// `None` when nothing succeeded.
    pub average_success_duration: Option<Duration>,
}

impl Summary {
    /// Success rate formatted with one decimal place, e.g. `"66.7"`.
    #[must_use]
    pub fn success_rate_display(&self) -> String {
        format!(
            "{}.{}",
            self.success_rate_x10 / 10,
            self.success_rate_x10 % 10
        )
    }
}

fn success_rate_x10(successful: u64, total: u64) -> u64 {
    // Doubled before dividing so the final halving rounds half up.
    let doubled = u128::from(successful)
        .saturating_mul(2_000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    let rounded = doubled.saturating_add(1) / 2;
    u64::try_from(rounded).map_or(u64::MAX, |value| value.min(1_000))
}

fn average_duration(total: Duration, count: u64) -> Option<Duration> {
    let nanos = total.as_nanos().checked_div(u128::from(count))?;
    Some(u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos))
}
