use std::time::Duration;

use crate::targets::Target;

/// HTTP status that counts as a successful visit. Other 2xx codes do not.
pub const SUCCESS_STATUS: u16 = 200;

/// Classified result of a single request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HttpError,
    Timeout,
    ConnectionError,
    OtherError,
}

impl Outcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::HttpError => "http-error",
            Outcome::Timeout => "timeout",
            Outcome::ConnectionError => "connection-error",
            Outcome::OtherError => "other-error",
        }
    }

    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == SUCCESS_STATUS {
            Outcome::Success
        } else {
            Outcome::HttpError
        }
    }
}

/// Outcome of one request against one target.
///
/// `status` and `duration` are present exactly when a response was received,
/// whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestResult {
    target: Target,
    status: Option<u16>,
    duration: Option<Duration>,
    outcome: Outcome,
}

impl RequestResult {
    #[must_use]
    pub const fn response(target: Target, status: u16, duration: Duration) -> Self {
        Self {
            target,
            status: Some(status),
            duration: Some(duration),
            outcome: Outcome::from_status(status),
        }
    }

    #[must_use]
    pub const fn timed_out(target: Target) -> Self {
        Self::failed(target, Outcome::Timeout)
    }

    #[must_use]
    pub const fn connection_failed(target: Target) -> Self {
        Self::failed(target, Outcome::ConnectionError)
    }

    #[must_use]
    pub const fn errored(target: Target) -> Self {
        Self::failed(target, Outcome::OtherError)
    }

    const fn failed(target: Target, outcome: Outcome) -> Self {
        Self {
            target,
            status: None,
            duration: None,
            outcome,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
