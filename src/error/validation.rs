use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid delay '{value}': {source}")]
    InvalidDelay {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Delay values must be non-negative.")]
    DelayNegative,
    #[error("Minimum delay cannot be greater than maximum delay.")]
    DelayRangeInverted,
    #[error("Delay {value} is out of range.")]
    DelayOutOfRange { value: f64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
