use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::ValidationError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

/// Parses a delay in (possibly fractional) seconds.
///
/// Sign and range checks happen later, when the run configuration is built,
/// so values coming from a config file are validated the same way.
///
/// # Errors
///
/// Returns an error when the value is not a decimal number.
pub(crate) fn parse_delay_secs(s: &str) -> Result<f64, ValidationError> {
    s.trim()
        .parse::<f64>()
        .map_err(|err| ValidationError::InvalidDelay {
            value: s.to_owned(),
            source: err,
        })
}

/// Parses a duration such as `10`, `10s`, `500ms`, `2m`, or `1h`.
///
/// # Errors
///
/// Returns an error for empty input, unknown units, overflow, or zero.
pub(crate) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 =
        num_part
            .parse()
            .map_err(|err| ValidationError::InvalidDurationNumber {
                value: value.to_owned(),
                source: err,
            })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
