use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use std::time::Duration;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["trafficgen"])?;

    let checks = [
        (args.requests.is_none(), "Expected requests to be None"),
        (!args.continuous, "Expected continuous to be false"),
        (args.workers.get() == 5, "Unexpected workers"),
        (args.delay_min.total_cmp(&1.0).is_eq(), "Unexpected delay_min"),
        (args.delay_max.total_cmp(&5.0).is_eq(), "Unexpected delay_max"),
        (
            args.request_timeout == Duration::from_secs(10),
            "Unexpected request_timeout",
        ),
        (args.urls.is_empty(), "Expected urls to be empty"),
        (args.urls_file.is_none(), "Expected urls_file to be None"),
        (args.log_file.is_none(), "Expected log_file to be None"),
        (!args.verbose, "Expected verbose to be false"),
        (args.config.is_none(), "Expected config to be None"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_short_flags() -> AppResult<()> {
    let args = parse_test_args([
        "trafficgen",
        "-r",
        "3",
        "-c",
        "-w",
        "2",
        "-t",
        "750ms",
        "-u",
        "http://a.test",
        "-u",
        "http://b.test",
    ])?;

    if args.requests.map(PositiveUsize::get) != Some(3) {
        return Err(AppError::validation("Unexpected requests"));
    }
    if !args.continuous {
        return Err(AppError::validation("Expected continuous"));
    }
    if args.workers.get() != 2 {
        return Err(AppError::validation("Unexpected workers"));
    }
    if args.request_timeout != Duration::from_millis(750) {
        return Err(AppError::validation("Unexpected request_timeout"));
    }
    if args.urls != ["http://a.test", "http://b.test"] {
        return Err(AppError::validation(format!(
            "Unexpected urls: {:?}",
            args.urls
        )));
    }
    Ok(())
}

#[test]
fn parse_args_fractional_delays() -> AppResult<()> {
    let args = parse_test_args(["trafficgen", "--delay-min", "0.25", "--delay-max", "0.5"])?;
    if !args.delay_min.total_cmp(&0.25).is_eq() {
        return Err(AppError::validation("Unexpected delay_min"));
    }
    if !args.delay_max.total_cmp(&0.5).is_eq() {
        return Err(AppError::validation("Unexpected delay_max"));
    }
    Ok(())
}

#[test]
fn parse_args_keeps_negative_delay_for_validation() -> AppResult<()> {
    let args = parse_test_args(["trafficgen", "--delay-min", "-1"])?;
    if !args.delay_min.is_sign_negative() {
        return Err(AppError::validation("Expected negative delay_min"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_requests() -> AppResult<()> {
    if parse_test_args(["trafficgen", "--requests", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero requests to be rejected"));
    }
    if parse_test_args(["trafficgen", "--requests", "-2"]).is_ok() {
        return Err(AppError::validation(
            "Expected negative requests to be rejected",
        ));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_workers() -> AppResult<()> {
    if parse_test_args(["trafficgen", "--workers", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero workers to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_url_with_urls_file() -> AppResult<()> {
    let result = parse_test_args([
        "trafficgen",
        "--url",
        "http://a.test",
        "--urls-file",
        "targets.txt",
    ]);
    if result.is_ok() {
        return Err(AppError::validation("Expected --url/--urls-file conflict"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_non_numeric_delay() -> AppResult<()> {
    if parse_test_args(["trafficgen", "--delay-max", "soon"]).is_ok() {
        return Err(AppError::validation("Expected invalid delay to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_duration_arg_accepts_units() -> AppResult<()> {
    let cases = [
        ("10", Duration::from_secs(10)),
        ("10s", Duration::from_secs(10)),
        ("250ms", Duration::from_millis(250)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for '{}': {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_arg_rejects_invalid_values() -> AppResult<()> {
    if !matches!(parse_duration_arg(""), Err(ValidationError::DurationEmpty)) {
        return Err(AppError::validation("Expected DurationEmpty"));
    }
    if !matches!(parse_duration_arg("0"), Err(ValidationError::DurationZero)) {
        return Err(AppError::validation("Expected DurationZero"));
    }
    if !matches!(
        parse_duration_arg("5d"),
        Err(ValidationError::InvalidDurationUnit { .. })
    ) {
        return Err(AppError::validation("Expected InvalidDurationUnit"));
    }
    if !matches!(
        parse_duration_arg("ms"),
        Err(ValidationError::InvalidDurationFormat { .. })
    ) {
        return Err(AppError::validation("Expected InvalidDurationFormat"));
    }
    Ok(())
}
