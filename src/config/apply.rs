use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, TrafficArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills every argument that was not given on the command line from `config`.
///
/// # Errors
///
/// Returns an error when a config value is out of range or conflicts with
/// another setting.
pub fn apply_config(
    args: &mut TrafficArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if config.urls.is_some() && config.urls_file.is_some() {
        return Err(AppError::config(ConfigError::Conflict {
            left: "urls",
            right: "urls_file",
        }));
    }

    if !is_cli(matches, "requests")
        && let Some(value) = config.requests
    {
        args.requests = Some(ensure_positive_usize(value, "requests")?);
    }

    if !is_cli(matches, "continuous")
        && let Some(value) = config.continuous
    {
        args.continuous = value;
    }

    if !is_cli(matches, "workers")
        && let Some(value) = config.workers
    {
        args.workers = ensure_positive_usize(value, "workers")?;
    }

    if !is_cli(matches, "delay_min")
        && let Some(value) = config.delay_min
    {
        args.delay_min = value;
    }

    if !is_cli(matches, "delay_max")
        && let Some(value) = config.delay_max
    {
        args.delay_max = value;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(value) = config.timeout.as_ref()
    {
        args.request_timeout = value.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "timeout",
                source: err,
            })
        })?;
    }

    // A target source on the command line replaces both target keys.
    let cli_targets = is_cli(matches, "urls") || is_cli(matches, "urls_file");
    if !cli_targets {
        if let Some(urls) = config.urls.as_ref() {
            args.urls.clone_from(urls);
        }
        if let Some(path) = config.urls_file.as_ref() {
            args.urls_file = Some(path.clone());
        }
    }

    if !is_cli(matches, "log_file")
        && let Some(path) = config.log_file.as_ref()
    {
        args.log_file = Some(path.clone());
    }

    if !is_cli(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive { field, source: err })
    })
}
