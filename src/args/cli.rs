use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_DELAY_MAX_SECS, DEFAULT_DELAY_MIN_SECS, DEFAULT_TIMEOUT, DEFAULT_WORKERS,
};
use super::parsers::{parse_delay_secs, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async web traffic generator - visits random targets with bounded concurrency and reports success/latency statistics."
)]
pub struct TrafficArgs {
    /// Number of requests to make (default: every target once)
    #[arg(long, short = 'r', value_parser = parse_positive_usize)]
    pub requests: Option<PositiveUsize>,

    /// Run continuously until stopped (ignores --requests)
    #[arg(long, short = 'c')]
    pub continuous: bool,

    /// Number of concurrent workers
    #[arg(
        long,
        short = 'w',
        default_value = DEFAULT_WORKERS,
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Minimum delay between continuous-mode requests in seconds
    #[arg(
        long = "delay-min",
        default_value = DEFAULT_DELAY_MIN_SECS,
        value_parser = parse_delay_secs,
        allow_negative_numbers = true
    )]
    pub delay_min: f64,

    /// Maximum delay between continuous-mode requests in seconds
    #[arg(
        long = "delay-max",
        default_value = DEFAULT_DELAY_MAX_SECS,
        value_parser = parse_delay_secs,
        allow_negative_numbers = true
    )]
    pub delay_max: f64,

    /// Request timeout (bare numbers are seconds; supports ms/s/m/h)
    #[arg(
        long = "timeout",
        short = 't',
        default_value = DEFAULT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Target URL (repeatable); replaces the built-in target list
    #[arg(long = "url", short = 'u', conflicts_with = "urls_file")]
    pub urls: Vec<String>,

    /// Read target URLs from a file, one per line
    #[arg(long = "urls-file")]
    pub urls_file: Option<String>,

    /// Mirror log output into this file
    #[arg(long = "log-file")]
    pub log_file: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by TRAFFICGEN_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./trafficgen.toml or ./trafficgen.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
