pub(crate) const DEFAULT_USER_AGENT: &str = concat!("trafficgen/", env!("CARGO_PKG_VERSION"));

/// Config filenames probed in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["trafficgen.toml", "trafficgen.json"];

pub(super) const DEFAULT_WORKERS: &str = "5";
pub(super) const DEFAULT_DELAY_MIN_SECS: &str = "1.0";
pub(super) const DEFAULT_DELAY_MAX_SECS: &str = "5.0";
pub(super) const DEFAULT_TIMEOUT: &str = "10s";
