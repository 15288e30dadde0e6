use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::ValidationError;

/// Settings accepted from `trafficgen.toml` / `trafficgen.json`.
///
/// Every key mirrors a command-line flag; flags given on the command line
/// win over the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub requests: Option<usize>,
    pub continuous: Option<bool>,
    pub workers: Option<usize>,
    pub delay_min: Option<f64>,
    pub delay_max: Option<f64>,
    pub timeout: Option<DurationValue>,
    pub urls: Option<Vec<String>>,
    pub urls_file: Option<String>,
    pub log_file: Option<String>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
