use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Target list was empty.")]
    TargetListEmpty,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}' in '{url}'. Use http or https.")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Failed to read targets file '{path}': {source}")]
    ReadTargetsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
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
