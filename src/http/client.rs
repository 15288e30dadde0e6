use std::time::Duration;

use reqwest::{Client, redirect};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Redirect hops followed before a request is treated as failed.
pub const MAX_REDIRECTS: usize = 10;

/// Builds the shared client used by every request in a run.
///
/// `timeout` bounds each request from send until the body is fully read.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|err| HttpError::BuildClient { source: err })
}
