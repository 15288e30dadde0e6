use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::error::HttpError;
use crate::metrics::{Outcome, RequestResult};
use crate::targets::Target;

use super::client::build_client;

/// Performs one attempt against one target and classifies what happened.
///
/// Implementations never fail: every error is folded into the returned
/// [`RequestResult`].
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, target: &Target) -> RequestResult;
}

/// [`RequestExecutor`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        build_client(timeout).map(Self::from_client)
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, target: &Target) -> RequestResult {
        info!("Visiting: {}", target);
        let start = Instant::now();

        match fetch_status(&self.client, target).await {
            Ok(status) => {
                let duration = start.elapsed();
                log_response(target, status, duration);
                RequestResult::response(target.clone(), status, duration)
            }
            Err(err) => failure_result(target, &err),
        }
    }
}

async fn fetch_status(client: &Client, target: &Target) -> Result<u16, reqwest::Error> {
    let response = client.get(target.as_str()).send().await?;
    let status = response.status().as_u16();
    let body_bytes = drain_response_body(response).await?;
    debug!("Read {} body bytes from {}", body_bytes, target);
    Ok(status)
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

fn log_response(target: &Target, status: u16, duration: Duration) {
    let secs = duration.as_secs_f64();
    if Outcome::from_status(status).is_success() {
        info!(
            "Success: {} (Status: {}, Duration: {:.2}s)",
            target, status, secs
        );
    } else {
        warn!(
            "Warning: {} (Status: {}, Duration: {:.2}s)",
            target, status, secs
        );
    }
}

fn failure_result(target: &Target, err: &reqwest::Error) -> RequestResult {
    if err.is_timeout() {
        error!("Timeout: {}", target);
        RequestResult::timed_out(target.clone())
    } else if err.is_connect() {
        error!("Connection error: {}", target);
        RequestResult::connection_failed(target.clone())
    } else {
        error!("Error visiting {}: {}", target, err);
        RequestResult::errored(target.clone())
    }
}
