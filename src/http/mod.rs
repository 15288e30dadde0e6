//! HTTP client setup and single-request execution.
mod client;
mod executor;


pub use client::{MAX_REDIRECTS, build_client};
pub use executor::{HttpExecutor, RequestExecutor};
