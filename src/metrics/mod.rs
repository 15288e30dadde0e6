//! Per-request results and the statistics folded from them.
mod stats;
mod types;


pub use stats::{Stats, Summary};
pub use types::{Outcome, RequestResult, SUCCESS_STATUS};
