//! Batch dispatch, the continuous driver, and the run orchestration around them.
mod batch;
mod config;
mod continuous;
mod generator;


pub use batch::{BatchOutcome, run_batch, run_batch_until};
pub use config::{DelayRange, RunMode, TrafficConfig};
pub use continuous::{ContinuousDriver, DriverState};
pub use generator::TrafficGenerator;
