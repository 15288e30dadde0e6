use std::sync::Arc;

use rand::Rng;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::http::RequestExecutor;
use crate::metrics::Stats;
use crate::shutdown::ShutdownReceiver;
use crate::targets::{Target, select_targets};

use super::batch::{BatchOutcome, run_batch_until};
use super::config::TrafficConfig;

/// Phases of the continuous loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Dispatching,
    Waiting,
    Cancelled,
}

/// Visits one random target per iteration, pausing a random delay between
/// iterations, until the shutdown channel fires.
///
/// Shutdown is observed while dispatching and while waiting. An iteration cut
/// short by shutdown is abandoned and does not count, so the returned stats
/// cover completed iterations only.
pub struct ContinuousDriver<'run, E: ?Sized> {
    executor: &'run Arc<E>,
    targets: &'run [Target],
    config: &'run TrafficConfig,
    state: DriverState,
    iterations: u64,
    stats: Stats,
}

impl<'run, E> ContinuousDriver<'run, E>
where
    E: RequestExecutor + ?Sized + 'static,
{
    #[must_use]
    pub const fn new(
        executor: &'run Arc<E>,
        targets: &'run [Target],
        config: &'run TrafficConfig,
    ) -> Self {
        Self {
            executor,
            targets,
            config,
            state: DriverState::Idle,
            iterations: 0,
            stats: Stats::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Drives the loop to completion and returns what was accumulated.
    pub async fn run<R>(mut self, shutdown_rx: &mut ShutdownReceiver, rng: &mut R) -> Stats
    where
        R: Rng + ?Sized,
    {
        loop {
            let next = self.step(shutdown_rx, rng).await;
            debug!("Continuous driver: {:?} -> {:?}", self.state, next);
            self.state = next;
            if self.state == DriverState::Cancelled {
                info!("Traffic generation stopped by user");
                return self.stats;
            }
        }
    }

    async fn step<R>(&mut self, shutdown_rx: &mut ShutdownReceiver, rng: &mut R) -> DriverState
    where
        R: Rng + ?Sized,
    {
        match self.state {
            DriverState::Idle => DriverState::Dispatching,
            DriverState::Dispatching => self.dispatch_one(shutdown_rx, rng).await,
            DriverState::Waiting => {
                let delay = self.config.delay_range.sample(rng);
                info!(
                    "Waiting {:.2} seconds before next request...",
                    delay.as_secs_f64()
                );
                tokio::select! {
                    () = sleep(delay) => DriverState::Dispatching,
                    _ = shutdown_rx.recv() => DriverState::Cancelled,
                }
            }
            DriverState::Cancelled => DriverState::Cancelled,
        }
    }

    async fn dispatch_one<R>(&mut self, shutdown_rx: &mut ShutdownReceiver, rng: &mut R) -> DriverState
    where
        R: Rng + ?Sized,
    {
        let selected = select_targets(self.targets, Some(1), rng);
        let outcome = run_batch_until(
            self.executor,
            &selected,
            self.config.worker_limit,
            shutdown_rx,
        )
        .await;

        match outcome {
            BatchOutcome::Completed(results) => {
                self.stats.extend(&results);
                self.iterations = self.iterations.saturating_add(1);
                debug!(
                    "Iteration {} done: {} total, {} ok, {} failed",
                    self.iterations,
                    self.stats.total_requests(),
                    self.stats.successful_requests(),
                    self.stats.failed_requests()
                );
                DriverState::Waiting
            }
            BatchOutcome::Cancelled(_) => DriverState::Cancelled,
        }
    }
}
