use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::args::PositiveUsize;
use crate::http::RequestExecutor;
use crate::metrics::Stats;
use crate::shutdown::ShutdownReceiver;
use crate::targets::{Target, select_targets};

use super::batch::run_batch;
use super::config::{RunMode, TrafficConfig};
use super::continuous::ContinuousDriver;

/// Ties the target list, executor, and run settings together.
pub struct TrafficGenerator<E: ?Sized> {
    executor: Arc<E>,
    targets: Vec<Target>,
    config: TrafficConfig,
}

impl<E> TrafficGenerator<E>
where
    E: RequestExecutor + ?Sized + 'static,
{
    #[must_use]
    pub const fn new(executor: Arc<E>, targets: Vec<Target>, config: TrafficConfig) -> Self {
        Self {
            executor,
            targets,
            config,
        }
    }

    /// Batch size for the configured mode: one target in continuous mode,
    /// otherwise the requested count clamped to the list.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        match self.config.mode {
            RunMode::Continuous => 1,
            RunMode::Batch { requests } => requests
                .map_or(self.targets.len(), PositiveUsize::get)
                .min(self.targets.len()),
        }
    }

    /// Runs in the configured mode and returns the accumulated statistics.
    ///
    /// Only continuous mode listens to `shutdown_rx`. A batch always joins
    /// every dispatched request, so its stats hold one outcome per target.
    pub async fn run<R>(&self, shutdown_rx: &mut ShutdownReceiver, rng: &mut R) -> Stats
    where
        R: Rng + ?Sized,
    {
        match self.config.mode {
            RunMode::Continuous => {
                info!("Starting continuous traffic generation...");
                debug!(
                    "Pausing {:.2}-{:.2} seconds between requests",
                    self.config.delay_range.min().as_secs_f64(),
                    self.config.delay_range.max().as_secs_f64()
                );
                ContinuousDriver::new(&self.executor, &self.targets, &self.config)
                    .run(shutdown_rx, rng)
                    .await
            }
            RunMode::Batch { .. } => {
                let count = self.batch_size();
                info!("Starting traffic generation for {} requests...", count);
                let selected = select_targets(&self.targets, Some(count), rng);
                let results =
                    run_batch(&self.executor, &selected, self.config.worker_limit).await;
                let stats: Stats = results.iter().collect();
                debug!(
                    "Batch finished: {} requests, {:.2}s spent in successful responses",
                    stats.total_requests(),
                    stats.success_duration_total().as_secs_f64()
                );
                stats
            }
        }
    }
}
