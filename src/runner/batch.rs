use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::args::PositiveUsize;
use crate::http::RequestExecutor;
use crate::metrics::RequestResult;
use crate::shutdown::ShutdownReceiver;
use crate::targets::Target;

/// How a cancellable batch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every target produced exactly one result.
    Completed(Vec<RequestResult>),
    /// Shutdown arrived first; holds only the results that had already come
    /// back. Outstanding requests were aborted.
    Cancelled(Vec<RequestResult>),
}

impl BatchOutcome {
    #[must_use]
    pub fn into_results(self) -> Vec<RequestResult> {
        match self {
            BatchOutcome::Completed(results) | BatchOutcome::Cancelled(results) => results,
        }
    }
}

/// Runs every target through `executor` with at most `worker_limit` requests
/// in flight, returning once all of them have finished.
///
/// The result set matches `targets` one-to-one (order is not meaningful). A
/// request task that dies without reporting is recorded as an `OtherError`.
pub async fn run_batch<E>(
    executor: &Arc<E>,
    targets: &[Target],
    worker_limit: PositiveUsize,
) -> Vec<RequestResult>
where
    E: RequestExecutor + ?Sized + 'static,
{
    dispatch(executor, targets, worker_limit, std::future::pending::<()>())
        .await
        .into_results()
}

/// Like [`run_batch`], but gives up as soon as `shutdown_rx` fires.
///
/// Outstanding requests are aborted and left out of the outcome, so this is
/// only for callers that discard a cancelled batch as a whole.
pub async fn run_batch_until<E>(
    executor: &Arc<E>,
    targets: &[Target],
    worker_limit: PositiveUsize,
    shutdown_rx: &mut ShutdownReceiver,
) -> BatchOutcome
where
    E: RequestExecutor + ?Sized + 'static,
{
    let cancelled = async {
        drop(shutdown_rx.recv().await);
    };
    dispatch(executor, targets, worker_limit, cancelled).await
}

async fn dispatch<E, C>(
    executor: &Arc<E>,
    targets: &[Target],
    worker_limit: PositiveUsize,
    cancelled: C,
) -> BatchOutcome
where
    E: RequestExecutor + ?Sized + 'static,
    C: Future<Output = ()>,
{
    let permits = Arc::new(Semaphore::new(
        worker_limit.get().min(Semaphore::MAX_PERMITS),
    ));
    let mut tasks = JoinSet::new();

    for (index, target) in targets.iter().cloned().enumerate() {
        let executor = Arc::clone(executor);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let Ok(permit) = permits.acquire_owned().await else {
                return (index, RequestResult::errored(target));
            };
            let result = executor.execute(&target).await;
            drop(permit);
            (index, result)
        });
    }

    let mut slots: Vec<Option<RequestResult>> = std::iter::repeat_with(|| None)
        .take(targets.len())
        .collect();
    tokio::pin!(cancelled);

    loop {
        tokio::select! {
            joined = tasks.join_next() => match joined {
                Some(Ok((index, result))) => {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(result);
                    }
                }
                Some(Err(err)) => error!("Request task failed: {}", err),
                None => break,
            },
            () = &mut cancelled => {
                tasks.abort_all();
                let finished: Vec<RequestResult> = slots.into_iter().flatten().collect();
                debug!(
                    "Batch cancelled with {} of {} requests finished",
                    finished.len(),
                    targets.len()
                );
                return BatchOutcome::Cancelled(finished);
            }
        }
    }

    BatchOutcome::Completed(
        slots
            .into_iter()
            .zip(targets)
            .map(|(slot, target)| slot.unwrap_or_else(|| RequestResult::errored(target.clone())))
            .collect(),
    )
}
