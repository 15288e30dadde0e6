use tracing::warn;

use trafficgen::shutdown::ShutdownSender;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Forwards Ctrl+C (and SIGTERM on unix) into the shutdown channel.
///
/// The task also exits once anything else sends on the channel.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();

        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    drop(shutdown_tx.send(()));
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    drop(shutdown_tx.send(()));
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = shutdown_rx.recv() => {}
                _ = tokio::signal::ctrl_c() => {
                    drop(shutdown_tx.send(()));
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::time::Duration;
    use trafficgen::error::{AppError, AppResult};
    use trafficgen::shutdown::shutdown_channel;

    const SIGNAL_HANDLER_SETTLE: Duration = Duration::from_millis(10);
    const SHUTDOWN_HANDLER_TIMEOUT: Duration = Duration::from_secs(1);

    fn expectation(message: &str) -> AppError {
        AppError::Io {
            source: std::io::Error::other(message.to_owned()),
        }
    }

    fn run_async_test<F>(future: F) -> AppResult<()>
    where
        F: Future<Output = AppResult<()>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(future)
    }

    #[test]
    fn signal_handler_exits_on_shutdown() -> AppResult<()> {
        run_async_test(async {
            let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
            let handle = setup_signal_shutdown_handler(&shutdown_tx);

            tokio::time::sleep(SIGNAL_HANDLER_SETTLE).await;
            if shutdown_tx.send(()).is_err() {
                return Err(expectation("Failed to send shutdown"));
            }

            tokio::time::timeout(SHUTDOWN_HANDLER_TIMEOUT, handle)
                .await
                .map_err(|_elapsed| expectation("Timed out waiting for shutdown handler"))??;

            if shutdown_rx.recv().await.is_err() {
                return Err(expectation("Shutdown was not broadcast"));
            }
            Ok(())
        })
    }
}
