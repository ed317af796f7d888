use crate::lifecycle::Lifecycle;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Resolves on Ctrl-C, SIGTERM, or once the lifecycle has finished its shutdown grace period.
pub async fn shutdown_signal(lifecycle: Arc<Lifecycle>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
        _ = lifecycle.exit_requested() => info!("Shutdown grace period elapsed"),
    }
}
