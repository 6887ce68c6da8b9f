//! Graceful shutdown handling.

/// Completes when the process receives Ctrl-C.
///
/// If the signal handler can't be installed the server keeps running until
/// killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
