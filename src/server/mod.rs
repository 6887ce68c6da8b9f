//! HTTP front-end.
//!
//! Provides two endpoints:
//! - `/` - the domain form (also the fallback for unknown paths)
//! - `/check` - POST-only, classifies the submitted domain and renders results

mod handlers;
mod shutdown;
mod template;
mod types;

use std::net::SocketAddr;

use axum::routing::{any, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{check_handler, home_handler, method_not_allowed_handler};
pub use shutdown::shutdown_signal;
pub use template::PageRenderer;
pub use types::{AppState, CheckForm};

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home_handler))
        .route(
            "/check",
            post(check_handler).fallback(method_not_allowed_handler),
        )
        .fallback(home_handler)
        .with_state(state)
}

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address can't be bound or the server fails.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Server running on http://localhost:{}", addr.port());

    serve(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), anyhow::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}
