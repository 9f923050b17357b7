//! HTTP service layer
//!
//! One axum router per service, each exposing `GET /scrape` plus a
//! `/health` probe. Query parameters deserialize into the typed request
//! structs at the boundary; pipeline errors map onto status codes in
//! [`error`].

pub mod error;
pub mod flight;
pub mod hotel;

pub use error::ApiError;

/// Liveness probe shared by both services.
pub(crate) async fn health() -> &'static str {
    "ok"
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
