//! HTTP facade for the Alexa skill.
//!
//! The router lives in [`routes`]; this module adds the cross-cutting
//! layers and owns the listening socket.

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, ConfigReport};

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Routes plus open CORS and per-request tracing.
#[must_use]
pub fn app(state: Arc<AppState>) -> Router {
    create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve on `0.0.0.0:port` until `shutdown` resolves, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the port cannot be bound or the accept loop fails.
pub async fn serve<F>(state: Arc<AppState>, port: u16, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Câmara Radar listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
