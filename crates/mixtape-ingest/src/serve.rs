//! Static data server
//!
//! Serves a local directory under `/data` so the HTTP source can be run
//! against files on disk.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::errors::{io_error, Result};

/// URL prefix the data directory is mounted under
pub const DATA_PREFIX: &str = "/data";

/// Build the router serving `dir` under `/data`
pub fn router(dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest_service(DATA_PREFIX, ServeDir::new(dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve `dir` until the task is cancelled
///
/// # Errors
///
/// Returns `Io` if binding or serving fails.
pub async fn serve(dir: impl AsRef<Path>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| io_error("bind data server", e))?;
    serve_on(listener, dir).await
}

/// Serve `dir` on an already-bound listener
///
/// # Errors
///
/// Returns `Io` if serving fails.
pub async fn serve_on(listener: TcpListener, dir: impl AsRef<Path>) -> Result<()> {
    let local = listener
        .local_addr()
        .map_err(|e| io_error("bind data server", e))?;
    tracing::info!(
        addr = %local,
        dir = %dir.as_ref().display(),
        "serving data under {}",
        DATA_PREFIX
    );

    axum::serve(listener, router(dir))
        .await
        .map_err(|e| io_error("serve data", e))
}
