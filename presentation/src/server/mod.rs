//! HTTP server adapter
//!
//! Multi-page HTML front end plus a small JSON API, all backed by the
//! shared [`PipelineContext`].

mod handlers;
pub mod pages;

use axum::Router;
use axum::routing::get;
use pricing_application::PipelineContext;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared, read-only state handed to every handler
pub type AppState = Arc<PipelineContext>;

/// Build the router with all routes:
///
/// - `GET /` -- home page with the prediction form
/// - `GET /predict` -- prediction form
/// - `POST /predict` -- form submission, renders results
/// - `POST /api/predict` -- JSON prediction
/// - `GET /api/locations` -- location catalog
/// - `GET /about` -- static about page
/// - `GET /api/health` -- health check
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/predict",
            get(handlers::predict_form).post(handlers::predict_submit),
        )
        .route("/api/predict", axum::routing::post(handlers::api_predict))
        .route("/api/locations", get(handlers::api_locations))
        .route("/about", get(handlers::about))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}

/// Serve until the process is terminated
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, build_router(state)).await
}
