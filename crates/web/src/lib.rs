//! HTTP server for the learning path recommender.

#![forbid(unsafe_code)]

mod pages;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use services::{CompressionService, RecommenderService};

/// Application state shared across handlers.
///
/// Everything here is immutable after startup; handlers only read it and
/// build request-local data, so no locking is needed.
pub struct AppState {
    pub recommender: RecommenderService,
    pub compression: CompressionService,
}

impl AppState {
    #[must_use]
    pub fn new(recommender: RecommenderService, compression: CompressionService) -> Self {
        Self {
            recommender,
            compression,
        }
    }
}

/// Build the router over shared state.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::flow_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
