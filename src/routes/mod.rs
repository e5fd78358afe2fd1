pub mod dashboard;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::common::DashboardState;

pub fn build_router(state: DashboardState) -> Router {
    tracing::debug!(
        charts = state.layout.charts().count(),
        page_bytes = state.page.len(),
        "Building router"
    );

    Router::new()
        .route("/", get(dashboard::dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
