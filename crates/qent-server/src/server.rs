//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::error::ApiError;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/", get(api::home::home))
        .route(
            "/quantum-circuits",
            get(api::circuits::list_circuits).post(api::circuits::create_circuit),
        )
        .route("/quantum-simulation", post(api::simulation::simulate))
        .route("/quantum-execute", post(api::execute::execute))
        .route("/quantum-results", get(api::results::list_results))
        .route("/business-metrics", get(api::metrics::business_metrics))
        .route("/system-status", get(api::status::system_status));

    routes
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
