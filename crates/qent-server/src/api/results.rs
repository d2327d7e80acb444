//! Persisted results endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::ResultListResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /quantum-results - All results with their circuit name and size, newest first.
pub async fn list_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResultListResponse>, ApiError> {
    let quantum_results = state.store.list_results_joined().await?;
    Ok(Json(ResultListResponse { quantum_results }))
}
