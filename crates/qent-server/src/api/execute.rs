//! Execute-and-persist endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::api::ApiJson;
use crate::dto::{ExecuteRequest, ExecuteResponse};
use crate::error::ApiError;
use crate::pipeline;
use crate::state::AppState;

/// POST /quantum-execute - Sample the canonical entangling circuit and store the run.
pub async fn execute(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    pipeline::execute(&state, req).await.map(Json)
}
