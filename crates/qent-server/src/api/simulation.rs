//! Stateless simulation endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::api::ApiJson;
use crate::dto::{SimulationRequest, SimulationResponse};
use crate::error::ApiError;
use crate::pipeline;
use crate::state::AppState;

/// POST /quantum-simulation - Build, simulate exactly and sample; nothing is stored.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    pipeline::simulate(&state, req).await.map(Json)
}
