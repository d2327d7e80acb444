//! Circuit registry endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use qent_ir::builder::validate_qubit_count;
use qent_store::NewCircuit;
use tracing::info;

use crate::api::ApiJson;
use crate::dto::{CircuitListResponse, CircuitSummary, CreateCircuitRequest, CreateCircuitResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /quantum-circuits - List circuits, newest first.
pub async fn list_circuits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CircuitListResponse>, ApiError> {
    let circuits = state.store.list_circuits().await?;
    Ok(Json(CircuitListResponse {
        circuits: circuits.into_iter().map(CircuitSummary::from).collect(),
    }))
}

/// POST /quantum-circuits - Register a circuit description.
///
/// Descriptions are not simulated; the simulator qubit limit does not apply.
pub async fn create_circuit(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateCircuitRequest>,
) -> Result<Json<CreateCircuitResponse>, ApiError> {
    let qubits = validate_qubit_count(req.qubits)?;
    let depth = u32::try_from(req.depth).map_err(|_| {
        ApiError::InvalidCircuitSpec(format!("depth must be non-negative, got {}", req.depth))
    })?;

    let id = state
        .store
        .create_circuit(&NewCircuit {
            name: req.name,
            qubits,
            depth,
            gates_used: req.gates_used,
        })
        .await?;

    info!("Registered circuit {}", id);
    Ok(Json(CreateCircuitResponse {
        id,
        status: "created",
    }))
}
