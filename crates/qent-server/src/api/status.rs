//! System status endpoint.

use axum::Json;

use crate::dto::SystemStatusResponse;

/// GET /system-status - Static status figures.
pub async fn system_status() -> Json<SystemStatusResponse> {
    Json(SystemStatusResponse::default())
}
