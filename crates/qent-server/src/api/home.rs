//! Service metadata endpoint.

use axum::Json;

use crate::dto::HomeResponse;

/// Endpoints advertised by `GET /`.
pub const ENDPOINTS: [&str; 6] = [
    "/quantum-circuits",
    "/quantum-simulation",
    "/quantum-execute",
    "/quantum-results",
    "/business-metrics",
    "/system-status",
];

/// GET / - Service metadata.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Quantum Enterprise API Running",
        version: env!("CARGO_PKG_VERSION"),
        status: "Operational",
        simulator: "Ready",
        endpoints: ENDPOINTS.to_vec(),
    })
}
