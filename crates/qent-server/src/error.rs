//! Error types for the HTTP API.
//!
//! Every failure is answered with the same envelope, `{"error": ..., "success": false}`.
//! Request and simulation failures keep a 200 status so clients branch on
//! `success`; persistence failures are a 500.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use qent_ir::IrError;
use qent_sim::SimError;
use qent_store::StoreError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid circuit specification: {0}")]
    InvalidCircuitSpec(String),

    #[error("Simulation failed: {0}")]
    SimulationFailure(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// The error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCircuitSpec(_) | ApiError::SimulationFailure(_) => StatusCode::OK,
            ApiError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::PersistenceFailure(_) | ApiError::SimulationFailure(_) => {
                error!("{}", self)
            }
            ApiError::InvalidCircuitSpec(_) | ApiError::NotFound(_) => warn!("{}", self),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            success: false,
        });

        (self.status(), body).into_response()
    }
}

impl From<IrError> for ApiError {
    fn from(e: IrError) -> Self {
        match e {
            IrError::InvalidQubitCount(_) => ApiError::InvalidCircuitSpec(e.to_string()),
            other => ApiError::SimulationFailure(other.to_string()),
        }
    }
}

impl From<SimError> for ApiError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::TooManyQubits { .. } | SimError::InvalidShots(_) => {
                ApiError::InvalidCircuitSpec(e.to_string())
            }
            other => ApiError::SimulationFailure(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::PersistenceFailure(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidCircuitSpec(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidCircuitSpec("x".into()).status(), StatusCode::OK);
        assert_eq!(ApiError::SimulationFailure("x".into()).status(), StatusCode::OK);
        assert_eq!(
            ApiError::PersistenceFailure("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_qubit_count_is_a_spec_error() {
        let err: ApiError = IrError::InvalidQubitCount(0).into();
        assert!(matches!(err, ApiError::InvalidCircuitSpec(_)));

        let err: ApiError = SimError::NoMeasurements.into();
        assert!(matches!(err, ApiError::SimulationFailure(_)));
    }

    #[test]
    fn test_store_errors_are_persistence_failures() {
        let err: ApiError = StoreError::ForeignKeyViolation { circuit_id: 1 }.into();
        assert!(matches!(err, ApiError::PersistenceFailure(_)));
        assert!(err.to_string().contains("circuit 1"));
    }
}
