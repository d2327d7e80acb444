//! API endpoint handlers.

pub mod circuits;
pub mod execute;
pub mod home;
pub mod metrics;
pub mod results;
pub mod simulation;
pub mod status;

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejections use the API error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
