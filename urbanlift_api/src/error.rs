use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;
use urbanlift_matching::{optimizer::error::OptimizationError, problem::error::ShipmentError};
use urbanlift_store::error::StoreError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Conflict(String),
    InternalServerError(String),
    NotFound(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<ShipmentError> for ApiError {
    fn from(error: ShipmentError) -> Self {
        match error {
            ShipmentError::InvalidTransition { .. } => ApiError::Conflict(error.to_string()),
            _ => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<OptimizationError> for ApiError {
    fn from(error: OptimizationError) -> Self {
        match error {
            OptimizationError::NoShipments | OptimizationError::NoEligibleShipments(_) => {
                ApiError::BadRequest(error.to_string())
            }
            OptimizationError::Time(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => ApiError::NotFound(error.to_string()),
            StoreError::DuplicateId(_) => ApiError::Conflict(error.to_string()),
            StoreError::Shipment(error) => error.into(),
            StoreError::Optimization(error) => error.into(),
            StoreError::Io { .. } | StoreError::Malformed { .. } | StoreError::ZeroTickPeriod => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}
