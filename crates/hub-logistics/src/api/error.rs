//! # API Error Types
//!
//! Maps actor errors to HTTP status codes and a JSON body:
//!
//! ```json
//! { "error": { "code": "VALIDATION_ERROR", "message": "...", "field": "quantity" } }
//! ```
//!
//! Internal error details never reach the client; they are logged instead.

use crate::commodity_actor::CommodityError;
use crate::location_actor::LocationError;
use crate::shipment_actor::ShipmentError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    pub message: String,
    /// The offending input, for validation errors that can name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// 422.
    #[error("validation error: {message}")]
    Validation {
        field: Option<&'static str>,
        message: String,
    },

    /// 409: the resource is in the wrong state, or already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// 503: an actor did not answer.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 500. Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "actor unavailable"),
            _ => {}
        }

        let field = match &self {
            Self::Validation { field, .. } => field.map(str::to_string),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShipmentError> for AppError {
    fn from(err: ShipmentError) -> Self {
        match err {
            ShipmentError::Validation { field, .. } => Self::Validation {
                field: Some(field),
                message: err.to_string(),
            },
            ShipmentError::InvalidTransition { .. } => Self::Conflict(err.to_string()),
            // Shipment ids are assigned by the actor, so a clash is a server fault.
            ShipmentError::AlreadyExists(_) => Self::Internal(err.to_string()),
            ShipmentError::NotFound(_) => Self::NotFound(err.to_string()),
            ShipmentError::Location(inner) => inner.into(),
            ShipmentError::Commodity(inner) => inner.into(),
            ShipmentError::ActorCommunicationError(_) => Self::ServiceUnavailable(err.to_string()),
        }
    }
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Invalid { field, .. } => Self::Validation {
                field: Some(field),
                message: err.to_string(),
            },
            LocationError::NotFound(_) => Self::NotFound(err.to_string()),
            LocationError::AlreadyExists(_) => Self::Conflict(err.to_string()),
            LocationError::ActorCommunicationError(_) => Self::ServiceUnavailable(err.to_string()),
        }
    }
}

impl From<CommodityError> for AppError {
    fn from(err: CommodityError) -> Self {
        match err {
            CommodityError::Invalid { field, .. } => Self::Validation {
                field: Some(field),
                message: err.to_string(),
            },
            CommodityError::NotFound(_) => Self::NotFound(err.to_string()),
            CommodityError::AlreadyExists(_) => Self::Conflict(err.to_string()),
            CommodityError::ActorCommunicationError(_) => Self::ServiceUnavailable(err.to_string()),
        }
    }
}

/// Unwraps a JSON body, turning any rejection (bad syntax, missing field, wrong type) into a
/// 422.
///
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result.map(|Json(v)| v).map_err(|err| AppError::Validation {
        field: None,
        message: err.body_text(),
    })
}
