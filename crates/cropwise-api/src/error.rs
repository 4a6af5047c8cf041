use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cropwise_core::CropwiseError;

use crate::dto::ErrorResponse;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into(), details: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into(), details: None }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.message, details: self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<CropwiseError> for ApiError {
    fn from(err: CropwiseError) -> Self {
        match &err {
            CropwiseError::InvalidQuery(_) => {
                Self::bad_request("Invalid query").with_details(err.to_string())
            }
            CropwiseError::ConfigInvalid { .. } => {
                Self::bad_request("Invalid request").with_details(err.to_string())
            }
            CropwiseError::Dataset(_) => {
                Self::internal("Dataset unavailable").with_details(err.to_string())
            }
            _ => Self::internal("Internal error").with_details(err.to_string()),
        }
    }
}
