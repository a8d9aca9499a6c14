//! Error types for riserboard-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use riserboard_core::{CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::TransactionNotFound { id } => ApiError::NotFound {
                resource: format!("transaction {}", id),
            },
            CoreError::NotLoaded => ApiError::BadRequest {
                message: CoreError::NotLoaded.to_string(),
            },
            // Load failures; details stay in the log
            other => {
                DefaultErrorLogger.log_error(&other, &ErrorContext::new("api request"));
                ApiError::InternalError
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        log::error!("Failed to encode response: {}", error);
        ApiError::InternalError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}
