use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::errors::AppError;

pub const SUBMIT_FAILED: &str = "Internal server error. Please try again later.";
pub const LIST_FAILED: &str = "Error reading contacts";
pub const NOT_FOUND: &str = "Endpoint not found";
pub const UNHANDLED: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),

    /// `message` is what the caller sees, `source` only goes to the log.
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        source: AppError,
    },

    #[error("endpoint not found")]
    NotFound,

    #[error("unhandled error: {0}")]
    Unhandled(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ApiError {
    /// Split an `AppError` into a caller-fixable 400 or a generic 500 carrying
    /// `message`.
    pub fn from_app(err: AppError, message: &'static str) -> Self {
        match err {
            AppError::Validation(msg) => ApiError::Validation(msg),
            source => ApiError::Internal { message, source },
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } | ApiError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Internal { message, .. } => (*message).to_string(),
            ApiError::NotFound => NOT_FOUND.to_string(),
            ApiError::Unhandled(_) => UNHANDLED.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Validation(_) | ApiError::NotFound => {
                debug!(status = %status, error = %self, "request rejected");
            }
            ApiError::Internal { .. } | ApiError::Unhandled(_) => {
                error!(status = %status, error = %self, "request failed");
            }
        }

        let body = Json(ErrorBody {
            success: false,
            message: self.public_message(),
        });

        (status, body).into_response()
    }
}

/// Response for a handler that panicked.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Unhandled(format!("handler panicked: {detail}")).into_response()
}
