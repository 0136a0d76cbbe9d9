use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Every failure a handler can surface. Each kind renders with a fixed
/// message; internal details only go to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("This is a bad request")]
    BadRequest,
    #[error("The resource you requested not found")]
    NotFound,
    #[error("This method is not allowed here")]
    MethodNotAllowed,
    #[error("The request is not processable")]
    Unprocessable,
    #[error("The server encountered an unexpected condition that prevented it from fulfilling the request")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Nearest kind for a status produced outside the handlers.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
            StatusCode::UNPROCESSABLE_ENTITY => AppError::Unprocessable,
            s if s.is_client_error() => AppError::BadRequest,
            _ => AppError::Internal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
    pub success: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: status.as_u16(),
            message: self.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

/// Converts store and parse failures into [`AppError`] at the endpoint
/// boundary, logging the context and the source error.
pub trait ResultExt<T> {
    /// Unexpected failure: 500.
    fn reject(self, context: &'static str) -> Result<T, AppError>;
    /// Write or validation failure: 422.
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
    /// Lookup failure: 404.
    fn reject_missing(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Unprocessable
        })
    }

    fn reject_missing(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::debug!("{context}: {e}");
            AppError::NotFound
        })
    }
}
