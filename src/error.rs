// src/error.rs

use std::any::Any;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// The wrapped string is a diagnostic for the logs. Clients only ever see the
/// fixed message tied to the status code.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad request, check your syntax",
            AppError::NotFound(_) => "resource not found",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::InternalServerError(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(msg) => tracing::error!("Internal Server Error: {}", msg),
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(msg) => tracing::debug!("Bad Request: {}", msg),
            AppError::NotFound(msg) => tracing::debug!("Not Found: {}", msg),
        }

        let status = self.status();
        let body = Json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries outside guarded handlers.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Malformed JSON is a bad request; well-formed JSON that does not fit the
/// expected shape is unprocessable.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// A path segment that does not parse means no route matched.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Unprocessable(errors.to_string())
    }
}

/// Response for a handler that panicked, used by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
