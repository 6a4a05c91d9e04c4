//! Request-level error taxonomy and its HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Shape of every non-validation error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: serde_json::Map<String, serde_json::Value>,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: serde_json::Map::new(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn course_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("Course not found for ID {}", id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(messages) => (status, Json(messages)).into_response(),
            AppError::Unauthorized(message) => (
                status,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="courseapi""#)],
                Json(ErrorBody::new(message)),
            )
                .into_response(),
            AppError::BadRequest(message)
            | AppError::Forbidden(message)
            | AppError::NotFound(message) => {
                (status, Json(ErrorBody::new(message))).into_response()
            }
            AppError::Unexpected(e) => {
                error!(error = ?e, "unexpected error");
                (status, Json(ErrorBody::new("An unexpected error occurred"))).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() && db_err.message().contains("email_address") {
                return AppError::Validation(vec!["emailAddress must be unique".into()]);
            }
        }
        AppError::Unexpected(anyhow::Error::new(e).context("database"))
    }
}
