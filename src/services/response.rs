use std::fmt::Display;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum ServiceError {
    EntityNotFound,
    ValidationError(String),
    ConfigError(String),
    DatabaseError(Box<sqlx::Error>),
    IoError(std::io::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::EntityNotFound => write!(f, "Post not found"),
            ServiceError::ValidationError(res) => write!(f, "{}", res),
            ServiceError::ConfigError(res) => write!(f, "Invalid configuration: {}", res),
            ServiceError::DatabaseError(res) => write!(f, "Database error: {}", res),
            ServiceError::IoError(res) => write!(f, "I/O error: {}", res),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::EntityNotFound => StatusCode::NOT_FOUND,
            ServiceError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::ConfigError(_) | ServiceError::DatabaseError(_) | ServiceError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            tracing::error!("Unhandled service error: {}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(value: sqlx::Error) -> Self {
        ServiceError::DatabaseError(Box::new(value))
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(value: std::io::Error) -> Self {
        ServiceError::IoError(value)
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(value: QueryRejection) -> Self {
        ServiceError::ValidationError(value.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(value: PathRejection) -> Self {
        ServiceError::ValidationError(value.body_text())
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(value: JsonRejection) -> Self {
        ServiceError::ValidationError(value.body_text())
    }
}
