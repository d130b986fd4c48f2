//! Application-level error type shared by all route handlers.
//!
//! Validation failures render the generic error page with HTTP 200, matching
//! the behavior users of the pages see: a readable message, not a status
//! code. Malformed numeric form input gets a 400 instead of crashing the
//! handler, and database failures map to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Course title cannot be empty!")]
    EmptyTitle,

    #[error("A course with this title already exists!")]
    DuplicateTitle,

    #[error("Course not found!")]
    CourseNotFound,

    #[error("Participant not found!")]
    ParticipantNotFound,

    #[error("Invalid value for field '{field}'")]
    InvalidField { field: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::OK,
        };

        (status, crate::response::error_page(&self.to_string())).into_response()
    }
}
