use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde::Serialize;
use std::fmt;

use crate::db::DbError;
use crate::utils::validation::FieldError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    InvalidInput(Vec<FieldError>),
    Conflict(String),
    Unauthorized(String),
    NotFound(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldError]>,
}

impl<'a> ErrorResponse<'a> {
    fn message(message: &'a str) -> Self {
        ErrorResponse { message, details: None }
    }
}

impl AppError {
    /// Surfaces only the first failure of an ordered validation report.
    pub fn first_of(errors: Vec<FieldError>) -> Self {
        match errors.into_iter().next() {
            Some(first) => AppError::BadRequest(first.message),
            None => AppError::BadRequest("Invalid input".to_string()),
        }
    }

    pub fn employee_not_found() -> Self {
        AppError::NotFound("Employee not found".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::InvalidInput(details) => write!(f, "Invalid Input: {} field error(s)", details.len()),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse::message(msg)),
            AppError::InvalidInput(details) => HttpResponse::BadRequest().json(ErrorResponse {
                message: "Invalid input",
                details: Some(details.as_slice()),
            }),
            // Uniqueness conflicts are reported as 400 to the dashboard.
            AppError::Conflict(msg) => HttpResponse::BadRequest().json(ErrorResponse::message(msg)),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(ErrorResponse::message(msg)),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse::message(msg)),
            AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(ErrorResponse::message("Server error")),
        }
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(constraint) => {
                warn!("unique constraint {} rejected write", constraint);
                AppError::Conflict("Email already exists".to_string())
            }
            DbError::Sqlx(err) => {
                error!("database error: {}", err);
                AppError::DatabaseError(err.to_string())
            }
        }
    }
}
