use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("email is already registered: {0}")]
    DuplicateEmail(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to run the database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("failed to hash the password: {0}")]
    PasswordHashError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            e @ (AppError::SpecificOperationError(_) | AppError::PasswordHashError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}
