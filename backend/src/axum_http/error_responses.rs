use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::usecases::errors::UseCaseError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<UseCaseError> for AppError {
    fn from(err: UseCaseError) -> Self {
        if err.is_record_not_found() {
            return AppError::NotFound(err.to_string());
        }

        match err {
            UseCaseError::InvalidArgument(_)
            | UseCaseError::NotAllowed(_)
            | UseCaseError::StatusUnchanged => AppError::BadRequest(err.to_string()),
            UseCaseError::NotFound(_) => AppError::NotFound(err.to_string()),
            UseCaseError::Internal(inner) => AppError::Internal(inner),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                error!(error = ?err, "request failed with internal error");
                // Don't leak internal error detail to client
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use crates::domain::repositories::errors::RepositoryError;

    fn status_of(err: UseCaseError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn rule_violations_are_bad_requests() {
        assert_eq!(
            status_of(UseCaseError::InvalidArgument("id".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UseCaseError::NotAllowed("cancelled".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(UseCaseError::StatusUnchanged), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_records_are_not_found() {
        assert_eq!(
            status_of(UseCaseError::NotFound("product p1".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(UseCaseError::Internal(
                RepositoryError::NotFound("sub-1".to_string()).into()
            )),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_failures_are_internal() {
        assert_eq!(
            status_of(UseCaseError::Internal(anyhow!("connection refused"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
