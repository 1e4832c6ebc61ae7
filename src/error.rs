use crate::storage::StorageError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Failure of a request handler.
///
/// The `Display` text is what the caller sees. The storage cause of an
/// [`ApiError::Internal`] is only written to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Database not available")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal(#[source] StorageError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(detail) => tracing::error!(%detail, "Rejected request payload"),
            ApiError::ServiceUnavailable => tracing::error!("Database not available"),
            ApiError::Internal(cause) => tracing::error!(error = %cause, "Storage operation failed"),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}
