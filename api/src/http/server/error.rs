use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use posts_core::domain::common::CoreError;
use serde_json::json;
use thiserror::Error;

/// HTTP-level error taxonomy. Every core error maps onto exactly one of
/// these, which in turn maps onto a status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream media host failure: {0}")]
    BadGateway(String),

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Failed to start the service: {0}")]
    Startup(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError | ApiError::Startup(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::PostNotFound { .. }
            | CoreError::SubredditNotFound { .. }
            | CoreError::UserNotFound { .. } => ApiError::NotFound(error.to_string()),
            CoreError::InvalidTitle
            | CoreError::InvalidPostType { .. }
            | CoreError::EmptySubmission { .. } => ApiError::BadRequest(error.to_string()),
            CoreError::MediaUploadFailed { msg } => ApiError::BadGateway(msg),
            CoreError::ServiceUnavailable(_) | CoreError::Unhealthy => {
                ApiError::ServiceUnavailable
            }
            CoreError::InvalidMediaEndpoint { .. }
            | CoreError::DatabaseError { .. }
            | CoreError::SerializationError { .. } => {
                tracing::error!("{}", error);
                ApiError::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
