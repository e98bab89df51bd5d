//! API errors and their HTTP mapping: status code plus a `{"detail": "..."}` body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptmaster::{OptimizeError, StoreError};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, "{}", self);
        } else {
            tracing::debug!(status = %status, "{}", self);
        }
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<OptimizeError> for ApiError {
    fn from(e: OptimizeError) -> Self {
        match e {
            OptimizeError::EmptyPrompt | OptimizeError::EmptyCategory => {
                Self::Validation(e.to_string())
            }
            OptimizeError::Llm(_) | OptimizeError::Store(_) => {
                Self::Internal(format!("Error optimizing prompt: {}", e))
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Validation(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        Self::Validation(e.body_text())
    }
}
