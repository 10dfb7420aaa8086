//! API error handling and response conversion.
//!
//! Not-found outcomes and request rejections are rendered through the same
//! JSON envelope ([`ErrorResponse`]). Rejections keep the status code axum
//! assigned to them.

use std::fmt;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::dto::ErrorResponse;

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity_type} with identifier '{identifier}' not found")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("Invalid request body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    #[must_use]
    pub fn user_not_found(identifier: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.to_string(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidJson(rejection) => rejection.status(),
            Self::InvalidPath(rejection) => rejection.status(),
        }
    }

    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::NotFound { entity_type, .. } => {
                format!("{}_NOT_FOUND", entity_type.to_uppercase())
            }
            Self::InvalidJson(_) => "INVALID_JSON_BODY".to_string(),
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status_code, "Request rejected");
        }

        let body = ErrorResponse::new(self.error_code(), self.to_string());

        (status_code, Json(body)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use axum::body::to_bytes;
    use rstest::rstest;

    #[rstest]
    fn user_not_found_describes_identifier() {
        let error = ApiError::user_not_found(UserId::new(999));

        assert_eq!(error.to_string(), "User with identifier '999' not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.error_code(), "USER_NOT_FOUND");
    }

    #[rstest]
    #[tokio::test]
    async fn into_response_renders_envelope() {
        let response = ApiError::user_not_found(UserId::new(7)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.error.code, "USER_NOT_FOUND");
        assert_eq!(body.error.message, "User with identifier '7' not found");
    }
}
