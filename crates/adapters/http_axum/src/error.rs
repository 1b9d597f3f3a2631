//! HTTP error response mapping.
//!
//! Every failure is rendered as `{"code": ..., "error": ...}` where `code` is a
//! stable machine-readable kind and `error` a human-readable message. Store
//! failures are logged here and never leak their source to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use userhub_domain::error::UserHubError;

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    error: String,
}

/// A [`UserHubError`] on its way out as an HTTP response.
pub struct ApiError(UserHubError);

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            UserHubError::RecordInvalid(_) => (StatusCode::BAD_REQUEST, "record_invalid"),
            UserHubError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            UserHubError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable")
            }
        }
    }
}

impl From<UserHubError> for ApiError {
    fn from(err: UserHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let error = match self.0 {
            UserHubError::RecordInvalid(inner) => inner.to_string(),
            UserHubError::NotFound(inner) => inner.to_string(),
            UserHubError::StoreUnavailable(source) => {
                tracing::error!(error = %source, "user store unavailable");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { code, error })).into_response()
    }
}
