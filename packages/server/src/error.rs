use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{CatalogError, StorageError};
use serde::Serialize;

const UPLOADS_DISABLED_MESSAGE: &str = "Uploads are disabled: no service-role key is configured";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `UPLOADS_DISABLED`, `UPSTREAM_ERROR`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Unsupported file type")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// No service-role key is configured, so nothing may be written.
    UploadsDisabled,
    /// The storage or database backend rejected or failed a call.
    Upstream(String),
    Internal(String),
}

impl AppError {
    /// Human-readable form, for inline rendering on the page.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Upstream(msg) => msg.clone(),
            Self::UploadsDisabled => UPLOADS_DISABLED_MESSAGE.to_string(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::UploadsDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody {
                    code: "UPLOADS_DISABLED",
                    message: UPLOADS_DISABLED_MESSAGE.into(),
                },
            ),
            AppError::Upstream(msg) => {
                tracing::warn!("Backend error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        code: "UPSTREAM_ERROR",
                        message: msg,
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: INTERNAL_MESSAGE.into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Upstream(err.to_string())
    }
}
