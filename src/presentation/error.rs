// HTTP error mapping
use crate::domain::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("response encoding failed with status {0}")]
    Encoding(StatusCode),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Dashboard(DashboardError::UnknownTrigger(_)) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_TRIGGER")
            }
            ApiError::Dashboard(DashboardError::InvalidConfig(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG")
            }
            ApiError::Dashboard(DashboardError::InvalidTransition { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "REFRESH_ERROR")
            }
            ApiError::Encoding(status) => (*status, "ENCODING_ERROR"),
        };

        tracing::error!(error_code = %code, error_message = %self, "API error occurred");

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
