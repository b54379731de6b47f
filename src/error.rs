use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::schemas::ErrorResponse;

/// Errors returned by the business-plan handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Nothing has been seeded yet
    #[error("Business plan not found")]
    NotSeeded,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotSeeded => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotSeeded => "BUSINESS_PLAN_NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Responding with error: {}", self);
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status_code(), Json(body)).into_response()
    }
}
