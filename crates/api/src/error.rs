//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gallery::GalleryError;
use pricing::PricingError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced to the dashboard
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Pricing(PricingError::MissingCoordinate) => {
                (StatusCode::BAD_REQUEST, "missing_coordinate")
            }
            ApiError::Pricing(PricingError::UnknownCategory(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unknown_category")
            }
            ApiError::Pricing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "prediction_failed"),
            ApiError::InvalidInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input"),
            ApiError::Gallery(GalleryError::InvalidName(_)) => (StatusCode::BAD_REQUEST, "invalid_name"),
            ApiError::Gallery(GalleryError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Gallery(GalleryError::Io { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "gallery_unavailable")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        if status.is_server_error() {
            error!("{}: {}", kind, self);
        } else {
            warn!("{}: {}", kind, self);
        }

        let body = ErrorBody {
            kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
