use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{trace, warn};

use crate::marshal::SchemaError;
use crate::usecases::UseCaseError;

/// Boundary-level failures, mapped onto HTTP status codes.
///
/// Only validation failures carry a response body; everything else surfaces
/// as a bare status, with no retry or local recovery.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("validation failed at `{}`", .0.path)]
    Validation(SchemaError),
    #[error("malformed payload :: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation(error) => {
                trace!("rejecting payload: {}", error.message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error)).into_response()
            }
            ServerError::UseCase(UseCaseError::NotFound(error)) => {
                trace!("{error}");
                StatusCode::NOT_FOUND.into_response()
            }
            error => {
                warn!("request failed: {error}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
