use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::store::StoreError;
use crate::shared::constants::{NOT_FOUND_MESSAGE, UNPROCESSABLE_MESSAGE};
use crate::shared::types::ErrorResponse;

/// Client-facing failure kinds.
///
/// The payload is the internal detail. It is logged and never sent to clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed: {}", self);

        let (status, message) = match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, UNPROCESSABLE_MESSAGE),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Folds store failures into one of the two client-facing kinds.
///
/// Which kind a failure becomes is decided per endpoint, not per error.
pub trait StoreResultExt<T> {
    fn or_not_found(self, context: &str) -> Result<T>;
    fn or_unprocessable(self, context: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, StoreError> {
    fn or_not_found(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            log_store_error(context, &e);
            AppError::NotFound(format!("{}: {}", context, e))
        })
    }

    fn or_unprocessable(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            log_store_error(context, &e);
            AppError::Unprocessable(format!("{}: {}", context, e))
        })
    }
}

fn log_store_error(context: &str, err: &StoreError) {
    match err {
        StoreError::Database(e) => tracing::error!("{}: {:?}", context, e),
        StoreError::QuestionNotFound(id) => {
            tracing::info!("{}: question {} does not exist", context, id)
        }
    }
}
