use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections surface as 422
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppError::Unprocessable(json_rejection_message(rejection))),
        }
    }
}

fn json_rejection_message(rejection: JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
        JsonRejection::MissingJsonContentType(err) => {
            format!("Missing JSON content type: {}", err)
        }
        _ => "Failed to parse JSON body".to_string(),
    }
}

/// Path extractor whose rejections surface as 404, like an unmatched route
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppError::NotFound(path_rejection_message(rejection))),
        }
    }
}

fn path_rejection_message(rejection: PathRejection) -> String {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            format!("Invalid path parameter: {}", err.body_text())
        }
        _ => "Failed to read path parameters".to_string(),
    }
}
